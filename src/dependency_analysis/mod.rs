//! Domain layer: repository catalog, dependency graph construction and load ordering
//!
//! Everything in here is pure and synchronous; I/O lives behind the ports.
pub mod domain;
pub mod services;
