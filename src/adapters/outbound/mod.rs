/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod compression;
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod graphviz;
pub mod network;
