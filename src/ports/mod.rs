/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (network, file
/// system, console, Graphviz) through these driven ports.
pub mod outbound;
