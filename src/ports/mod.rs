/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (file system,
/// console, output destination) through the outbound ports declared here.
pub mod outbound;
