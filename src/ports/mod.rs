/// Ports module defining interfaces for hexagonal architecture
///
/// These are the driven ports the application core uses to reach catalog
/// data, formatting, output destinations and the console.
pub mod outbound;
