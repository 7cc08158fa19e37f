/// Redundancy domain - pure dependency-tree analysis
///
/// `domain` holds the value types flowing between the stages,
/// `services` holds the stages themselves. Nothing here performs I/O.
pub mod domain;
pub mod services;
