/// Application layer - the redundancy check use case and its plumbing
///
/// Holds request/response DTOs, the factories that pick a formatter and a
/// presenter, and the use case that drives the four analysis stages.
pub mod dto;
pub mod factories;
pub mod use_cases;
