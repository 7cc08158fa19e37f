/// Use cases module containing application business logic orchestration
mod check_redundancy;

pub use check_redundancy::CheckRedundancyUseCase;
