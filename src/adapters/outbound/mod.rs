/// Outbound adapters: console progress, file access and report formatters
pub mod console;
pub mod filesystem;
pub mod formatters;
