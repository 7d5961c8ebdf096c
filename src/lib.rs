pub mod cli;
pub mod config;
pub mod errors;
pub mod flatten;
pub mod vault;
