//! Configuration: where the secret store lives and how to authenticate.

pub mod settings;

pub use settings::Settings;
