//! Configuration management module

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::ClientConfigBuilder;
pub use loader::ClientConfig;
pub use validation::ValidationError;
