pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, ServiceConfig};
pub use loader::{load_config, DEFAULT_API_URL};
