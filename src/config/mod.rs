mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, API_KEY_ENV_VARS};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, GenerationConfig, OutputConfig};
