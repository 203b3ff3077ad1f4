//! Credential resolution from the environment and configuration.
//!
//! The API key is resolved once at startup. Its absence is not an error
//! here; generation requests fail with a missing-credential error instead.

use super::types::Config;

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl Config {
    /// Resolve the API key from the process environment, falling back to
    /// `api.api_key` in the config file.
    pub fn resolve_api_key(&self) -> Option<SecureString> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::resolve_api_key`] with an injectable variable lookup.
    /// Empty values are treated as unset.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<SecureString>
    where
        F: Fn(&str) -> Option<String>,
    {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .chain(self.api.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .map(SecureString::new)
    }
}
