use std::env;

/// Default API root of a locally running backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Environment variable overriding the API root.
pub const API_BASE_ENV: &str = "UPWARD_API_BASE";

/// Client configuration, injected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root every request path is appended to, e.g. `http://localhost:8000/api`.
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Read `UPWARD_API_BASE`, falling back to the local default.
    pub fn from_env() -> Self {
        let api_base = env::var(API_BASE_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
