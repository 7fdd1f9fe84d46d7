use anyhow::{Context, Result};

/// Environment variable naming the backend base URL, e.g.
/// `https://vacuum.example.com` (no trailing slash required).
const BACKEND_URL_ENV: &str = "TREASURESENSE_BACKEND_URL";

/// All endpoint paths hang off this prefix on the backend host.
const API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    backend_url: String,
}

impl ConsoleConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim_end_matches('/').to_string();
        Self { backend_url }
    }

    /// Read the backend base URL from the environment.
    pub fn from_env() -> Result<Self> {
        let backend_url = std::env::var(BACKEND_URL_ENV)
            .with_context(|| format!("{BACKEND_URL_ENV} is not set"))?;
        Ok(Self::new(backend_url))
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Root for every API request: `<backend_url>/api`.
    pub fn api_root(&self) -> String {
        format!("{}{}", self.backend_url, API_PREFIX)
    }
}
