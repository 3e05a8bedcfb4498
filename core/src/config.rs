//! Environment-driven client configuration.

use thiserror::Error;

/// Name of the variable holding the CMS root URL.
pub const CMS_URL_VAR: &str = "CMS_URL";
/// Name of the variable holding the optional API bearer token.
pub const CMS_API_TOKEN_VAR: &str = "CMS_API_TOKEN";

const DEFAULT_CMS_URL: &str = "http://localhost:1337";

/// Configuration for talking to the CMS, loaded from environment variables
/// at process start.
///
/// | Env Var         | Default                 |
/// |-----------------|-------------------------|
/// | `CMS_URL`       | `http://localhost:1337` |
/// | `CMS_API_TOKEN` | unset (no bearer header)|
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL of the CMS. The REST API lives under `<cms_url>/api`;
    /// relative media paths resolve against this root.
    pub cms_url: String,
    /// Optional API bearer token. `None` or empty means requests carry no
    /// `Authorization` header.
    pub api_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
    #[error("{var} must not be blank")]
    Blank { var: &'static str },
}

impl ClientConfig {
    pub fn new(cms_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            cms_url: cms_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
        }
    }

    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cms_url = match read_var(CMS_URL_VAR)? {
            Some(url) if url.trim().is_empty() => {
                return Err(ConfigError::Blank { var: CMS_URL_VAR });
            }
            Some(url) => url,
            None => DEFAULT_CMS_URL.to_string(),
        };
        let api_token = read_var(CMS_API_TOKEN_VAR)?;
        Ok(Self::new(cms_url, api_token))
    }
}

fn read_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash_and_empty_token() {
        let config = ClientConfig::new("http://cms.example.com/", Some(String::new()));
        assert_eq!(config.cms_url, "http://cms.example.com");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn new_keeps_non_empty_token() {
        let config = ClientConfig::new("http://cms.example.com", Some("secret".to_string()));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }
}
