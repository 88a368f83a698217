//! Host settings read from the environment.
//!
//! | variable             | default                 |
//! |----------------------|-------------------------|
//! | `CARDS_HOST`         | `127.0.0.1`             |
//! | `CARDS_PORT`         | `8080`                  |
//! | `CARDS_API_ORIGIN`   | `http://localhost:8000` |
//! | `CARDS_OPEN_BROWSER` | `true`                  |

use common::model::config::{ClientConfig, DEFAULT_API_ORIGIN};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Cards API origin handed to the frontend.
    pub api_origin: String,
    /// Open the admin UI in the default browser after start.
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("CARDS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("CARDS_PORT inválido ({}): {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match get("CARDS_OPEN_BROWSER") {
            Some(raw) => !matches!(raw.to_ascii_lowercase().as_str(), "0" | "false" | "no"),
            None => true,
        };

        Ok(Self {
            host: get("CARDS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            api_origin: get("CARDS_API_ORIGIN")
                .map(|origin| origin.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string()),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_origin: self.api_origin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
        assert!(config.open_browser);
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config_from(&[
            ("CARDS_HOST", "0.0.0.0"),
            ("CARDS_PORT", " 9000 "),
            ("CARDS_API_ORIGIN", "https://api.example.com/"),
            ("CARDS_OPEN_BROWSER", "No"),
        ])
        .expect("valid config");

        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.client_config().api_origin, "https://api.example.com");
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("CARDS_PORT", "80000")]).unwrap_err();
        assert!(err.contains("CARDS_PORT"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("CARDS_HOST", "  "), ("CARDS_OPEN_BROWSER", "")]).expect("valid");
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.open_browser);
    }
}
