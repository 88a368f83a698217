use serde::{Deserialize, Serialize};

/// Origin used when neither the host nor the build provides one.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Runtime settings handed from the host backend to the admin frontend.
///
/// Served once by `GET /api/config` and then treated as read-only for the
/// lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the cards API, e.g. `https://api.example.com`.
    /// Server-relative image paths are resolved against it as well.
    pub api_origin: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}
