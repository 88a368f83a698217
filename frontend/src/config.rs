//! Client-side configuration helpers.
//!
//! The `ClientConfig` itself lives in `common` because the host backend serves
//! it; this module owns how the frontend consumes it.

use common::model::config::ClientConfig;

/// Shown whenever a card has no stored photo.
pub const DEFAULT_AVATAR: &str = "/assets/images/default-avatar.png";

/// Where the host publishes the client configuration.
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Turns a stored image reference into something an `<img src>` can load.
///
/// - no reference: the bundled placeholder avatar;
/// - absolute `http(s)://` URL: unchanged;
/// - anything else: a server-relative path under `api_origin`.
pub fn resolve_image_url(config: &ClientConfig, reference: Option<&str>) -> String {
    match reference.map(str::trim).filter(|r| !r.is_empty()) {
        None => DEFAULT_AVATAR.to_string(),
        Some(url) if is_absolute(url) => url.to_string(),
        Some(path) => format!(
            "{}/{}",
            config.api_origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
    }
}

fn is_absolute(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            api_origin: "https://api.example.com".to_string(),
        }
    }

    #[test]
    fn relative_paths_are_prefixed_with_the_origin() {
        assert_eq!(
            resolve_image_url(&config(), Some("avatars/x.png")),
            "https://api.example.com/avatars/x.png"
        );
        assert_eq!(
            resolve_image_url(&config(), Some("/avatars/x.png")),
            "https://api.example.com/avatars/x.png"
        );
    }

    #[test]
    fn absolute_urls_are_kept() {
        assert_eq!(
            resolve_image_url(&config(), Some("https://cdn.example.com/x.png")),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn missing_reference_falls_back_to_placeholder() {
        assert_eq!(resolve_image_url(&config(), None), DEFAULT_AVATAR);
        assert_eq!(resolve_image_url(&config(), Some("")), DEFAULT_AVATAR);
    }

    #[test]
    fn trailing_slash_on_origin_is_ignored() {
        let config = ClientConfig {
            api_origin: "https://api.example.com/".to_string(),
        };
        assert_eq!(
            resolve_image_url(&config, Some("a.png")),
            "https://api.example.com/a.png"
        );
    }
}
