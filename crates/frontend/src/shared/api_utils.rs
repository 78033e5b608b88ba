//! API utilities for frontend-backend communication
//!
//! The collector base URL is a deployment value baked in at build time from
//! `RESORT_BACKEND_URL`, e.g.
//!
//! ```text
//! RESORT_BACKEND_URL=https://api.silverstonepark.com trunk build --release
//! ```

/// Base URL of the enquiry collector, or `None` when the build was not
/// configured with one.
pub fn backend_base_url() -> Option<String> {
    normalize_base_url(option_env!("RESORT_BACKEND_URL"))
}

/// Trims whitespace and trailing slashes; blank values count as unset
pub fn normalize_base_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("https://api.example.com", "/api/enquiries/contact");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(
            normalize_base_url(Some("https://api.example.com//")),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(
            api_url("https://api.example.com", "/api/"),
            "https://api.example.com/api/"
        );
    }

    #[test]
    fn test_blank_base_url_is_unset() {
        assert_eq!(normalize_base_url(None), None);
        assert_eq!(normalize_base_url(Some("  ")), None);
        assert_eq!(normalize_base_url(Some("/")), None);
    }
}
