use reqwest::Url;

use crate::core::error::{AfuzzError, Result};

/// Token substituted for the marker when checking the base URL's shape.
const PROBE_TOKEN: &str = "afuzz";

/// Check that `url` is an absolute URL with a scheme and a host.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Validate the base URL and its placeholder before any request is sent.
///
/// The marker is replaced by a neutral token first, so templates like
/// `https://@.example.com/` are judged on the URL they will produce.
pub fn validate_base_url(base_url: &str, marker: &str) -> Result<()> {
    let sample = if marker.is_empty() {
        base_url.to_string()
    } else {
        base_url.replace(marker, PROBE_TOKEN)
    };

    if !is_valid_url(&sample) {
        return Err(AfuzzError::InvalidUrl(format!("Invalid base URL format: '{base_url}'")));
    }
    if marker.is_empty() || !base_url.contains(marker) {
        return Err(AfuzzError::Template(format!(
            "Base URL must contain a placeholder '{marker}'."
        )));
    }

    Ok(())
}
