//! Service endpoint URL checks

use url::Url;

/// Validate a service endpoint URL
///
/// The URL must parse, use `http` or `https`, and name a host.
pub fn validate_endpoint_url(url_str: &str, context: &str) -> Result<Url, String> {
    let url =
        Url::parse(url_str).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("{} URL must have a valid host", context));
    }

    Ok(url)
}
