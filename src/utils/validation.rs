use crate::utils::error::{Result, SentimentError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> SentimentError {
    SentimentError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// True when the location should be fetched over HTTP instead of the local disk.
pub fn looks_like_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

/// Directory or http(s) base URL.
pub fn validate_location(field_name: &str, location: &str) -> Result<()> {
    if looks_like_url(location) {
        validate_url(field_name, location)
    } else {
        validate_path(field_name, location)
    }
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(invalid(
            field_name,
            file,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(invalid(
            field_name,
            file,
            "File has no extension or invalid filename",
        )),
    }
}

/// A setting that must be present; blank counts as missing.
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SentimentError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("artifacts.base", "https://example.com/models").is_ok());
        assert!(validate_url("artifacts.base", "http://example.com").is_ok());
        assert!(validate_url("artifacts.base", "").is_err());
        assert!(validate_url("artifacts.base", "invalid-url").is_err());
        assert!(validate_url("artifacts.base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_location_dispatches_on_scheme() {
        assert!(validate_location("artifacts.base", "./models").is_ok());
        assert!(validate_location("artifacts.base", "https://models.example.com").is_ok());
        assert!(validate_location("artifacts.base", "http://").is_err());
        assert!(validate_location("artifacts.base", "").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("artifacts.model", "sentiment_model.json", &["json"]).is_ok());
        assert!(validate_file_extension("artifacts.model", "sentiment_model.pkl", &["json"]).is_err());
        assert!(validate_file_extension("artifacts.model", "model", &["json"]).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("artifacts.model", "sentiment_model.json").is_ok());
        assert!(matches!(
            validate_required("artifacts.model", "  "),
            Err(SentimentError::MissingConfigError { field }) if field == "artifacts.model"
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.frame_delay_ms", 120u64, 0, 2000).is_ok());
        assert!(validate_range("display.frame_delay_ms", 5000u64, 0, 2000).is_err());
    }
}
