use crate::utils::error::{Result, SendcloudError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SendcloudError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SendcloudError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SendcloudError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Endpoints are joined with relative paths, which drops the last segment
/// unless the base ends with a slash.
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str)?;
    if !url_str.ends_with('/') {
        return Err(SendcloudError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL must end with '/'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SendcloudError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| SendcloudError::missing(field_name))
}

/// Blank strings count as missing.
pub fn validate_non_empty_string<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(SendcloudError::missing(field_name));
    }
    Ok(value)
}
