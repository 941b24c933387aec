use crate::utils::error::{Result, ScalingError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects anything that does not satisfy `value >= 0`, NaN included.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !(value >= 0.0) {
        tracing::debug!(field = field_name, value, "rejected negative value");
        return Err(ScalingError::invalid_argument(
            field_name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_ordered(field_name: &str, low: f64, high: f64) -> Result<()> {
    if !(low <= high) {
        tracing::debug!(field = field_name, low, high, "rejected inverted interval");
        return Err(ScalingError::invalid_argument(
            field_name,
            format!("low bound {} must not exceed high bound {}", low, high),
        ));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(ScalingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ScalingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScalingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScalingError::ConfigError {
        message: format!("Missing required field '{}'", field_name),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScalingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("target_size", 0.0).is_ok());
        assert!(validate_non_negative("target_size", 512.0).is_ok());
        assert!(validate_non_negative("target_size", f64::INFINITY).is_ok());
        assert!(validate_non_negative("target_size", -1.0).unwrap_err().is_invalid_argument());
        assert!(validate_non_negative("target_size", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_ordered() {
        assert!(validate_ordered("extent", 10.0, 20.0).is_ok());
        assert!(validate_ordered("extent", 5.0, 5.0).is_ok());
        assert!(validate_ordered("extent", 20.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("service.endpoint", "https://example.com/ows").is_ok());
        assert!(validate_url("service.endpoint", "http://example.com").is_ok());
        assert!(validate_url("service.endpoint", "").is_err());
        assert!(validate_url("service.endpoint", "invalid-url").is_err());
        assert!(validate_url("service.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(2.0);
        let missing: Option<f64> = None;
        assert_eq!(*validate_required_field("scaling.factor", &present).unwrap(), 2.0);
        assert!(validate_required_field("scaling.factor", &missing).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("service.coverage_id", "mean_summer_airtemp").is_ok());
        assert!(validate_non_empty_string("service.coverage_id", "   ").is_err());
    }
}
