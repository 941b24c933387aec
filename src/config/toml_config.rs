use crate::core::scaling::Scaling;
use crate::core::{AxisScaleFactor, TargetAxisExtent, TargetAxisSize};
use crate::utils::error::{Result, ScalingError};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingConfig {
    pub service: ServiceConfig,
    pub scaling: ScalingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMode {
    Factor,
    Axes,
    Size,
    Extent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingSection {
    pub mode: ScalingMode,
    pub factor: Option<f64>,
    #[serde(default)]
    pub axes: Vec<AxisConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisConfig {
    pub axis: String,
    pub value: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ScalingConfig {
    /// Loads and parses a TOML scaling file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScalingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint(&self) -> Result<Url> {
        validate_url("service.endpoint", &self.service.endpoint)
    }

    /// Builds the validated parameter described by the `[scaling]` table.
    pub fn scaling(&self) -> Result<Scaling> {
        let section = &self.scaling;
        match section.mode {
            ScalingMode::Factor => {
                let factor = validate_required_field("scaling.factor", &section.factor)?;
                Scaling::by_factor(*factor)
            }
            ScalingMode::Axes => {
                let factors = section
                    .axes
                    .iter()
                    .map(|entry| {
                        let value = validate_required_field("scaling.axes.value", &entry.value)?;
                        AxisScaleFactor::new(entry.axis.clone(), *value)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Scaling::axes_by_factor(factors)
            }
            ScalingMode::Size => {
                let sizes = section
                    .axes
                    .iter()
                    .map(|entry| {
                        let value = validate_required_field("scaling.axes.value", &entry.value)?;
                        TargetAxisSize::new(entry.axis.clone(), *value)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Scaling::to_size(sizes)
            }
            ScalingMode::Extent => {
                let extents = section
                    .axes
                    .iter()
                    .map(|entry| {
                        let low = validate_required_field("scaling.axes.low", &entry.low)?;
                        let high = validate_required_field("scaling.axes.high", &entry.high)?;
                        TargetAxisExtent::new(entry.axis.clone(), *low, *high)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Scaling::to_extent(extents)
            }
        }
    }

    /// Endpoint with the scaling parameter appended.
    pub fn request_url(&self) -> Result<Url> {
        let mut url = self.endpoint()?;
        self.scaling()?.append_to(&mut url);
        Ok(url)
    }
}

impl Validate for ScalingConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service.endpoint", &self.service.endpoint)?;
        self.endpoint()?;
        self.scaling()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KvpSerializable;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SIZE_CONFIG: &str = r#"
[service]
endpoint = "https://example.com/rasdaman/ows?service=WCS&version=2.0.1&request=GetCoverage"

[scaling]
mode = "size"

[[scaling.axes]]
axis = "i"
value = 512

[[scaling.axes]]
axis = "j"
value = 256
"#;

    #[test]
    fn test_parse_size_config() {
        let config = ScalingConfig::from_toml_str(SIZE_CONFIG).unwrap();

        assert_eq!(config.scaling.mode, ScalingMode::Size);
        assert!(config.validate().is_ok());
        assert_eq!(config.scaling().unwrap().to_kvp(), "SCALESIZE=i(512),j(256)");
    }

    #[test]
    fn test_request_url_carries_scaling() {
        let config = ScalingConfig::from_toml_str(SIZE_CONFIG).unwrap();
        let url = config.request_url().unwrap();

        let scale_size = url
            .query_pairs()
            .find(|(key, _)| key == "SCALESIZE")
            .map(|(_, value)| value.into_owned());
        assert_eq!(scale_size.as_deref(), Some("i(512),j(256)"));
    }

    #[test]
    fn test_factor_and_extent_modes() {
        let factor = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost:8080/rasdaman/ows"

[scaling]
mode = "factor"
factor = 0.5
"#,
        )
        .unwrap();
        assert_eq!(factor.scaling().unwrap().to_kvp(), "SCALEFACTOR=0.5");

        let extent = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost:8080/rasdaman/ows"

[scaling]
mode = "extent"

[[scaling.axes]]
axis = "Lat"
low = 10
high = 20
"#,
        )
        .unwrap();
        assert_eq!(extent.scaling().unwrap().to_kvp(), "SCALEEXTENT=Lat(10:20)");
    }

    #[test]
    fn test_negative_size_is_invalid_argument() {
        let config = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost:8080/rasdaman/ows"

[scaling]
mode = "size"

[[scaling.axes]]
axis = "i"
value = -1
"#,
        )
        .unwrap();

        assert!(config.scaling().unwrap_err().is_invalid_argument());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_factor_is_config_error() {
        let config = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost:8080/rasdaman/ows"

[scaling]
mode = "factor"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.scaling(),
            Err(ScalingError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_WCS_ENDPOINT", "https://wcs.test.org/ows");

        let config = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "${TEST_WCS_ENDPOINT}"

[scaling]
mode = "factor"
factor = 2
"#,
        )
        .unwrap();
        assert_eq!(config.service.endpoint, "https://wcs.test.org/ows");

        std::env::remove_var("TEST_WCS_ENDPOINT");
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "invalid-url"

[scaling]
mode = "factor"
factor = 2
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_is_toml_error() {
        let result = ScalingConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost/ows"

[scaling]
mode = "stretch"
"#,
        );
        assert!(matches!(result, Err(ScalingError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SIZE_CONFIG.as_bytes()).unwrap();

        let config = ScalingConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.scaling.axes.len(), 2);
    }
}
