use crate::config::toml_config::ScalingConfig;
use crate::core::scaling::Scaling;
use crate::core::{AxisScaleFactor, TargetAxisExtent, TargetAxisSize};
use crate::utils::error::{Result, ScalingError};
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "wcs-scaling")]
#[command(about = "Render WCS scaling parameters as KVP query fragments")]
pub struct CliConfig {
    /// Path to a TOML scaling configuration
    #[arg(short, long, conflicts_with_all = ["size", "factor", "scale_axis", "extent"])]
    pub config: Option<String>,

    /// Service endpoint the parameter is appended to; overrides `service.endpoint`
    /// from `--config`
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Target size per axis, e.g. `--size i=512`
    #[arg(long)]
    pub size: Vec<String>,

    /// Uniform scale factor
    #[arg(long, allow_hyphen_values = true)]
    pub factor: Option<f64>,

    /// Scale factor per axis, e.g. `--scale-axis Lat=0.5`
    #[arg(long)]
    pub scale_axis: Vec<String>,

    /// Target extent per axis, e.g. `--extent i=0:99`
    #[arg(long)]
    pub extent: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_log: bool,
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<ScalingConfig>> {
        self.config
            .as_deref()
            .map(ScalingConfig::from_file)
            .transpose()
    }

    /// Builds the parameter from inline arguments. Exactly one of the four
    /// modes may be given.
    pub fn scaling(&self) -> Result<Scaling> {
        let given = [
            self.factor.is_some(),
            !self.scale_axis.is_empty(),
            !self.size.is_empty(),
            !self.extent.is_empty(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        if given != 1 {
            return Err(ScalingError::ConfigError {
                message: "Specify exactly one of --factor, --scale-axis, --size or --extent"
                    .to_string(),
            });
        }

        if let Some(factor) = self.factor {
            return Scaling::by_factor(factor);
        }

        if !self.scale_axis.is_empty() {
            let factors = self
                .scale_axis
                .iter()
                .map(|arg| {
                    let (axis, value) = parse_axis_value("--scale-axis", arg)?;
                    AxisScaleFactor::new(axis, value)
                })
                .collect::<Result<Vec<_>>>()?;
            return Scaling::axes_by_factor(factors);
        }

        if !self.size.is_empty() {
            let sizes = self
                .size
                .iter()
                .map(|arg| {
                    let (axis, value) = parse_axis_value("--size", arg)?;
                    TargetAxisSize::new(axis, value)
                })
                .collect::<Result<Vec<_>>>()?;
            return Scaling::to_size(sizes);
        }

        let extents = self
            .extent
            .iter()
            .map(|arg| {
                let (axis, low, high) = parse_axis_extent("--extent", arg)?;
                TargetAxisExtent::new(axis, low, high)
            })
            .collect::<Result<Vec<_>>>()?;
        Scaling::to_extent(extents)
    }

    /// Scaling and endpoint to render, from the config file when one is
    /// given and from inline arguments otherwise.
    pub fn resolve(&self) -> Result<(Scaling, Option<Url>)> {
        match self.load_file()? {
            Some(file) => {
                let endpoint = match self.endpoint()? {
                    Some(url) => {
                        tracing::debug!("--endpoint overrides service.endpoint from config");
                        url
                    }
                    None => file.endpoint()?,
                };
                Ok((file.scaling()?, Some(endpoint)))
            }
            None => Ok((self.scaling()?, self.endpoint()?)),
        }
    }

    pub fn endpoint(&self) -> Result<Option<Url>> {
        self.endpoint
            .as_deref()
            .map(|endpoint| validate_url("--endpoint", endpoint))
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.endpoint()?;
        if self.config.is_none() {
            self.scaling()?;
        }
        Ok(())
    }
}

fn parse_axis_value(field: &str, arg: &str) -> Result<(String, f64)> {
    let (axis, value) = arg
        .split_once('=')
        .ok_or_else(|| ScalingError::InvalidConfigValueError {
            field: field.to_string(),
            value: arg.to_string(),
            reason: "expected AXIS=VALUE".to_string(),
        })?;
    Ok((axis.to_string(), parse_number(field, value)?))
}

fn parse_axis_extent(field: &str, arg: &str) -> Result<(String, f64, f64)> {
    let (axis, interval) = arg
        .split_once('=')
        .ok_or_else(|| ScalingError::InvalidConfigValueError {
            field: field.to_string(),
            value: arg.to_string(),
            reason: "expected AXIS=LOW:HIGH".to_string(),
        })?;
    let (low, high) =
        interval
            .split_once(':')
            .ok_or_else(|| ScalingError::InvalidConfigValueError {
                field: field.to_string(),
                value: arg.to_string(),
                reason: "expected AXIS=LOW:HIGH".to_string(),
            })?;
    Ok((
        axis.to_string(),
        parse_number(field, low)?,
        parse_number(field, high)?,
    ))
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| ScalingError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("not a number: {}", e),
        })
}
