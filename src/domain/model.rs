use crate::domain::ports::KvpSerializable;
use crate::utils::error::{Result, ScalingError};
use crate::utils::number::format_number;
use crate::utils::validation::{validate_non_negative, validate_ordered};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Desired grid extent along one axis, rendered as `axis(size)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisValue", rename_all = "camelCase")]
pub struct TargetAxisSize {
    axis: String,
    target_size: f64,
}

impl TargetAxisSize {
    /// Fails with `InvalidArgument` when `target_size` is negative. The axis
    /// name is taken as-is, empty names included.
    pub fn new(axis: impl Into<String>, target_size: f64) -> Result<Self> {
        validate_non_negative("target_size", target_size)?;
        Ok(Self {
            axis: axis.into(),
            target_size,
        })
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn target_size(&self) -> f64 {
        self.target_size
    }
}

impl KvpSerializable for TargetAxisSize {
    fn to_kvp(&self) -> String {
        format!("{}({})", self.axis, format_number(self.target_size))
    }
}

/// Per-axis scale factor, rendered as `axis(factor)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisFactor", rename_all = "camelCase")]
pub struct AxisScaleFactor {
    axis: String,
    scale_factor: f64,
}

impl AxisScaleFactor {
    pub fn new(axis: impl Into<String>, scale_factor: f64) -> Result<Self> {
        validate_non_negative("scale_factor", scale_factor)?;
        Ok(Self {
            axis: axis.into(),
            scale_factor,
        })
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl KvpSerializable for AxisScaleFactor {
    fn to_kvp(&self) -> String {
        format!("{}({})", self.axis, format_number(self.scale_factor))
    }
}

/// Target interval along one axis, rendered as `axis(low:high)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisExtent")]
pub struct TargetAxisExtent {
    axis: String,
    low: f64,
    high: f64,
}

impl TargetAxisExtent {
    pub fn new(axis: impl Into<String>, low: f64, high: f64) -> Result<Self> {
        validate_ordered("extent", low, high)?;
        Ok(Self {
            axis: axis.into(),
            low,
            high,
        })
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl KvpSerializable for TargetAxisExtent {
    fn to_kvp(&self) -> String {
        format!(
            "{}({}:{})",
            self.axis,
            format_number(self.low),
            format_number(self.high)
        )
    }
}

/// Uniform scale factor applied to every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub fn new(factor: f64) -> Result<Self> {
        validate_non_negative("scale_factor", factor)?;
        Ok(Self(factor))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl KvpSerializable for ScaleFactor {
    fn to_kvp(&self) -> String {
        format_number(self.0)
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = ScalingError;

    fn try_from(factor: f64) -> Result<Self> {
        Self::new(factor)
    }
}

impl From<ScaleFactor> for f64 {
    fn from(factor: ScaleFactor) -> Self {
        factor.0
    }
}

// Deserialization shapes; every value object is rebuilt through its
// validating constructor.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAxisValue {
    axis: String,
    target_size: f64,
}

impl TryFrom<RawAxisValue> for TargetAxisSize {
    type Error = ScalingError;

    fn try_from(raw: RawAxisValue) -> Result<Self> {
        Self::new(raw.axis, raw.target_size)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAxisFactor {
    axis: String,
    scale_factor: f64,
}

impl TryFrom<RawAxisFactor> for AxisScaleFactor {
    type Error = ScalingError;

    fn try_from(raw: RawAxisFactor) -> Result<Self> {
        Self::new(raw.axis, raw.scale_factor)
    }
}

#[derive(Deserialize)]
struct RawAxisExtent {
    axis: String,
    low: f64,
    high: f64,
}

impl TryFrom<RawAxisExtent> for TargetAxisExtent {
    type Error = ScalingError;

    fn try_from(raw: RawAxisExtent) -> Result<Self> {
        Self::new(raw.axis, raw.low, raw.high)
    }
}

impl fmt::Display for TargetAxisSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kvp())
    }
}

impl fmt::Display for AxisScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kvp())
    }
}

impl fmt::Display for TargetAxisExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kvp())
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kvp())
    }
}
