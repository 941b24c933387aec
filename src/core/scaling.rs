use crate::core::KvpSerializable;
use crate::domain::model::{AxisScaleFactor, ScaleFactor, TargetAxisExtent, TargetAxisSize};
use crate::utils::error::{Result, ScalingError};
use std::collections::HashSet;
use url::Url;

/// Implemented by the per-axis value objects so an [`AxisSet`] can check
/// for repeated axes.
pub trait AxisEntry: KvpSerializable {
    fn axis(&self) -> &str;
}

impl AxisEntry for AxisScaleFactor {
    fn axis(&self) -> &str {
        AxisScaleFactor::axis(self)
    }
}

impl AxisEntry for TargetAxisSize {
    fn axis(&self) -> &str {
        TargetAxisSize::axis(self)
    }
}

impl AxisEntry for TargetAxisExtent {
    fn axis(&self) -> &str {
        TargetAxisExtent::axis(self)
    }
}

/// Non-empty list of per-axis entries, each axis named at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSet<T>(Vec<T>);

impl<T: AxisEntry> AxisSet<T> {
    pub fn new(entries: Vec<T>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ScalingError::invalid_argument(
                "axes",
                "at least one axis is required",
            ));
        }

        {
            let mut seen = HashSet::new();
            for entry in &entries {
                if !seen.insert(entry.axis()) {
                    tracing::debug!(axis = entry.axis(), "rejected repeated axis");
                    return Err(ScalingError::invalid_argument(
                        "axes",
                        format!("axis '{}' is listed more than once", entry.axis()),
                    ));
                }
            }
        }

        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: AxisEntry> KvpSerializable for AxisSet<T> {
    fn to_kvp(&self) -> String {
        self.0
            .iter()
            .map(KvpSerializable::to_kvp)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A WCS 2.0 scaling-extension request parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Scaling {
    ByFactor(ScaleFactor),
    AxesByFactor(AxisSet<AxisScaleFactor>),
    ToSize(AxisSet<TargetAxisSize>),
    ToExtent(AxisSet<TargetAxisExtent>),
}

impl Scaling {
    pub fn by_factor(factor: f64) -> Result<Self> {
        Ok(Self::ByFactor(ScaleFactor::new(factor)?))
    }

    pub fn axes_by_factor(factors: Vec<AxisScaleFactor>) -> Result<Self> {
        Ok(Self::AxesByFactor(AxisSet::new(factors)?))
    }

    pub fn to_size(sizes: Vec<TargetAxisSize>) -> Result<Self> {
        Ok(Self::ToSize(AxisSet::new(sizes)?))
    }

    pub fn to_extent(extents: Vec<TargetAxisExtent>) -> Result<Self> {
        Ok(Self::ToExtent(AxisSet::new(extents)?))
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ByFactor(_) => "SCALEFACTOR",
            Self::AxesByFactor(_) => "SCALEAXES",
            Self::ToSize(_) => "SCALESIZE",
            Self::ToExtent(_) => "SCALEEXTENT",
        }
    }

    /// Parameter value without the key, e.g. `i(512),j(256)`.
    pub fn value(&self) -> String {
        match self {
            Self::ByFactor(factor) => factor.to_kvp(),
            Self::AxesByFactor(axes) => axes.to_kvp(),
            Self::ToSize(axes) => axes.to_kvp(),
            Self::ToExtent(axes) => axes.to_kvp(),
        }
    }

    /// Appends `KEY=value` to the query of `url`, percent-encoded.
    pub fn append_to(&self, url: &mut Url) {
        let value = self.value();
        tracing::debug!(key = self.key(), value = %value, "appending scaling parameter");
        url.query_pairs_mut().append_pair(self.key(), &value);
    }
}

impl KvpSerializable for Scaling {
    fn to_kvp(&self) -> String {
        format!("{}={}", self.key(), self.value())
    }
}
