pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ScalingConfig;

pub use self::core::scaling::{AxisSet, Scaling};
pub use domain::model::{AxisScaleFactor, ScaleFactor, TargetAxisExtent, TargetAxisSize};
pub use domain::ports::KvpSerializable;
pub use utils::error::{Result, ScalingError};
