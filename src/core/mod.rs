pub mod scaling;

pub use crate::domain::model::{AxisScaleFactor, ScaleFactor, TargetAxisExtent, TargetAxisSize};
pub use crate::domain::ports::KvpSerializable;
pub use crate::utils::error::Result;
