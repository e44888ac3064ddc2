use arrow::array::Float32Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

use crate::Component;

/// How many raw depth units make up one meter.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TransparentWrapper)]
#[repr(transparent)]
pub struct DepthMeter(pub f32);

impl From<f32> for DepthMeter {
    fn from(units_per_meter: f32) -> Self {
        DepthMeter(units_per_meter)
    }
}

impl_primitive_loggable!(DepthMeter, f32, Float32Builder, DataType::Float32);

impl Component for DepthMeter {
    const NAME: &'static str = "rerun.components.DepthMeter";
}
