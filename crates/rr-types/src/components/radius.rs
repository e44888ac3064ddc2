use arrow::array::Float32Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

use crate::Component;

/// Radius of a point or line, in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TransparentWrapper)]
#[repr(transparent)]
pub struct Radius(pub f32);

impl From<f32> for Radius {
    fn from(radius: f32) -> Self {
        Radius(radius)
    }
}

impl_primitive_loggable!(Radius, f32, Float32Builder, DataType::Float32);

impl Component for Radius {
    const NAME: &'static str = "rerun.radius";
}
