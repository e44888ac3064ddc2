use arrow::array::Float32Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

use crate::Component;

/// Layering of 2D content; higher values draw on top.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, TransparentWrapper)]
#[repr(transparent)]
pub struct DrawOrder(pub f32);

impl From<f32> for DrawOrder {
    fn from(order: f32) -> Self {
        DrawOrder(order)
    }
}

impl_primitive_loggable!(DrawOrder, f32, Float32Builder, DataType::Float32);

impl Component for DrawOrder {
    const NAME: &'static str = "rerun.draw_order";
}
