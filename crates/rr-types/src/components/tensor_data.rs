use bytemuck::TransparentWrapper;

use crate::datatypes;

/// An n-dimensional array of numbers.
#[derive(Clone, Debug, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct TensorData(pub datatypes::TensorData);

impl From<datatypes::TensorData> for TensorData {
    fn from(tensor: datatypes::TensorData) -> Self {
        TensorData(tensor)
    }
}

impl_transparent_component!(TensorData, datatypes::TensorData, "rerun.components.TensorData");
