use arrow::array::UInt16Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

/// A 2D keypoint identifier within a class, used to connect skeleton points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct KeypointId(pub u16);

impl From<u16> for KeypointId {
    fn from(id: u16) -> Self {
        KeypointId(id)
    }
}

impl std::fmt::Display for KeypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "keypoint#{}", self.0)
    }
}

impl_primitive_loggable!(KeypointId, u16, UInt16Builder, DataType::UInt16);
