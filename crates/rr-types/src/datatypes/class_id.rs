use arrow::array::UInt16Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

/// A class identifier, resolved against an annotation context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct ClassId(pub u16);

impl From<u16> for ClassId {
    fn from(id: u16) -> Self {
        ClassId(id)
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "class#{}", self.0)
    }
}

impl_primitive_loggable!(ClassId, u16, UInt16Builder, DataType::UInt16);
