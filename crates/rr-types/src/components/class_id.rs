use bytemuck::TransparentWrapper;

use crate::datatypes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct ClassId(pub datatypes::ClassId);

impl From<u16> for ClassId {
    fn from(id: u16) -> Self {
        ClassId(datatypes::ClassId(id))
    }
}

impl_transparent_component!(ClassId, datatypes::ClassId, "rerun.class_id");
