use bytemuck::TransparentWrapper;

use crate::datatypes;

/// A keypoint within a class; pairs with a [`ClassId`](super::ClassId).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct KeypointId(pub datatypes::KeypointId);

impl From<u16> for KeypointId {
    fn from(id: u16) -> Self {
        KeypointId(datatypes::KeypointId(id))
    }
}

impl_transparent_component!(KeypointId, datatypes::KeypointId, "rerun.keypoint_id");
