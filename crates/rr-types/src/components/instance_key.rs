use arrow::array::UInt64Builder;
use arrow::datatypes::DataType;
use bytemuck::TransparentWrapper;

use crate::Component;

/// Identifies one instance within an entity across batches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TransparentWrapper)]
#[repr(transparent)]
pub struct InstanceKey(pub u64);

impl InstanceKey {
    /// Reserved key meaning "applies to every instance".
    pub const SPLAT: InstanceKey = InstanceKey(u64::MAX);

    pub fn is_splat(&self) -> bool {
        *self == Self::SPLAT
    }
}

impl From<u64> for InstanceKey {
    fn from(key: u64) -> Self {
        InstanceKey(key)
    }
}

impl_primitive_loggable!(InstanceKey, u64, UInt64Builder, DataType::UInt64);

impl Component for InstanceKey {
    const NAME: &'static str = "rerun.instance_key";
}
