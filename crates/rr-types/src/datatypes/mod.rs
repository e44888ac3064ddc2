//! Plain-old-data value types and their Arrow layouts.
//!
//! Datatypes carry no wire name of their own; components wrap them.

mod annotation_info;
mod class_id;
mod color;
mod keypoint_id;
mod tensor_data;
mod utf8;
mod vec3d;

pub use annotation_info::AnnotationInfo;
pub use class_id::ClassId;
pub use color::Color;
pub use keypoint_id::KeypointId;
pub use tensor_data::{TensorBuffer, TensorBufferBuilder, TensorData, TensorDimension};
pub use utf8::Utf8;
pub use vec3d::Vec3D;

use arrow::array::{ArrayBuilder, StructBuilder};
use arrow::error::ArrowError;
use rr_common::{Error, Result};

/// Typed child builder of a struct column.
pub(crate) fn struct_field_builder<'b, T: ArrayBuilder>(
    builder: &'b mut StructBuilder,
    index: usize,
    name: &str,
) -> Result<&'b mut T> {
    builder.field_builder::<T>(index).ok_or_else(|| {
        Error::Arrow(ArrowError::InvalidArgumentError(format!(
            "struct field `{name}` (#{index}) has an unexpected builder type"
        )))
    })
}
