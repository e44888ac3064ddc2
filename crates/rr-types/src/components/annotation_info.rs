use bytemuck::TransparentWrapper;

use crate::datatypes;

/// Label and color for one class or keypoint id.
#[derive(Clone, Debug, Default, PartialEq, Eq, TransparentWrapper)]
#[repr(transparent)]
pub struct AnnotationInfo(pub datatypes::AnnotationInfo);

impl From<datatypes::AnnotationInfo> for AnnotationInfo {
    fn from(info: datatypes::AnnotationInfo) -> Self {
        AnnotationInfo(info)
    }
}

impl_transparent_component!(AnnotationInfo, datatypes::AnnotationInfo, "rerun.annotation_info");
