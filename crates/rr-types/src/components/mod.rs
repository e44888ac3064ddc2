//! Named components: one wire column each.

mod annotation_info;
mod class_id;
mod color;
mod depth_meter;
mod draw_order;
mod indicator;
mod instance_key;
mod keypoint_id;
mod line_strip3d;
mod optional_annotation_info;
mod origin3d;
mod position3d;
mod radius;
mod tensor_data;
mod text;
mod vector3d;

pub use annotation_info::AnnotationInfo;
pub use class_id::ClassId;
pub use color::Color;
pub use depth_meter::DepthMeter;
pub use draw_order::DrawOrder;
pub use indicator::IndicatorComponent;
pub use instance_key::InstanceKey;
pub use keypoint_id::KeypointId;
pub use line_strip3d::LineStrip3D;
pub use optional_annotation_info::OptionalAnnotationInfo;
pub use origin3d::Origin3D;
pub use position3d::Position3D;
pub use radius::Radius;
pub use tensor_data::TensorData;
pub use text::Text;
pub use vector3d::Vector3D;
