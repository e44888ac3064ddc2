use bytemuck::TransparentWrapper;

use crate::datatypes::Vec3D;

/// A displacement in 3D space, e.g. the direction and length of an arrow.
#[derive(Clone, Copy, Debug, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct Vector3D(pub Vec3D);

impl Vector3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3D(Vec3D::new(x, y, z))
    }
}

impl From<Vec3D> for Vector3D {
    fn from(v: Vec3D) -> Self {
        Vector3D(v)
    }
}

impl From<[f32; 3]> for Vector3D {
    fn from(xyz: [f32; 3]) -> Self {
        Vector3D(Vec3D(xyz))
    }
}

impl_transparent_component!(Vector3D, Vec3D, "rerun.vector3d");
