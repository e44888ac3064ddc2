use bytemuck::TransparentWrapper;

use crate::datatypes::Vec3D;

/// A position in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct Position3D(pub Vec3D);

impl Position3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Position3D(Vec3D::new(x, y, z))
    }
}

impl From<Vec3D> for Position3D {
    fn from(v: Vec3D) -> Self {
        Position3D(v)
    }
}

impl From<[f32; 3]> for Position3D {
    fn from(xyz: [f32; 3]) -> Self {
        Position3D(Vec3D(xyz))
    }
}

impl_transparent_component!(Position3D, Vec3D, "rerun.point3d");
