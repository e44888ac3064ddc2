use bytemuck::TransparentWrapper;

use crate::datatypes::Vec3D;

/// A point of origin in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct Origin3D(pub Vec3D);

impl Origin3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Origin3D(Vec3D::new(x, y, z))
    }

    pub const fn x(&self) -> f32 {
        self.0.x()
    }

    pub const fn y(&self) -> f32 {
        self.0.y()
    }

    pub const fn z(&self) -> f32 {
        self.0.z()
    }
}

impl From<Vec3D> for Origin3D {
    fn from(v: Vec3D) -> Self {
        Origin3D(v)
    }
}

impl From<[f32; 3]> for Origin3D {
    fn from(xyz: [f32; 3]) -> Self {
        Origin3D(Vec3D(xyz))
    }
}

impl_transparent_component!(Origin3D, Vec3D, "rerun.origin3d");
