use std::sync::{Arc, OnceLock};

use arrow::array::{Float32Builder, FixedSizeListBuilder};
use arrow::datatypes::{DataType, Field, FieldRef};
use bytemuck::TransparentWrapper;
use rr_common::Result;

use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Loggable, MemoryPool};

/// A vector in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, TransparentWrapper)]
#[repr(transparent)]
pub struct Vec3D(pub [f32; 3]);

impl Vec3D {
    pub const ZERO: Vec3D = Vec3D([0.0; 3]);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3D([x, y, z])
    }

    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    pub const fn z(&self) -> f32 {
        self.0[2]
    }
}

impl From<[f32; 3]> for Vec3D {
    fn from(xyz: [f32; 3]) -> Self {
        Vec3D(xyz)
    }
}

impl From<(f32, f32, f32)> for Vec3D {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vec3D([x, y, z])
    }
}

fn item_field() -> FieldRef {
    static ITEM: OnceLock<FieldRef> = OnceLock::new();
    ITEM.get_or_init(|| Arc::new(Field::new("item", DataType::Float32, false)))
        .clone()
}

impl Loggable for Vec3D {
    type Builder = FixedSizeListBuilder<Float32Builder>;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::FixedSizeList(item_field(), 3))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(FixedSizeListBuilder::new(Float32Builder::new(), 3).with_field(item_field()))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;

        let xyz: &[[f32; 3]] = Vec3D::peel_slice(elements);
        builder.values().append_slice(bytemuck::cast_slice(xyz));
        for _ in elements {
            builder.append(true);
        }
        Ok(())
    }
}
