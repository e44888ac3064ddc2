use std::sync::{Arc, OnceLock};

use arrow::array::{Float32Builder, FixedSizeListBuilder, ListBuilder};
use arrow::datatypes::{DataType, Field, FieldRef};
use rr_common::Result;

use crate::datatypes::Vec3D;
use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Component, Loggable, MemoryPool};

/// A chain of connected line segments in 3D space.
///
/// Not a layout alias of any datatype: each strip becomes one list entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStrip3D(pub Vec<Vec3D>);

impl LineStrip3D {
    pub fn points(&self) -> &[Vec3D] {
        &self.0
    }
}

impl<T: Into<Vec3D>> FromIterator<T> for LineStrip3D {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LineStrip3D(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Vec3D>> for LineStrip3D {
    fn from(points: Vec<Vec3D>) -> Self {
        LineStrip3D(points)
    }
}

impl From<Vec<[f32; 3]>> for LineStrip3D {
    fn from(points: Vec<[f32; 3]>) -> Self {
        points.into_iter().collect()
    }
}

fn item_field() -> FieldRef {
    static ITEM: OnceLock<FieldRef> = OnceLock::new();
    ITEM.get_or_init(|| Arc::new(Field::new("item", Vec3D::arrow_datatype().clone(), false)))
        .clone()
}

impl Loggable for LineStrip3D {
    type Builder = ListBuilder<FixedSizeListBuilder<Float32Builder>>;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::List(item_field()))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        let memory_pool = require_pool(memory_pool)?;
        let points = Vec3D::new_arrow_array_builder(Some(memory_pool))?;
        Ok(ListBuilder::new(points).with_field(item_field()))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;

        for strip in elements {
            Vec3D::fill_arrow_array_builder(Some(builder.values()), Some(&strip.0))?;
            builder.append(true);
        }
        Ok(())
    }
}

impl Component for LineStrip3D {
    const NAME: &'static str = "rerun.linestrip3d";
}
