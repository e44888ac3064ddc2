use std::sync::OnceLock;

use arrow::array::{StringBuilder, StructBuilder, UInt16Builder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Fields};
use rr_common::Result;

use super::{struct_field_builder, Color, Utf8};
use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Loggable, MemoryPool};

/// Label and color attached to a class or keypoint id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationInfo {
    /// Class or keypoint id this info belongs to.
    pub id: u16,

    pub label: Option<Utf8>,

    pub color: Option<Color>,
}

impl AnnotationInfo {
    pub fn new(id: u16) -> Self {
        AnnotationInfo {
            id,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<Utf8>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

fn fields() -> &'static Fields {
    static FIELDS: OnceLock<Fields> = OnceLock::new();
    FIELDS.get_or_init(|| {
        Fields::from(vec![
            Field::new("id", DataType::UInt16, false),
            Field::new("label", DataType::Utf8, true),
            Field::new("color", DataType::UInt32, true),
        ])
    })
}

impl Loggable for AnnotationInfo {
    type Builder = StructBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::Struct(fields().clone()))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(StructBuilder::from_fields(fields().clone(), 0))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;

        let ids = struct_field_builder::<UInt16Builder>(builder, 0, "id")?;
        for element in elements {
            ids.append_value(element.id);
        }

        let labels = struct_field_builder::<StringBuilder>(builder, 1, "label")?;
        for element in elements {
            labels.append_option(element.label.as_ref().map(Utf8::as_str));
        }

        let colors = struct_field_builder::<UInt32Builder>(builder, 2, "color")?;
        for element in elements {
            colors.append_option(element.color.map(|color| color.0));
        }

        for _ in elements {
            builder.append(true);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackingMemoryPool;
    use arrow::array::{Array, ArrayBuilder, AsArray};
    use arrow::datatypes::{UInt16Type, UInt32Type};

    #[test]
    fn test_fill_keeps_optional_leaves_nullable() {
        let pool = TrackingMemoryPool::new();
        let mut builder = AnnotationInfo::new_arrow_array_builder(Some(&pool)).unwrap();
        let infos = [
            AnnotationInfo::new(1).with_label("person").with_color(Color::from_rgb(255, 0, 0)),
            AnnotationInfo::new(2),
        ];
        AnnotationInfo::fill_arrow_array_builder(Some(&mut builder), Some(&infos)).unwrap();

        let array = ArrayBuilder::finish(&mut builder);
        assert_eq!(array.data_type(), AnnotationInfo::arrow_datatype());
        let structs = array.as_struct();
        assert_eq!(structs.len(), 2);
        assert_eq!(structs.null_count(), 0);

        let ids = structs.column(0).as_primitive::<UInt16Type>();
        assert_eq!(ids.values().as_ref(), &[1, 2]);

        let labels = structs.column(1).as_string::<i32>();
        assert_eq!(labels.value(0), "person");
        assert!(labels.is_null(1));

        let colors = structs.column(2).as_primitive::<UInt32Type>();
        assert_eq!(colors.value(0), 0xFF00_00FF);
        assert!(colors.is_null(1));
    }
}
