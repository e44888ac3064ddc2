use std::any::Any;
use std::sync::{Arc, OnceLock};

use arrow::array::{
    ArrayBuilder, ArrayRef, ListBuilder, PrimitiveBuilder, StringBuilder, StructBuilder,
    UInt64Builder, UnionArray,
};
use arrow::buffer::ScalarBuffer;
use arrow::datatypes::{
    ArrowPrimitiveType, DataType, Field, FieldRef, Fields, Float32Type, Float64Type, UInt16Type,
    UInt32Type, UInt64Type, UInt8Type, UnionFields, UnionMode,
};
use arrow::error::ArrowError;
use rr_common::Result;

use super::{struct_field_builder, Utf8};
use crate::loggable::{require_builder, require_elements, require_pool};
use crate::{Loggable, MemoryPool};

/// One axis of a tensor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TensorDimension {
    pub size: u64,
    pub name: Option<Utf8>,
}

impl TensorDimension {
    pub fn new(size: u64) -> Self {
        TensorDimension { size, name: None }
    }

    pub fn named(size: u64, name: impl Into<Utf8>) -> Self {
        TensorDimension {
            size,
            name: Some(name.into()),
        }
    }
}

fn dimension_fields() -> &'static Fields {
    static FIELDS: OnceLock<Fields> = OnceLock::new();
    FIELDS.get_or_init(|| {
        Fields::from(vec![
            Field::new("size", DataType::UInt64, false),
            Field::new("name", DataType::Utf8, true),
        ])
    })
}

impl Loggable for TensorDimension {
    type Builder = StructBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::Struct(dimension_fields().clone()))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(StructBuilder::from_fields(dimension_fields().clone(), 0))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;

        let sizes = struct_field_builder::<UInt64Builder>(builder, 0, "size")?;
        for element in elements {
            sizes.append_value(element.size);
        }

        let names = struct_field_builder::<StringBuilder>(builder, 1, "name")?;
        for element in elements {
            names.append_option(element.name.as_ref().map(Utf8::as_str));
        }

        for _ in elements {
            builder.append(true);
        }
        Ok(())
    }
}

/// Flat tensor contents, one variant per element type.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl TensorBuffer {
    pub fn len(&self) -> usize {
        match self {
            TensorBuffer::U8(values) => values.len(),
            TensorBuffer::U16(values) => values.len(),
            TensorBuffer::U32(values) => values.len(),
            TensorBuffer::U64(values) => values.len(),
            TensorBuffer::F32(values) => values.len(),
            TensorBuffer::F64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Union type id of this variant on the wire.
    fn type_id(&self) -> i8 {
        match self {
            TensorBuffer::U8(_) => 0,
            TensorBuffer::U16(_) => 1,
            TensorBuffer::U32(_) => 2,
            TensorBuffer::U64(_) => 3,
            TensorBuffer::F32(_) => 4,
            TensorBuffer::F64(_) => 5,
        }
    }
}

impl Default for TensorBuffer {
    fn default() -> Self {
        TensorBuffer::U8(Vec::new())
    }
}

macro_rules! impl_buffer_from {
    ($($native:ty => $variant:ident),* $(,)?) => {$(
        impl From<Vec<$native>> for TensorBuffer {
            fn from(values: Vec<$native>) -> Self {
                TensorBuffer::$variant(values)
            }
        }
    )*};
}

impl_buffer_from! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

fn variant_item(datatype: DataType) -> FieldRef {
    Arc::new(Field::new("item", datatype, false))
}

fn union_fields() -> &'static UnionFields {
    static FIELDS: OnceLock<UnionFields> = OnceLock::new();
    FIELDS.get_or_init(|| {
        let variants = [
            ("U8", DataType::UInt8),
            ("U16", DataType::UInt16),
            ("U32", DataType::UInt32),
            ("U64", DataType::UInt64),
            ("F32", DataType::Float32),
            ("F64", DataType::Float64),
        ];
        UnionFields::new(
            0..variants.len() as i8,
            variants.into_iter().map(|(name, datatype)| {
                Field::new(name, DataType::List(variant_item(datatype)), false)
            }),
        )
    })
}

fn variant_builder<T: ArrowPrimitiveType>() -> ListBuilder<PrimitiveBuilder<T>> {
    ListBuilder::new(PrimitiveBuilder::<T>::new()).with_field(variant_item(T::DATA_TYPE))
}

/// Appends one list entry and returns its index within the variant column.
fn push_values<T: ArrowPrimitiveType>(
    list: &mut ListBuilder<PrimitiveBuilder<T>>,
    values: &[T::Native],
) -> std::result::Result<i32, ArrowError> {
    let offset = i32::try_from(ArrayBuilder::len(list)).map_err(|_| {
        ArrowError::InvalidArgumentError("tensor buffer column exceeds i32 offsets".to_string())
    })?;
    list.values().append_slice(values);
    list.append(true);
    Ok(offset)
}

/// Builder for the dense union column of [`TensorBuffer`]s.
pub struct TensorBufferBuilder {
    type_ids: Vec<i8>,
    offsets: Vec<i32>,
    u8s: ListBuilder<PrimitiveBuilder<UInt8Type>>,
    u16s: ListBuilder<PrimitiveBuilder<UInt16Type>>,
    u32s: ListBuilder<PrimitiveBuilder<UInt32Type>>,
    u64s: ListBuilder<PrimitiveBuilder<UInt64Type>>,
    f32s: ListBuilder<PrimitiveBuilder<Float32Type>>,
    f64s: ListBuilder<PrimitiveBuilder<Float64Type>>,
}

impl TensorBufferBuilder {
    pub fn new() -> Self {
        TensorBufferBuilder {
            type_ids: Vec::new(),
            offsets: Vec::new(),
            u8s: variant_builder(),
            u16s: variant_builder(),
            u32s: variant_builder(),
            u64s: variant_builder(),
            f32s: variant_builder(),
            f64s: variant_builder(),
        }
    }

    pub fn append(&mut self, buffer: &TensorBuffer) -> std::result::Result<(), ArrowError> {
        let offset = match buffer {
            TensorBuffer::U8(values) => push_values(&mut self.u8s, values)?,
            TensorBuffer::U16(values) => push_values(&mut self.u16s, values)?,
            TensorBuffer::U32(values) => push_values(&mut self.u32s, values)?,
            TensorBuffer::U64(values) => push_values(&mut self.u64s, values)?,
            TensorBuffer::F32(values) => push_values(&mut self.f32s, values)?,
            TensorBuffer::F64(values) => push_values(&mut self.f64s, values)?,
        };
        self.type_ids.push(buffer.type_id());
        self.offsets.push(offset);
        Ok(())
    }
}

impl Default for TensorBufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_union(type_ids: Vec<i8>, offsets: Vec<i32>, children: Vec<ArrayRef>) -> ArrayRef {
    // SAFETY: every type id is one of `union_fields()`, children are in field
    // order with the declared datatypes, and each offset is the index of the
    // entry `append` pushed onto that variant's child.
    let union = unsafe {
        UnionArray::new_unchecked(
            union_fields().clone(),
            ScalarBuffer::from(type_ids),
            Some(ScalarBuffer::from(offsets)),
            children,
        )
    };
    Arc::new(union)
}

impl ArrayBuilder for TensorBufferBuilder {
    fn len(&self) -> usize {
        self.type_ids.len()
    }

    fn finish(&mut self) -> ArrayRef {
        let children = vec![
            ArrayBuilder::finish(&mut self.u8s),
            ArrayBuilder::finish(&mut self.u16s),
            ArrayBuilder::finish(&mut self.u32s),
            ArrayBuilder::finish(&mut self.u64s),
            ArrayBuilder::finish(&mut self.f32s),
            ArrayBuilder::finish(&mut self.f64s),
        ];
        build_union(
            std::mem::take(&mut self.type_ids),
            std::mem::take(&mut self.offsets),
            children,
        )
    }

    fn finish_cloned(&self) -> ArrayRef {
        let children = vec![
            ArrayBuilder::finish_cloned(&self.u8s),
            ArrayBuilder::finish_cloned(&self.u16s),
            ArrayBuilder::finish_cloned(&self.u32s),
            ArrayBuilder::finish_cloned(&self.u64s),
            ArrayBuilder::finish_cloned(&self.f32s),
            ArrayBuilder::finish_cloned(&self.f64s),
        ];
        build_union(self.type_ids.clone(), self.offsets.clone(), children)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_box_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Loggable for TensorBuffer {
    type Builder = TensorBufferBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::Union(union_fields().clone(), UnionMode::Dense))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        require_pool(memory_pool)?;
        Ok(TensorBufferBuilder::new())
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;
        for element in elements {
            builder.append(element)?;
        }
        Ok(())
    }
}

/// An n-dimensional array: its shape plus the flat row-major values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TensorData {
    pub shape: Vec<TensorDimension>,
    pub buffer: TensorBuffer,
}

impl TensorData {
    pub fn new(shape: Vec<TensorDimension>, buffer: impl Into<TensorBuffer>) -> Self {
        TensorData {
            shape,
            buffer: buffer.into(),
        }
    }

    /// Row-major `height` x `width` image.
    pub fn image(height: u64, width: u64, buffer: impl Into<TensorBuffer>) -> Self {
        Self::new(
            vec![
                TensorDimension::named(height, "height"),
                TensorDimension::named(width, "width"),
            ],
            buffer,
        )
    }

    /// Product of all dimension sizes.
    pub fn num_elements(&self) -> u64 {
        self.shape.iter().map(|dim| dim.size).product()
    }
}

fn shape_item() -> FieldRef {
    static ITEM: OnceLock<FieldRef> = OnceLock::new();
    ITEM.get_or_init(|| {
        Arc::new(Field::new(
            "item",
            TensorDimension::arrow_datatype().clone(),
            false,
        ))
    })
    .clone()
}

fn fields() -> &'static Fields {
    static FIELDS: OnceLock<Fields> = OnceLock::new();
    FIELDS.get_or_init(|| {
        Fields::from(vec![
            Field::new("shape", DataType::List(shape_item()), false),
            Field::new("buffer", TensorBuffer::arrow_datatype().clone(), false),
        ])
    })
}

impl Loggable for TensorData {
    type Builder = StructBuilder;

    fn arrow_datatype() -> &'static DataType {
        static DATATYPE: OnceLock<DataType> = OnceLock::new();
        DATATYPE.get_or_init(|| DataType::Struct(fields().clone()))
    }

    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder> {
        let memory_pool = require_pool(memory_pool)?;
        let shape = ListBuilder::new(TensorDimension::new_arrow_array_builder(Some(memory_pool))?)
            .with_field(shape_item());
        let buffer = TensorBuffer::new_arrow_array_builder(Some(memory_pool))?;
        Ok(StructBuilder::new(
            fields().clone(),
            vec![
                Box::new(shape) as Box<dyn ArrayBuilder>,
                Box::new(buffer) as Box<dyn ArrayBuilder>,
            ],
        ))
    }

    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()> {
        let builder = require_builder(builder)?;
        let elements = require_elements(elements)?;

        let shapes = struct_field_builder::<ListBuilder<StructBuilder>>(builder, 0, "shape")?;
        for element in elements {
            TensorDimension::fill_arrow_array_builder(Some(shapes.values()), Some(&element.shape))?;
            shapes.append(true);
        }

        let buffers = struct_field_builder::<TensorBufferBuilder>(builder, 1, "buffer")?;
        for element in elements {
            buffers.append(&element.buffer)?;
        }

        for _ in elements {
            builder.append(true);
        }
        Ok(())
    }
}
