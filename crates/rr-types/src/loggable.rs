//! The serialization contract shared by datatypes and components.
//!
//! A [`Loggable`] knows its Arrow datatype and how to append a slice of
//! itself into a column builder. A [`Component`] is a loggable with a stable
//! wire name, which is enough to produce a [`DataCell`].
//!
//! Handles that the contract allows to be "null" are `Option`s: `None` is
//! always rejected with [`Error::UnexpectedNullArgument`].

use arrow::array::ArrayBuilder;
use arrow::datatypes::DataType;
use rr_common::{Error, Result};

use crate::config::EncoderConfig;
use crate::data_cell::{serialize_component, DataCell};
use crate::memory_pool::{default_memory_pool, MemoryPool};

/// A type that can be written into an Arrow column.
pub trait Loggable: Clone + Send + Sync + Sized + 'static {
    /// Builder that accumulates values of this type.
    type Builder: ArrayBuilder;

    /// Arrow datatype of one value.
    ///
    /// Computed once per process; every call returns the same reference.
    fn arrow_datatype() -> &'static DataType;

    /// Fresh builder bound to `memory_pool`.
    fn new_arrow_array_builder(memory_pool: Option<&dyn MemoryPool>) -> Result<Self::Builder>;

    /// Append `elements` to `builder`, preserving order.
    ///
    /// `None` for either argument is an error even when nothing would be
    /// appended.
    fn fill_arrow_array_builder(
        builder: Option<&mut Self::Builder>,
        elements: Option<&[Self]>,
    ) -> Result<()>;
}

/// A named loggable: one column on the wire.
pub trait Component: Loggable {
    /// Wire identifier of the component. Changing it breaks the format.
    const NAME: &'static str;

    /// Serialize `instances` with the default pool and global configuration.
    ///
    /// `None` or an empty slice yields a zero-row cell.
    fn to_data_cell(instances: Option<&[Self]>) -> Result<DataCell> {
        serialize_component(instances, default_memory_pool(), EncoderConfig::global())
    }

    /// Serialize `instances` with a caller-supplied pool and configuration.
    fn to_data_cell_with(
        instances: Option<&[Self]>,
        memory_pool: &dyn MemoryPool,
        config: &EncoderConfig,
    ) -> Result<DataCell> {
        serialize_component(instances, memory_pool, config)
    }
}

pub(crate) fn require_pool(memory_pool: Option<&dyn MemoryPool>) -> Result<&dyn MemoryPool> {
    memory_pool.ok_or_else(|| Error::null_argument("Memory pool is null."))
}

pub(crate) fn require_builder<B>(builder: Option<&mut B>) -> Result<&mut B> {
    builder.ok_or_else(|| Error::null_argument("Passed array builder is null."))
}

pub(crate) fn require_elements<T>(elements: Option<&[T]>) -> Result<&[T]> {
    elements.ok_or_else(|| Error::null_argument("Cannot serialize null pointer to arrow array."))
}
