//! The serialized form of one component column.

use std::sync::Arc;

use arrow::array::{Array, ArrayBuilder, ArrayRef};
use arrow::datatypes::{Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use rr_common::Result;

use crate::config::EncoderConfig;
use crate::ipc::{ipc_from_table, table_from_ipc};
use crate::memory_pool::{MemoryPool, PoolReservation};
use crate::Component;

/// A component name plus an Arrow IPC stream holding exactly one column of
/// that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCell {
    pub component_name: &'static str,
    pub buffer: Vec<u8>,
}

impl DataCell {
    /// Decode the buffer, checking it holds the single named column.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let batch = table_from_ipc(&self.buffer)?;
        let schema = batch.schema();
        let fields = schema.fields();
        if fields.len() != 1 || fields[0].name() != self.component_name {
            let names: Vec<&str> = fields.iter().map(|f| f.name().as_str()).collect();
            return Err(ArrowError::SchemaError(format!(
                "expected a single column named {:?}, found {:?}",
                self.component_name, names
            ))
            .into());
        }
        Ok(batch)
    }

    /// The decoded column.
    pub fn to_arrow_array(&self) -> Result<ArrayRef> {
        Ok(self.to_record_batch()?.column(0).clone())
    }

    /// Number of rows in the column.
    pub fn num_instances(&self) -> Result<usize> {
        Ok(self.to_record_batch()?.num_rows())
    }
}

pub(crate) fn serialize_component<C: Component>(
    instances: Option<&[C]>,
    memory_pool: &dyn MemoryPool,
    config: &EncoderConfig,
) -> Result<DataCell> {
    let num_instances = instances.map_or(0, <[C]>::len);
    tracing::trace!(component = C::NAME, num_instances, "serializing component");

    let mut builder = C::new_arrow_array_builder(Some(memory_pool))?;
    if let Some(instances) = instances.filter(|instances| !instances.is_empty()) {
        C::fill_arrow_array_builder(Some(&mut builder), Some(instances))?;
    }

    let array = ArrayBuilder::finish(&mut builder);
    if config.validate_arrays {
        array.to_data().validate_full()?;
    }

    // Charge the bytes the column holds, not the builders' spare capacity.
    let column_bytes = array.to_data().get_slice_memory_size()?;
    if let Some(limit) = config.memory_limit {
        if column_bytes > limit {
            return Err(ArrowError::MemoryError(format!(
                "column `{}` needs {column_bytes} bytes, encoder limit is {limit} bytes",
                C::NAME
            ))
            .into());
        }
    }
    let reservation = PoolReservation::try_new(memory_pool, column_bytes)?;

    let schema = Schema::new(vec![Field::new(
        C::NAME,
        C::arrow_datatype().clone(),
        false,
    )]);
    let batch = RecordBatch::try_new(Arc::new(schema), vec![array])?;
    let buffer = ipc_from_table(&batch, config)?;

    tracing::debug!(
        component = C::NAME,
        num_instances,
        column_bytes = reservation.size(),
        ipc_bytes = buffer.len(),
        "serialized component"
    );

    Ok(DataCell {
        component_name: C::NAME,
        buffer,
    })
}
