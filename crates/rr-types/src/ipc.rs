//! Arrow IPC stream framing for single-column tables.

use std::io::Cursor;

use arrow::compute::concat_batches;
use arrow::ipc::reader::StreamReader;
use arrow::ipc::writer::StreamWriter;
use arrow::record_batch::RecordBatch;
use rr_common::Result;

use crate::config::EncoderConfig;

/// Write `batch` as a complete IPC stream: schema, one record batch, end marker.
pub fn ipc_from_table(batch: &RecordBatch, config: &EncoderConfig) -> Result<Vec<u8>> {
    let options = config.ipc_write_options()?;
    let mut writer = StreamWriter::try_new_with_options(Vec::new(), batch.schema_ref(), options)?;
    writer.write(batch)?;
    writer.finish()?;
    Ok(writer.into_inner()?)
}

/// Read an IPC stream back into one record batch.
///
/// A stream without batches yields an empty batch of the stream's schema;
/// several batches are concatenated.
pub fn table_from_ipc(buffer: &[u8]) -> Result<RecordBatch> {
    let reader = StreamReader::try_new(Cursor::new(buffer), None)?;
    let schema = reader.schema();
    let mut batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    match batches.len() {
        0 => Ok(RecordBatch::new_empty(schema)),
        1 => Ok(batches.remove(0)),
        _ => Ok(concat_batches(&schema, &batches)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{AsArray, UInt32Array};
    use arrow::datatypes::{DataType, Field, Schema, UInt32Type};
    use std::sync::Arc;

    fn sample_batch(values: Vec<u32>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new("value", DataType::UInt32, false)]));
        RecordBatch::try_new(schema, vec![Arc::new(UInt32Array::from(values))]).unwrap()
    }

    #[test]
    fn test_stream_roundtrip() {
        let batch = sample_batch(vec![1, 2, 3]);
        let buffer = ipc_from_table(&batch, &EncoderConfig::default()).unwrap();
        let decoded = table_from_ipc(&buffer).unwrap();
        assert_eq!(decoded, batch);
    }

    #[test]
    fn test_legacy_format_is_readable() {
        let batch = sample_batch(vec![7]);
        let config = EncoderConfig::default()
            .with_legacy_ipc_format(true)
            .with_ipc_alignment(8);
        let buffer = ipc_from_table(&batch, &config).unwrap();
        let decoded = table_from_ipc(&buffer).unwrap();
        assert_eq!(decoded.column(0).as_primitive::<UInt32Type>().values(), &[7]);
    }

    #[test]
    fn test_invalid_alignment_fails_before_writing() {
        let batch = sample_batch(vec![1]);
        let config = EncoderConfig::default().with_ipc_alignment(5);
        let err = ipc_from_table(&batch, &config).unwrap_err();
        assert_eq!(err.code(), rr_common::ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_multiple_batches_are_concatenated() {
        let first = sample_batch(vec![1, 2]);
        let second = sample_batch(vec![3]);
        let mut writer = StreamWriter::try_new(Vec::new(), first.schema_ref()).unwrap();
        writer.write(&first).unwrap();
        writer.write(&second).unwrap();
        writer.finish().unwrap();
        let buffer = writer.into_inner().unwrap();

        let decoded = table_from_ipc(&buffer).unwrap();
        assert_eq!(decoded.num_rows(), 3);
    }

    #[test]
    fn test_garbage_is_an_arrow_error() {
        let err = table_from_ipc(b"not an arrow stream").unwrap_err();
        assert_eq!(err.code(), rr_common::ErrorCode::ArrowEncoding);
    }
}
