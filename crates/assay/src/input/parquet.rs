//! Columnar binary input via the Arrow Parquet reader.

use std::fs::File;
use std::path::Path;

use arrow::array::{
    Array, ArrayRef, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    LargeStringArray, RecordBatch, StringArray,
};
use arrow::datatypes::DataType;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::loader::LoaderConfig;
use super::source::{Cell, Column, ColumnType};
use crate::error::{AssayError, Result};

/// Read a Parquet file into columns.
///
/// Validity-bitmap nulls become `Null` cells; string and scalar arrays
/// become typed cells; anything else is rendered to its display text.
pub(crate) fn read_parquet(path: &Path, config: &LoaderConfig) -> Result<Vec<Column>> {
    let file = File::open(path).map_err(|e| AssayError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.build()?;
    let batches = reader.collect::<std::result::Result<Vec<RecordBatch>, _>>()?;

    if schema.fields().is_empty() {
        return Err(AssayError::EmptyData("no columns found".to_string()));
    }

    let mut columns: Vec<Column> = schema
        .fields()
        .iter()
        .map(|field| {
            Column::new(
                field.name().clone(),
                column_type_for(field.data_type()),
                Vec::new(),
            )
        })
        .collect();

    let mut remaining = config.max_rows.unwrap_or(usize::MAX);
    for batch in &batches {
        if remaining == 0 {
            break;
        }
        let take = batch.num_rows().min(remaining);
        for (col_idx, column) in columns.iter_mut().enumerate() {
            let array = batch.column(col_idx);
            for i in 0..take {
                column.cells.push(extract_cell(array, i)?);
            }
        }
        remaining -= take;
    }

    Ok(columns)
}

/// Map an Arrow field type to the nominal column type.
fn column_type_for(data_type: &DataType) -> ColumnType {
    match data_type {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => ColumnType::Integer,
        DataType::Float16 | DataType::Float32 | DataType::Float64 => ColumnType::Float,
        DataType::Boolean => ColumnType::Boolean,
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => ColumnType::Date,
        _ => ColumnType::Object,
    }
}

/// Extract one cell from an Arrow array.
///
/// Only the validity bitmap decides nullness; a float NaN is a value.
fn extract_cell(array: &ArrayRef, i: usize) -> Result<Cell> {
    if array.is_null(i) {
        return Ok(Cell::Null);
    }

    let cell = if let Some(arr) = array.as_any().downcast_ref::<StringArray>() {
        Cell::Text(arr.value(i).to_string())
    } else if let Some(arr) = array.as_any().downcast_ref::<LargeStringArray>() {
        Cell::Text(arr.value(i).to_string())
    } else if let Some(arr) = array.as_any().downcast_ref::<Int64Array>() {
        Cell::Integer(arr.value(i))
    } else if let Some(arr) = array.as_any().downcast_ref::<Int32Array>() {
        Cell::Integer(i64::from(arr.value(i)))
    } else if let Some(arr) = array.as_any().downcast_ref::<Float64Array>() {
        Cell::Float(arr.value(i))
    } else if let Some(arr) = array.as_any().downcast_ref::<Float32Array>() {
        Cell::Float(f64::from(arr.value(i)))
    } else if let Some(arr) = array.as_any().downcast_ref::<BooleanArray>() {
        Cell::Boolean(arr.value(i))
    } else {
        // Dates, timestamps, decimals and other types keep their display text
        Cell::Text(array_value_to_string(array, i)?)
    };

    Ok(cell)
}
