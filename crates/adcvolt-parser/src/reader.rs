use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::errors::ReaderError;
use crate::model::{SensorColumns, SensorRecord, RAW_VALUE_COLUMN, SENSOR_ID_COLUMN};

/// Read every row of a sensor CSV into memory, preserving file order.
pub fn read_sensor_data(path: impl AsRef<Path>) -> Result<Vec<SensorRecord>, ReaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReaderError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReaderError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = read_sensor_data_from_reader(file)?;
    debug!(path = %path.display(), rows = records.len(), "read sensor data");
    Ok(records)
}

pub fn read_sensor_data_from_reader<R: Read>(source: R) -> Result<Vec<SensorRecord>, ReaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns = SensorColumns::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line_index = row.position().map(|pos| pos.line()).unwrap_or_default();
        records.push(parse_row(&columns, &row, line_index)?);
    }

    Ok(records)
}

/// Convert one data row into a [`SensorRecord`]. `line_index` is only used for error messages.
pub fn parse_row(
    columns: &SensorColumns,
    row: &StringRecord,
    line_index: u64,
) -> Result<SensorRecord, ReaderError> {
    let field = |idx: usize, name: &str| {
        row.get(idx).ok_or_else(|| ReaderError::DataRow {
            line_index,
            message: format!("missing value for column '{name}'"),
        })
    };

    let sensor_id = field(columns.sensor_id, SENSOR_ID_COLUMN)?;
    let raw_value = field(columns.raw_value, RAW_VALUE_COLUMN)?;

    let raw_value = raw_value
        .trim()
        .parse::<i64>()
        .map_err(|err| ReaderError::DataRow {
            line_index,
            message: format!("failed to parse column '{RAW_VALUE_COLUMN}' as integer: {err}"),
        })?;

    Ok(SensorRecord::new(sensor_id, raw_value))
}
