use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::errors::ReaderError;

pub const SENSOR_ID_COLUMN: &str = "sensor_id";
pub const RAW_VALUE_COLUMN: &str = "raw_value";

/// One input row: the sensor that produced the sample and the raw ADC count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub sensor_id: String,
    pub raw_value: i64,
}

impl SensorRecord {
    pub fn new(sensor_id: impl Into<String>, raw_value: i64) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            raw_value,
        }
    }
}

/// Positions of the required columns within a header row. Any other column is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorColumns {
    pub sensor_id: usize,
    pub raw_value: usize,
}

impl SensorColumns {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, ReaderError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|column| column.trim() == name)
                .ok_or(ReaderError::MissingColumn { column: name })
        };

        Ok(Self {
            sensor_id: position(SENSOR_ID_COLUMN)?,
            raw_value: position(RAW_VALUE_COLUMN)?,
        })
    }
}
