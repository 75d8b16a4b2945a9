use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::outputs::format_voltage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Safe,
    Warning,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE",
            SafetyStatus::Warning => "WARNING",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One report row. `voltage` keeps full precision in memory and is written with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub sensor_id: String,
    #[serde(serialize_with = "serialize_voltage")]
    pub voltage: f64,
    pub status: SafetyStatus,
}

fn serialize_voltage<S>(voltage: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_voltage(*voltage))
}
