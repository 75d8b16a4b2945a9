use std::path::{Path, PathBuf};

use adcvolt_parser::{read_sensor_data, SensorRecord};
use tracing::{debug, info};

use crate::calibration::AdcCalibration;
use crate::error::Result;
use crate::model::{ProcessedRecord, SafetyStatus};
use crate::outputs::write_report;

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub warnings: usize,
    pub output: PathBuf,
}

pub fn process_record(record: &SensorRecord) -> ProcessedRecord {
    let calibration = AdcCalibration::FIXED;
    let voltage = calibration.raw_to_voltage(record.raw_value);
    ProcessedRecord {
        sensor_id: record.sensor_id.clone(),
        voltage,
        status: calibration.check_safety(voltage),
    }
}

/// Convert and classify every record. Output order and length match the input.
pub fn process_records(records: &[SensorRecord]) -> Vec<ProcessedRecord> {
    records.iter().map(process_record).collect()
}

/// Read `input`, build the full report in memory, then write it to `output`.
///
/// The output file is only touched once every input row has parsed, so a read or parse
/// failure never leaves a report behind.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let records = read_sensor_data(input)?;
    debug!(input = %input.display(), rows = records.len(), "loaded sensor records");

    let processed = process_records(&records);
    write_report(output, &processed)?;

    let warnings = processed
        .iter()
        .filter(|record| record.status == SafetyStatus::Warning)
        .count();

    info!(
        input = %input.display(),
        output = %output.display(),
        records = processed.len(),
        warnings,
        "voltage report complete"
    );

    Ok(RunSummary {
        records: processed.len(),
        warnings,
        output: output.to_path_buf(),
    })
}
