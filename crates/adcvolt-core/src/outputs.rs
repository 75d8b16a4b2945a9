use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::model::ProcessedRecord;

pub const REPORT_HEADER: [&str; 3] = ["sensor_id", "voltage", "status"];

/// Two-decimal rendering of the exact `f64` value, e.g. `0.825` (stored as `0.82499…`) → `0.82`.
pub fn format_voltage(voltage: f64) -> String {
    format!("{voltage:.2}")
}

/// Write the report to `path`, truncating any existing file.
pub fn write_report(path: impl AsRef<Path>, records: &[ProcessedRecord]) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source: csv::Error| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|err| write_error(err.into()))?;
    write_report_to(file, records).map_err(write_error)?;

    debug!(path = %path.display(), rows = records.len(), "wrote voltage report");
    Ok(())
}

/// Serialize the header and every record to `sink`. The header is written even when
/// `records` is empty.
pub fn write_report_to<W: Write>(sink: W, records: &[ProcessedRecord]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SafetyStatus;

    fn record(id: &str, voltage: f64, status: SafetyStatus) -> ProcessedRecord {
        ProcessedRecord {
            sensor_id: id.to_string(),
            voltage,
            status,
        }
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_voltage(0.0), "0.00");
        assert_eq!(format_voltage(1.65), "1.65");
        assert_eq!(format_voltage(3.3), "3.30");
        assert_eq!(format_voltage(1024.0 / 4096.0 * 3.3), "0.82");
        assert_eq!(format_voltage(4000.0 / 4096.0 * 3.3), "3.22");
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let records = vec![
            record("B", 3.22265625, SafetyStatus::Warning),
            record("A", 0.5, SafetyStatus::Safe),
        ];

        let mut buffer = Vec::new();
        write_report_to(&mut buffer, &records).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "sensor_id,voltage,status\nB,3.22,WARNING\nA,0.50,SAFE\n"
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        let mut buffer = Vec::new();
        write_report_to(&mut buffer, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "sensor_id,voltage,status\n"
        );
    }

    #[test]
    fn quotes_ids_containing_commas() {
        let mut buffer = Vec::new();
        write_report_to(&mut buffer, &[record("rack 1, slot 2", 1.0, SafetyStatus::Safe)])
            .unwrap();
        assert!(String::from_utf8(buffer)
            .unwrap()
            .ends_with("\"rack 1, slot 2\",1.00,SAFE\n"));
    }
}
