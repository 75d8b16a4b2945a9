use tracing::debug;

use crate::calibration::AdcCalibration;

impl AdcCalibration {
    /// Linear scale from raw counts to volts. Negative samples clamp to `0.0`; samples above
    /// the resolution are passed through and yield more than the reference voltage.
    pub fn raw_to_voltage(&self, raw_value: i64) -> f64 {
        if raw_value < 0 {
            return 0.0;
        }
        if raw_value > self.max_sample {
            debug!(
                raw_value,
                max_sample = self.max_sample,
                "raw sample exceeds ADC range, passing through"
            );
        }
        (raw_value as f64 / f64::from(self.resolution)) * self.reference_voltage
    }
}

pub fn raw_to_voltage(raw_value: i64) -> f64 {
    AdcCalibration::FIXED.raw_to_voltage(raw_value)
}
