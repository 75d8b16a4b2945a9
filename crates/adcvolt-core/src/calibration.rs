//! Fixed ADC and safety constants. None of these are configurable at runtime.

/// Number of steps the converter divides by (12-bit ADC).
pub const ADC_RESOLUTION: u32 = 4096;
/// Largest sample a 12-bit ADC can actually produce.
pub const ADC_MAX_SAMPLE: i64 = 4095;
/// Volts corresponding to a full-scale reading.
pub const REFERENCE_VOLTAGE: f64 = 3.3;
/// Highest voltage still classified as safe.
pub const SAFE_VOLTAGE_MAX: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcCalibration {
    pub resolution: u32,
    pub max_sample: i64,
    pub reference_voltage: f64,
    pub safe_voltage_max: f64,
}

impl AdcCalibration {
    pub const FIXED: AdcCalibration = AdcCalibration {
        resolution: ADC_RESOLUTION,
        max_sample: ADC_MAX_SAMPLE,
        reference_voltage: REFERENCE_VOLTAGE,
        safe_voltage_max: SAFE_VOLTAGE_MAX,
    };
}

impl Default for AdcCalibration {
    fn default() -> Self {
        Self::FIXED
    }
}
