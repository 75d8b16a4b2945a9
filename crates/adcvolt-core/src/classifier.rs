use crate::calibration::AdcCalibration;
use crate::model::SafetyStatus;

impl AdcCalibration {
    /// `Warning` strictly above the safe maximum, `Safe` otherwise.
    pub fn check_safety(&self, voltage: f64) -> SafetyStatus {
        if voltage > self.safe_voltage_max {
            SafetyStatus::Warning
        } else {
            SafetyStatus::Safe
        }
    }
}

pub fn check_safety(voltage: f64) -> SafetyStatus {
    AdcCalibration::FIXED.check_safety(voltage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        assert_eq!(check_safety(2.5), SafetyStatus::Safe);
        assert_eq!(check_safety(2.5001), SafetyStatus::Warning);
    }

    #[test]
    fn classifies_typical_voltages() {
        assert_eq!(check_safety(0.0), SafetyStatus::Safe);
        assert_eq!(check_safety(1.0), SafetyStatus::Safe);
        assert_eq!(check_safety(3.0), SafetyStatus::Warning);
        assert_eq!(check_safety(6.6), SafetyStatus::Warning);
    }

    #[test]
    fn custom_calibration_uses_its_own_threshold() {
        let calibration = AdcCalibration {
            safe_voltage_max: 1.0,
            ..AdcCalibration::default()
        };
        assert_eq!(calibration.check_safety(1.0), SafetyStatus::Safe);
        assert_eq!(calibration.check_safety(1.2), SafetyStatus::Warning);
    }
}
