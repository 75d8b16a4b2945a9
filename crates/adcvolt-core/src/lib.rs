pub mod calibration;
pub mod classifier;
pub mod converter;
pub mod error;
pub mod model;
pub mod outputs;
pub mod pipeline;

pub use adcvolt_parser::SensorRecord;
pub use calibration::AdcCalibration;
pub use error::{PipelineError, Result};
pub use model::{ProcessedRecord, SafetyStatus};
