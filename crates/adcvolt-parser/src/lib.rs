pub mod errors;
pub mod model;
pub mod reader;

pub use errors::ReaderError;
pub use model::{SensorColumns, SensorRecord, RAW_VALUE_COLUMN, SENSOR_ID_COLUMN};
pub use reader::{parse_row, read_sensor_data, read_sensor_data_from_reader};
