pub mod sensor_dataset;
pub mod sensor_record;
pub mod series;

pub use sensor_dataset::SensorDataset;
pub use sensor_record::SensorRecord;
pub use series::{Series, SeriesPoint};
