use serde::{Deserialize, Serialize};

use crate::common::enums::SensorField;

/// One row of the sensor dataset. Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub asset: String,
    pub day: f64,
    pub anomaly_score: f64,
    pub motor_vibration_mm_s: f64,
    #[serde(rename = "motor_current_A")]
    pub motor_current_a: f64,
    #[serde(rename = "motor_temperature_C")]
    pub motor_temperature_c: f64,
}

impl SensorRecord {
    /// Column names a dataset must carry
    pub const REQUIRED_COLUMNS: [&'static str; 6] = [
        "asset",
        "day",
        "anomaly_score",
        "motor_vibration_mm_s",
        "motor_current_A",
        "motor_temperature_C",
    ];

    pub fn field(&self, field: SensorField) -> f64 {
        match field {
            SensorField::AnomalyScore => self.anomaly_score,
            SensorField::Vibration => self.motor_vibration_mm_s,
            SensorField::Current => self.motor_current_a,
            SensorField::Temperature => self.motor_temperature_c,
        }
    }
}
