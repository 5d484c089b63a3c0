use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Numeric sensor columns of the dataset; `Display` yields the CSV header name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum SensorField {
    #[strum(serialize = "anomaly_score")]
    #[serde(rename = "anomaly_score")]
    AnomalyScore,
    #[strum(serialize = "motor_vibration_mm_s")]
    #[serde(rename = "motor_vibration_mm_s")]
    Vibration,
    #[strum(serialize = "motor_current_A")]
    #[serde(rename = "motor_current_A")]
    Current,
    #[strum(serialize = "motor_temperature_C")]
    #[serde(rename = "motor_temperature_C")]
    Temperature,
}

impl SensorField {
    /// Axis label used by the charts
    pub fn axis_label(&self) -> &'static str {
        match self {
            SensorField::AnomalyScore => "Anomaly Score",
            SensorField::Vibration => "Vibration (mm/s)",
            SensorField::Current => "Current Draw (A)",
            SensorField::Temperature => "Temperature (°C)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[strum(serialize = "solid")]
    Solid,
    #[strum(serialize = "dashed")]
    Dashed,
}
