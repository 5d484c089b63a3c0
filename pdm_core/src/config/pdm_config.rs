use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use super::config_check::ConfigWithCheck;
use crate::common::{
    pdm_error::{PdmError, PdmResult},
    time::parse_date,
};
use crate::math::rolling_band::{DEFAULT_WINDOW, DEFAULT_Z_SCORE};

pub const DEFAULT_DATA_PATH: &str = "data/pdm_sensor_dataset_multiactive.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "charts";
pub const DEFAULT_FAILURE_THRESHOLD: f64 = 1.0;
pub const DEFAULT_SCHEDULE_START: &str = "2025-12-05";

/// Run configuration for the trend analysis, charts and schedules
#[derive(Debug, Clone, PartialEq)]
pub struct PdmConfig {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub rolling_window: usize,
    pub z_score: f64,
    pub failure_threshold: f64,
    pub trend_asset: String,
    pub dashboard_assets: Vec<String>,
    pub schedule_start: NaiveDate,
    pub tick_interval_days: u32,
}

impl Default for PdmConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            rolling_window: DEFAULT_WINDOW,
            z_score: DEFAULT_Z_SCORE,
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            trend_asset: "Motor_A".to_string(),
            dashboard_assets: vec!["Motor_A".to_string(), "Motor_B".to_string()],
            schedule_start: parse_date(DEFAULT_SCHEDULE_START).unwrap_or_default(),
            tick_interval_days: 2,
        }
    }
}

impl PdmConfig {
    /// Build from a key/value map; absent keys take their defaults and
    /// unknown keys are an error.
    pub fn new(conf: Option<HashMap<String, Value>>) -> PdmResult<Self> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let d = Self::default();

        let schedule_start = match conf.get::<String>("schedule_start")? {
            Some(s) => parse_date(&s)?,
            None => d.schedule_start,
        };

        let config = Self {
            data_path: conf.get_or("data_path", d.data_path)?,
            output_dir: conf.get_or("output_dir", d.output_dir)?,
            rolling_window: conf.get_or("rolling_window", d.rolling_window)?,
            z_score: conf.get_or("z_score", d.z_score)?,
            failure_threshold: conf.get_or("failure_threshold", d.failure_threshold)?,
            trend_asset: conf.get_or("trend_asset", d.trend_asset)?,
            dashboard_assets: conf.get_or("dashboard_assets", d.dashboard_assets)?,
            schedule_start,
            tick_interval_days: conf.get_or("tick_interval_days", d.tick_interval_days)?,
        };

        conf.check()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> PdmResult<Self> {
        let map: HashMap<String, Value> = serde_json::from_str(s)?;
        Self::new(Some(map))
    }

    pub fn from_path(path: impl AsRef<Path>) -> PdmResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> PdmResult<()> {
        if self.rolling_window == 0 {
            return Err(PdmError::invalid("rolling_window", "must be at least 1"));
        }
        if !self.z_score.is_finite() || self.z_score < 0.0 {
            return Err(PdmError::invalid(
                "z_score",
                format!("{} must be finite and non-negative", self.z_score),
            ));
        }
        if !self.failure_threshold.is_finite() {
            return Err(PdmError::invalid(
                "failure_threshold",
                format!("{} is not finite", self.failure_threshold),
            ));
        }
        if self.trend_asset.is_empty() {
            return Err(PdmError::invalid("trend_asset", "must not be empty"));
        }
        if self.dashboard_assets.is_empty() {
            return Err(PdmError::invalid("dashboard_assets", "must name at least one asset"));
        }
        if self.tick_interval_days == 0 {
            return Err(PdmError::invalid("tick_interval_days", "must be at least 1"));
        }
        Ok(())
    }
}
