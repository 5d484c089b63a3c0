pub mod analyzer;
pub mod charts;
pub mod common;
pub mod config;
pub mod dataset;
pub mod export;
pub mod math;
pub mod schedule;

pub use analyzer::trend_analyzer::{TrendAnalyzer, TrendReport};
pub use common::enums::SensorField;
pub use common::pdm_error::{ErrCode, PdmError, PdmResult};
pub use config::pdm_config::PdmConfig;
pub use dataset::{SensorDataset, SensorRecord, Series, SeriesPoint};
pub use export::exporter::Exporter;
pub use math::{
    fit_linear_trend, project_failure_day, rolling_band, FailureProjection, LinearFit,
    RollingBand, RollingBandModel,
};
