use serde::Serialize;
use tracing::{debug, info};

use crate::common::pdm_error::PdmResult;
use crate::config::PdmConfig;
use crate::dataset::series::Series;
use crate::math::{
    failure::{project_failure_day, FailureProjection},
    linear_fit::{fit_linear_trend, LinearFit},
    rolling_band::{rolling_band, RollingBand},
};

/// Everything derived from one asset's anomaly-score series
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub asset: String,
    pub series: Series,
    pub fit: LinearFit,
    /// Trend value at each day of `series`
    pub fitted: Vec<f64>,
    pub projection: FailureProjection,
    pub band: Vec<RollingBand>,
}

impl TrendReport {
    pub fn last_day(&self) -> Option<f64> {
        self.series.points().last().map(|p| p.day)
    }
}

/// Runs fit, projection and rolling band with explicit parameters
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    pub rolling_window: usize,
    pub z_score: f64,
    pub failure_threshold: f64,
}

impl TrendAnalyzer {
    pub fn new(rolling_window: usize, z_score: f64, failure_threshold: f64) -> Self {
        Self {
            rolling_window,
            z_score,
            failure_threshold,
        }
    }

    pub fn from_config(conf: &PdmConfig) -> Self {
        Self::new(conf.rolling_window, conf.z_score, conf.failure_threshold)
    }

    pub fn analyze(&self, asset: &str, series: Series) -> PdmResult<TrendReport> {
        let fit = fit_linear_trend(&series)?;
        debug!(
            asset,
            slope = fit.slope,
            intercept = fit.intercept,
            r_squared = fit.r_squared,
            "fitted linear trend"
        );

        let fitted = fit.predict_all(&series.days());
        let projection = project_failure_day(&fit, self.failure_threshold)?;
        let band = rolling_band(&series, self.rolling_window, self.z_score)?;

        let report = TrendReport {
            asset: asset.to_string(),
            series,
            fit,
            fitted,
            projection,
            band,
        };
        info!(
            asset,
            points = report.series.len(),
            slope = report.fit.slope,
            threshold = report.projection.threshold_value,
            projected_day = report.projection.projected_day,
            "predicted failure ≈ day {:.1}",
            report.projection.projected_day
        );
        Ok(report)
    }
}
