use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::common::{
    pdm_error::{PdmError, PdmResult},
    utils::{mean, sample_std},
};
use crate::dataset::series::Series;

pub const DEFAULT_WINDOW: usize = 5;
/// Two-sided 95 % normal quantile
pub const DEFAULT_Z_SCORE: f64 = 1.96;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingBand {
    pub mean: f64,
    pub std_dev: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Trailing-window mean ± z·std, fed one value at a time. Windows shorter
/// than `window` are used until enough values have been seen.
#[derive(Debug, Clone)]
pub struct RollingBandModel {
    window: usize,
    z_score: f64,
    values: VecDeque<f64>,
}

impl RollingBandModel {
    pub fn new(window: usize, z_score: f64) -> PdmResult<Self> {
        if window == 0 {
            return Err(PdmError::invalid("rolling_window", "must be at least 1"));
        }
        if !z_score.is_finite() || z_score < 0.0 {
            return Err(PdmError::invalid(
                "z_score",
                format!("{} must be finite and non-negative", z_score),
            ));
        }
        Ok(Self {
            window,
            z_score,
            values: VecDeque::with_capacity(window),
        })
    }

    pub fn add(&mut self, value: f64) -> RollingBand {
        self.values.push_back(value);
        if self.values.len() > self.window {
            self.values.pop_front();
        }

        let window: Vec<f64> = self.values.iter().copied().collect();
        // constant window
        let mean = if window.iter().all(|&v| v == value) {
            value
        } else {
            mean(&window)
        };
        let std_dev = sample_std(&window);

        RollingBand {
            mean,
            std_dev,
            lower_bound: mean - self.z_score * std_dev,
            upper_bound: mean + self.z_score * std_dev,
        }
    }
}

/// One band entry per point of `series`, in input order
pub fn rolling_band(series: &Series, window: usize, z_score: f64) -> PdmResult<Vec<RollingBand>> {
    let mut model = RollingBandModel::new(window, z_score)?;
    Ok(series.iter().map(|p| model.add(p.value)).collect())
}
