use serde::{Deserialize, Serialize};

use super::linear_fit::LinearFit;
use crate::common::pdm_error::{PdmError, PdmResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureProjection {
    pub threshold_value: f64,
    pub projected_day: f64,
}

impl FailureProjection {
    /// Days from `day` until the projected crossing; negative once passed
    pub fn days_remaining(&self, day: f64) -> f64 {
        self.projected_day - day
    }
}

/// Day at which the fitted trend reaches `threshold_value`
pub fn project_failure_day(fit: &LinearFit, threshold_value: f64) -> PdmResult<FailureProjection> {
    if !threshold_value.is_finite() {
        return Err(PdmError::invalid(
            "failure_threshold",
            format!("{} is not finite", threshold_value),
        ));
    }
    if fit.slope == 0.0 {
        return Err(PdmError::ZeroSlope {
            threshold: threshold_value,
        });
    }
    Ok(FailureProjection {
        threshold_value,
        projected_day: (threshold_value - fit.intercept) / fit.slope,
    })
}
