use serde::{Deserialize, Serialize};

use crate::common::{
    pdm_error::{PdmError, PdmResult},
    utils::{check_finite, mean},
};
use crate::dataset::series::Series;

/// value ≈ slope · day + intercept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination over the fitted series. 0 when the
    /// values have no variance.
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, day: f64) -> f64 {
        self.slope * day + self.intercept
    }

    pub fn predict_all(&self, days: &[f64]) -> Vec<f64> {
        days.iter().map(|&d| self.predict(d)).collect()
    }
}

/// Ordinary least-squares, degree-1 fit of value against day.
///
/// Needs at least two points with at least two distinct days; NaN or
/// infinite input is rejected instead of propagated.
pub fn fit_linear_trend(series: &Series) -> PdmResult<LinearFit> {
    let n = series.len();
    if n < 2 {
        return Err(PdmError::InsufficientPoints(n));
    }

    let xs = series.days();
    let ys = series.values();
    check_finite(&xs, "day")?;
    check_finite(&ys, "value")?;

    let mean_x = mean(&xs);
    let mean_y = mean(&ys);

    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return Err(PdmError::DegenerateDays(n, xs[0]));
    }
    // flat series
    if ys.iter().all(|&y| y == ys[0]) {
        return Ok(LinearFit {
            slope: 0.0,
            intercept: ys[0],
            r_squared: 0.0,
        });
    }
    let sxy: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_res: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exact_line_is_recovered() {
        let s: Series = (0..10).map(|d| (d as f64, 2.0 * d as f64 + 1.0)).collect();
        let fit = fit_linear_trend(&s).unwrap();
        assert!(close(fit.slope, 2.0));
        assert!(close(fit.intercept, 1.0));
        assert!(close(fit.r_squared, 1.0));
        assert!(close(fit.predict(20.0), 41.0));
    }

    #[test]
    fn test_noisy_line() {
        let s = Series::from_pairs(vec![(1.0, 2.1), (2.0, 3.9), (3.0, 6.1), (4.0, 7.9), (5.0, 10.1)]);
        let fit = fit_linear_trend(&s).unwrap();
        assert!((fit.slope - 2.0).abs() < 0.1);
        assert!(fit.r_squared > 0.99);
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            fit_linear_trend(&Series::default()),
            Err(PdmError::InsufficientPoints(0))
        ));
        let one = Series::from_pairs(vec![(3.0, 0.4)]);
        assert!(matches!(
            fit_linear_trend(&one),
            Err(PdmError::InsufficientPoints(1))
        ));
    }

    #[test]
    fn test_all_days_equal() {
        let s = Series::from_pairs(vec![(4.0, 0.1), (4.0, 0.2), (4.0, 0.3)]);
        match fit_linear_trend(&s) {
            Err(PdmError::DegenerateDays(n, day)) => {
                assert_eq!(n, 3);
                assert_eq!(day, 4.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_nan_rejected() {
        let s = Series::from_pairs(vec![(0.0, 0.1), (1.0, f64::NAN)]);
        assert!(matches!(
            fit_linear_trend(&s),
            Err(PdmError::NonFinite { what: "value", index: 1 })
        ));
    }

    #[test]
    fn test_flat_series_has_zero_slope() {
        let s = Series::from_pairs(vec![(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)]);
        let fit = fit_linear_trend(&s).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 0.0);
    }

    #[test]
    fn test_flat_series_on_uneven_days() {
        let s = Series::from_pairs(vec![(0.0, 0.1), (1.0, 0.1), (3.0, 0.1)]);
        let fit = fit_linear_trend(&s).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 0.1);
    }
}
