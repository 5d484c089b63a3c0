use crate::common::pdm_error::{PdmError, PdmResult};

/// Fail on the first NaN or infinite value
pub fn check_finite(values: &[f64], what: &'static str) -> PdmResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PdmError::NonFinite { what, index }),
        None => Ok(()),
    }
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1); a single sample or identical
/// samples yield exactly 0
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 || values.iter().all(|&v| v == values[0]) {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Lowercase file-name slug: "FMEA Action Plan" -> "fmea_action_plan"
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
