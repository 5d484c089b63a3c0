pub mod failure;
pub mod linear_fit;
pub mod rolling_band;

pub use failure::{project_failure_day, FailureProjection};
pub use linear_fit::{fit_linear_trend, LinearFit};
pub use rolling_band::{rolling_band, RollingBand, RollingBandModel};
