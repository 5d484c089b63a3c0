pub mod dashboard;
pub mod figure;
pub mod gantt;
pub mod trend_charts;

pub use dashboard::dashboard;
pub use figure::{Figure, Panel};
pub use gantt::gantt_chart;
pub use trend_charts::{anomaly_trend_chart, predicted_vs_actual_chart};
