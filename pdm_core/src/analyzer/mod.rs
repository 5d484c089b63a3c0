pub mod trend_analyzer;

pub use trend_analyzer::{TrendAnalyzer, TrendReport};
