use super::figure::{
    Band, Figure, Marker, Panel, Trace, COLOR_ALERT, COLOR_PRIMARY, COLOR_SECONDARY, COLOR_TREND,
};
use crate::analyzer::trend_analyzer::TrendReport;
use crate::common::enums::LineStyle;

fn fitted_xy(report: &TrendReport) -> Vec<[f64; 2]> {
    report
        .series
        .iter()
        .zip(&report.fitted)
        .map(|(p, &y)| [p.day, y])
        .collect()
}

fn failure_line(report: &TrendReport, width: f64) -> Marker {
    Marker::VerticalLine {
        x: report.projection.projected_day,
        color: COLOR_ALERT.to_string(),
        style: LineStyle::Dashed,
        width,
        label: None,
    }
}

pub fn failure_annotation(projected_day: f64) -> String {
    format!("Predicted Failure ≈ Day {:.1}", projected_day)
}

/// Anomaly score with rolling mean, confidence band, linear trend and the
/// projected failure day
pub fn anomaly_trend_chart(report: &TrendReport) -> Figure {
    let mut panel = Panel::new(
        "Anomaly Score Curve with 95% Confidence Interval + Predicted Failure Day",
        "Day",
        "Anomaly Score",
    )
    .with_legend();

    let days = report.series.days();
    let mean_xy = days
        .iter()
        .zip(&report.band)
        .map(|(&d, b)| [d, b.mean])
        .collect();

    panel.traces.push(Trace::line(
        Some("Anomaly Score"),
        COLOR_PRIMARY,
        report.series.to_xy(),
    ));
    panel
        .traces
        .push(Trace::line(Some("Rolling Mean"), COLOR_SECONDARY, mean_xy).dashed());
    panel.bands.push(Band {
        label: Some("95% CI".to_string()),
        color: COLOR_SECONDARY.to_string(),
        alpha: 0.2,
        x: days,
        lower: report.band.iter().map(|b| b.lower_bound).collect(),
        upper: report.band.iter().map(|b| b.upper_bound).collect(),
    });
    panel.traces.push(
        Trace::line(Some("Trend (Prediction)"), COLOR_TREND, fitted_xy(report)).dashed(),
    );

    let day = report.projection.projected_day;
    panel.markers.push(failure_line(report, 2.0));
    panel.markers.push(Marker::Text {
        x: day + 1.0,
        y: report.projection.threshold_value,
        text: failure_annotation(day),
        color: COLOR_ALERT.to_string(),
        font_size: 12,
    });

    Figure::single(14.0, 8.0, panel)
}

/// Actual score against the fitted trend with the threshold and failure day
pub fn predicted_vs_actual_chart(report: &TrendReport) -> Figure {
    let mut panel = Panel::new(
        "Predicted vs Actual Failure Comparison",
        "Day",
        "Anomaly Score",
    )
    .with_legend();

    panel.traces.push(Trace::line(
        Some("Actual Anomaly Score"),
        COLOR_PRIMARY,
        report.series.to_xy(),
    ));
    panel.traces.push(
        Trace::line(Some("Predicted Trend"), COLOR_SECONDARY, fitted_xy(report)).dashed(),
    );
    panel.markers.push(Marker::HorizontalLine {
        y: report.projection.threshold_value,
        color: COLOR_ALERT.to_string(),
        style: LineStyle::Dashed,
        label: Some("Failure Threshold".to_string()),
    });
    panel.markers.push(failure_line(report, 1.0));

    Figure::single(14.0, 8.0, panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::trend_analyzer::TrendAnalyzer;
    use crate::dataset::series::Series;

    fn report() -> TrendReport {
        let s = Series::from_pairs(vec![(0.0, 0.0), (1.0, 0.2), (2.0, 0.4), (3.0, 0.6), (4.0, 0.8)]);
        TrendAnalyzer::new(5, 1.96, 1.0).analyze("Motor_A", s).unwrap()
    }

    #[test]
    fn test_anomaly_trend_chart() {
        let fig = anomaly_trend_chart(&report());
        let panel = &fig.panels[0];
        assert_eq!(panel.traces.len(), 3);
        assert_eq!(panel.traces[1].style, LineStyle::Dashed);
        assert_eq!(panel.traces[2].color, COLOR_TREND);
        assert_eq!(panel.bands[0].x.len(), 5);
        assert_eq!(panel.bands[0].lower[0], 0.0);

        match &panel.markers[1] {
            Marker::Text { x, y, text, .. } => {
                assert!((x - 6.0).abs() < 1e-9);
                assert_eq!(*y, 1.0);
                assert_eq!(text, "Predicted Failure ≈ Day 5.0");
            }
            other => panic!("unexpected marker {:?}", other),
        }
    }

    #[test]
    fn test_predicted_vs_actual_chart() {
        let fig = predicted_vs_actual_chart(&report());
        let panel = &fig.panels[0];
        assert_eq!(panel.traces.len(), 2);
        assert!(matches!(panel.markers[0], Marker::HorizontalLine { y, .. } if y == 1.0));
        assert!(matches!(
            panel.markers[1],
            Marker::VerticalLine { x, .. } if (x - 5.0).abs() < 1e-9
        ));
    }
}
