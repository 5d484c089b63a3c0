use tracing::debug;

use super::figure::{asset_color, Figure, Panel, Trace};
use crate::common::{
    enums::SensorField,
    pdm_error::{PdmError, PdmResult},
};
use crate::dataset::sensor_dataset::SensorDataset;

pub const DASHBOARD_TITLE: &str = "Predictive Maintenance Dashboard";

/// "Motor_A" -> "Motor A"
fn display_name(asset: &str) -> String {
    asset.replace('_', " ")
}

fn comparison_panel(title: &str, field: SensorField, subsets: &[(String, SensorDataset)]) -> Panel {
    let names: Vec<String> = subsets.iter().map(|(a, _)| display_name(a)).collect();
    let mut panel = Panel::new(
        format!("{} Over Time – {}", title, names.join(" vs ")),
        "Time (days)",
        field.axis_label(),
    )
    .with_legend();
    for (i, (asset, ds)) in subsets.iter().enumerate() {
        panel.traces.push(Trace::line(
            Some(&display_name(asset)),
            asset_color(i),
            ds.series(field).to_xy(),
        ));
    }
    panel
}

/// 2×2 overview: vibration, anomaly score of the first asset, current draw
/// and temperature
pub fn dashboard(dataset: &SensorDataset, assets: &[String]) -> PdmResult<Figure> {
    if assets.is_empty() {
        return Err(PdmError::invalid("dashboard_assets", "must name at least one asset"));
    }

    let subsets = assets
        .iter()
        .map(|a| Ok((a.clone(), dataset.filter_asset(a)?)))
        .collect::<PdmResult<Vec<_>>>()?;
    debug!(assets = ?assets, "building dashboard");

    let mut anomaly = Panel::new(
        "Predicted Anomaly Score Over Time",
        "Time (days)",
        SensorField::AnomalyScore.axis_label(),
    );
    anomaly.traces.push(Trace::line(
        None,
        asset_color(0),
        subsets[0].1.series(SensorField::AnomalyScore).to_xy(),
    ));

    Ok(Figure {
        title: DASHBOARD_TITLE.to_string(),
        width_in: 18.0,
        height_in: 12.0,
        rows: 2,
        cols: 2,
        panels: vec![
            comparison_panel("Vibration", SensorField::Vibration, &subsets),
            anomaly,
            comparison_panel("Current Draw", SensorField::Current, &subsets),
            comparison_panel("Temperature", SensorField::Temperature, &subsets),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::figure::{COLOR_PRIMARY, COLOR_SECONDARY};
    use crate::dataset::sensor_record::SensorRecord;

    fn record(asset: &str, day: f64) -> SensorRecord {
        SensorRecord {
            asset: asset.to_string(),
            day,
            anomaly_score: day / 10.0,
            motor_vibration_mm_s: 2.0 + day,
            motor_current_a: 10.0,
            motor_temperature_c: 40.0,
        }
    }

    fn dataset() -> SensorDataset {
        SensorDataset::new(vec![
            record("Motor_A", 0.0),
            record("Motor_B", 0.0),
            record("Motor_A", 1.0),
            record("Motor_B", 1.0),
        ])
    }

    #[test]
    fn test_dashboard_layout() {
        let assets = vec!["Motor_A".to_string(), "Motor_B".to_string()];
        let fig = dashboard(&dataset(), &assets).unwrap();
        assert_eq!((fig.rows, fig.cols), (2, 2));
        assert_eq!(fig.panels.len(), 4);
        assert_eq!(fig.panels[0].title, "Vibration Over Time – Motor A vs Motor B");
        assert_eq!(fig.panels[0].y_label, "Vibration (mm/s)");
        assert_eq!(fig.panels[0].traces.len(), 2);
        assert_eq!(fig.panels[0].traces[0].color, COLOR_PRIMARY);
        assert_eq!(fig.panels[0].traces[1].color, COLOR_SECONDARY);
        assert_eq!(fig.panels[0].traces[1].points, vec![[0.0, 2.0], [1.0, 3.0]]);

        let anomaly = &fig.panels[1];
        assert_eq!(anomaly.traces.len(), 1);
        assert!(!anomaly.legend);
        assert_eq!(anomaly.traces[0].points, vec![[0.0, 0.0], [1.0, 0.1]]);
    }

    #[test]
    fn test_dashboard_unknown_asset() {
        let assets = vec!["Motor_A".to_string(), "Motor_Z".to_string()];
        assert!(matches!(
            dashboard(&dataset(), &assets),
            Err(PdmError::EmptySubset(a)) if a == "Motor_Z"
        ));
        assert!(dashboard(&dataset(), &[]).is_err());
    }
}
