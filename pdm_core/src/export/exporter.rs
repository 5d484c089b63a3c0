use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::analyzer::trend_analyzer::TrendReport;
use crate::charts::figure::Figure;
use crate::common::{pdm_error::PdmResult, time::format_date, utils::slugify};
use crate::schedule::schedule::Schedule;

#[derive(Debug, Serialize)]
struct TrendRow {
    day: f64,
    value: f64,
    fitted: f64,
    rolling_mean: f64,
    rolling_std: f64,
    lower_ci: f64,
    upper_ci: f64,
}

#[derive(Debug, Serialize)]
struct ScheduleRow<'a> {
    task: &'a str,
    start: String,
    end: String,
}

/// Writes figures and tables into one output directory
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> PdmResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<name>.json`
    pub fn write_figure(&self, name: &str, figure: &Figure) -> PdmResult<PathBuf> {
        let path = self.dir.join(format!("{}.json", name));
        fs::write(&path, figure.to_json()?)?;
        info!(figure = %figure.title, path = %path.display(), "saved figure");
        Ok(path)
    }

    /// `<dir>/trend_<asset>.csv`, one row per observation
    pub fn write_trend_table(&self, report: &TrendReport) -> PdmResult<PathBuf> {
        let path = self.dir.join(format!("trend_{}.csv", slugify(&report.asset)));
        let mut wtr = csv::Writer::from_path(&path)?;
        for ((p, &fitted), b) in report.series.iter().zip(&report.fitted).zip(&report.band) {
            wtr.serialize(TrendRow {
                day: p.day,
                value: p.value,
                fitted,
                rolling_mean: b.mean,
                rolling_std: b.std_dev,
                lower_ci: b.lower_bound,
                upper_ci: b.upper_bound,
            })?;
        }
        wtr.flush()?;
        info!(asset = %report.asset, rows = report.series.len(), path = %path.display(), "saved trend table");
        Ok(path)
    }

    /// `<dir>/<schedule title slug>.csv` with task, start and end dates
    pub fn write_schedule(&self, schedule: &Schedule) -> PdmResult<PathBuf> {
        let path = self.dir.join(format!("{}.csv", slugify(&schedule.title)));
        let mut wtr = csv::Writer::from_path(&path)?;
        for t in schedule.layout() {
            wtr.serialize(ScheduleRow {
                task: &t.task,
                start: format_date(t.start),
                end: format_date(t.end),
            })?;
        }
        wtr.flush()?;
        info!(schedule = %schedule.title, path = %path.display(), "saved schedule");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::trend_analyzer::TrendAnalyzer;
    use crate::charts::trend_charts::anomaly_trend_chart;
    use crate::common::time::parse_date;
    use crate::dataset::series::Series;
    use crate::schedule::plans::maintenance_routine;

    #[test]
    fn test_write_trend_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path()).unwrap();
        let s = Series::from_pairs(vec![(0.0, 0.0), (1.0, 0.2), (2.0, 0.4)]);
        let report = TrendAnalyzer::new(5, 1.96, 1.0).analyze("Motor_A", s).unwrap();

        let table = exporter.write_trend_table(&report).unwrap();
        assert_eq!(table.file_name().unwrap(), "trend_motor_a.csv");
        let text = fs::read_to_string(&table).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("day,value,fitted,rolling_mean,rolling_std,lower_ci,upper_ci")
        );
        assert_eq!(lines.count(), 3);

        let fig = exporter
            .write_figure("anomaly_trend", &anomaly_trend_chart(&report))
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(fig).unwrap()).unwrap();
        assert_eq!(v["panels"][0]["traces"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_write_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("nested")).unwrap();
        let plan = maintenance_routine(parse_date("2025-12-05").unwrap()).unwrap();
        let path = exporter.write_schedule(&plan).unwrap();
        assert_eq!(path.file_name().unwrap(), "predictive_maintenance_routine.csv");
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("task,start,end\n"));
        assert!(text.contains("Annual rebuild assessment,2025-12-17,2025-12-19"));
    }
}
