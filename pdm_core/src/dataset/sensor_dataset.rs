use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::{sensor_record::SensorRecord, series::Series};
use crate::common::{
    enums::SensorField,
    pdm_error::{PdmError, PdmResult},
};

/// Sensor readings for one or more assets, in file order
#[derive(Debug, Clone, Default)]
pub struct SensorDataset {
    records: Vec<SensorRecord>,
}

impl SensorDataset {
    pub fn new(records: Vec<SensorRecord>) -> Self {
        Self { records }
    }

    pub fn from_path(path: impl AsRef<Path>) -> PdmResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            assets = ?dataset.assets(),
            "loaded sensor dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV with a header row. All required columns are checked before
    /// any record is read.
    pub fn from_reader<R: Read>(reader: R) -> PdmResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let missing: Vec<String> = SensorRecord::REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PdmError::MissingColumns(missing));
        }

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: SensorRecord = result?;
            records.push(record);
        }
        debug!(rows = records.len(), "parsed sensor records");

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    /// Distinct asset labels in first-seen order
    pub fn assets(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|a| a == &r.asset) {
                out.push(r.asset.clone());
            }
        }
        out
    }

    /// Rows whose asset label equals `asset`, order preserved
    pub fn filter_asset(&self, asset: &str) -> PdmResult<SensorDataset> {
        let records: Vec<SensorRecord> = self
            .records
            .iter()
            .filter(|r| r.asset == asset)
            .cloned()
            .collect();
        if records.is_empty() {
            return Err(PdmError::EmptySubset(asset.to_string()));
        }
        Ok(Self { records })
    }

    /// `(day, field)` series over every row of this dataset
    pub fn series(&self, field: SensorField) -> Series {
        self.records.iter().map(|r| (r.day, r.field(field))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
asset,day,anomaly_score,motor_vibration_mm_s,motor_current_A,motor_temperature_C,site
Motor_A,0,0.10,2.1,10.5,40.0,north
Motor_B,0,0.05,1.9,10.1,39.5,north
Motor_A,1,0.15,2.3,10.7,40.4,north
Motor_B,1,0.06,1.8,10.0,39.6,north
Motor_A,2,0.22,2.6,11.0,41.0,north
";

    #[test]
    fn test_from_reader_parses_rows() {
        let ds = SensorDataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.records()[2].motor_current_a, 10.7);
        assert_eq!(ds.assets(), vec!["Motor_A", "Motor_B"]);
    }

    #[test]
    fn test_filter_asset_preserves_order() {
        let ds = SensorDataset::from_reader(CSV.as_bytes()).unwrap();
        let a = ds.filter_asset("Motor_A").unwrap();
        assert_eq!(a.len(), 3);
        assert!(a.records().iter().all(|r| r.asset == "Motor_A"));
        assert_eq!(a.series(SensorField::AnomalyScore).days(), vec![0.0, 1.0, 2.0]);
        assert_eq!(
            a.series(SensorField::AnomalyScore).values(),
            vec![0.10, 0.15, 0.22]
        );
    }

    #[test]
    fn test_filter_unknown_asset_is_error() {
        let ds = SensorDataset::from_reader(CSV.as_bytes()).unwrap();
        match ds.filter_asset("Motor_C") {
            Err(PdmError::EmptySubset(asset)) => assert_eq!(asset, "Motor_C"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_columns_are_all_reported() {
        let csv = "asset,day,anomaly_score,motor_vibration_mm_s\nMotor_A,0,0.1,2.0\n";
        match SensorDataset::from_reader(csv.as_bytes()) {
            Err(PdmError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["motor_current_A", "motor_temperature_C"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_number_is_csv_error() {
        let csv = "asset,day,anomaly_score,motor_vibration_mm_s,motor_current_A,motor_temperature_C\n\
Motor_A,zero,0.1,2.0,10.0,40.0\n";
        let err = SensorDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PdmError::Csv(_)));
    }
}
