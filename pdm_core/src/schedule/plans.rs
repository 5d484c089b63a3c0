use chrono::NaiveDate;

use super::schedule::Schedule;
use crate::common::pdm_error::PdmResult;

pub const FMEA_TITLE: &str = "FMEA Action Plan";
pub const ROUTINE_TITLE: &str = "Predictive Maintenance Routine";

const FMEA_TASKS: [&str; 12] = [
    "Lubricate bearings",
    "Inspect bearings",
    "Replace bearings",
    "Add vibration alerting",
    "Laser alignment",
    "Check coupling",
    "Improve housekeeping",
    "Clean cooling fins",
    "Add airflow monitoring",
    "Inspect transformer taps",
    "Tighten connections",
    "Validate voltage balance",
];
const FMEA_OFFSETS: [u32; 12] = [0, 0, 3, 2, 8, 12, 1, 4, 5, 8, 10, 12];
const FMEA_DURATIONS: [u32; 12] = [2, 3, 5, 4, 4, 2, 3, 1, 3, 2, 2, 3];

const ROUTINE_TASKS: [&str; 7] = [
    "Weekly anomaly review",
    "Monthly vibration analysis",
    "Monthly current draw review",
    "30-day sensor audit",
    "Quarterly alignment check",
    "90-day threshold recalibration",
    "Annual rebuild assessment",
];
// first occurrence of each recurring task only
const ROUTINE_OFFSETS: [u32; 7] = [0, 3, 3, 3, 7, 7, 12];
const ROUTINE_DURATIONS: [u32; 7] = [1, 1, 1, 1, 1, 1, 2];

/// Corrective actions from the failure-mode analysis
pub fn fmea_action_plan(start: NaiveDate) -> PdmResult<Schedule> {
    Schedule::from_columns(FMEA_TITLE, start, &FMEA_TASKS, &FMEA_OFFSETS, &FMEA_DURATIONS)
}

/// Recurring monitoring routine
pub fn maintenance_routine(start: NaiveDate) -> PdmResult<Schedule> {
    Schedule::from_columns(
        ROUTINE_TITLE,
        start,
        &ROUTINE_TASKS,
        &ROUTINE_OFFSETS,
        &ROUTINE_DURATIONS,
    )
}

pub fn builtin_plans(start: NaiveDate) -> PdmResult<Vec<Schedule>> {
    Ok(vec![fmea_action_plan(start)?, maintenance_routine(start)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{pdm_error::PdmError, time::parse_date};
    use crate::schedule::schedule::MaintenanceTask;

    #[test]
    fn test_fmea_layout() {
        let start = parse_date("2025-12-05").unwrap();
        let plan = fmea_action_plan(start).unwrap();
        let bars = plan.layout();
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].task, "Lubricate bearings");
        assert_eq!(bars[0].start, start);
        assert_eq!(bars[0].end, parse_date("2025-12-07").unwrap());
        // Replace bearings: offset 3, duration 5
        assert_eq!(bars[2].start, parse_date("2025-12-08").unwrap());
        assert_eq!(bars[2].end, parse_date("2025-12-13").unwrap());
        // Validate voltage balance: offset 12, duration 3
        assert_eq!(bars[11].end, parse_date("2025-12-20").unwrap());
        assert_eq!(plan.span(), Some((start, parse_date("2025-12-20").unwrap())));
    }

    #[test]
    fn test_routine_ticks() {
        let start = parse_date("2025-12-05").unwrap();
        let plan = maintenance_routine(start).unwrap();
        assert_eq!(plan.span().unwrap().1, parse_date("2025-12-19").unwrap());
        let ticks = plan.date_ticks(2);
        assert_eq!(ticks.first(), Some(&start));
        assert_eq!(ticks.last(), Some(&parse_date("2025-12-19").unwrap()));
        assert_eq!(ticks.len(), 8);
    }

    #[test]
    fn test_mismatched_columns() {
        let start = parse_date("2025-12-05").unwrap();
        let err = Schedule::from_columns("Broken", start, &["a", "b"], &[0], &[1, 1]).unwrap_err();
        assert!(matches!(err, PdmError::Schedule { .. }));
        assert!(err.to_string().contains("2 tasks but 1 offsets"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let start = parse_date("2025-12-05").unwrap();
        let tasks = vec![MaintenanceTask {
            name: "Noop".into(),
            offset_days: 0,
            duration_days: 0,
        }];
        assert!(Schedule::new("Zero", start, tasks).is_err());
    }

    #[test]
    fn test_empty_schedule_has_no_span() {
        let start = parse_date("2025-12-05").unwrap();
        let plan = Schedule::new("Empty", start, Vec::new()).unwrap();
        assert_eq!(plan.span(), None);
        assert!(plan.date_ticks(2).is_empty());
    }
}
