use super::figure::{Bar, Figure, Panel};
use crate::common::time::{format_date, DATE_FORMAT};
use crate::schedule::schedule::Schedule;

/// Horizontal bar chart of a schedule with date ticks every
/// `tick_interval_days`
pub fn gantt_chart(schedule: &Schedule, tick_interval_days: u32) -> Figure {
    let title = format!(
        "{} – Gantt Chart (Starting {})",
        schedule.title,
        schedule.start.format("%B %-d, %Y")
    );
    let mut panel = Panel::new(title, "Date", "");
    panel.grid = false;
    panel.x_tick_rotation = 45.0;
    panel.x_ticks = schedule
        .date_ticks(tick_interval_days)
        .into_iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect();
    panel.bars = schedule
        .layout()
        .into_iter()
        .map(|t| Bar {
            duration_days: (t.end - t.start).num_days(),
            label: t.task,
            start: format_date(t.start),
            end: format_date(t.end),
            height: 0.5,
        })
        .collect();

    Figure::single(14.0, 7.0, panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::parse_date;
    use crate::schedule::plans::fmea_action_plan;

    #[test]
    fn test_fmea_gantt() {
        let plan = fmea_action_plan(parse_date("2025-12-05").unwrap()).unwrap();
        let fig = gantt_chart(&plan, 2);
        let panel = &fig.panels[0];
        assert_eq!(
            panel.title,
            "FMEA Action Plan – Gantt Chart (Starting December 5, 2025)"
        );
        assert_eq!(panel.bars.len(), 12);
        assert_eq!(panel.bars[2].label, "Replace bearings");
        assert_eq!(panel.bars[2].start, "2025-12-08");
        assert_eq!(panel.bars[2].duration_days, 5);
        assert_eq!(panel.x_ticks.first().map(String::as_str), Some("2025-12-05"));
        assert_eq!(panel.x_ticks.get(1).map(String::as_str), Some("2025-12-07"));
    }
}
