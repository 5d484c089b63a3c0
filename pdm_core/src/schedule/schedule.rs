use chrono::NaiveDate;
use serde::Serialize;

use crate::common::{
    pdm_error::{PdmError, PdmResult},
    time::add_days,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceTask {
    pub name: String,
    /// Days after the schedule start
    pub offset_days: u32,
    pub duration_days: u32,
}

/// A task placed on the calendar; `end` is exclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    pub task: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub title: String,
    pub start: NaiveDate,
    pub tasks: Vec<MaintenanceTask>,
}

impl Schedule {
    pub fn new(title: impl Into<String>, start: NaiveDate, tasks: Vec<MaintenanceTask>) -> PdmResult<Self> {
        let title = title.into();
        if let Some(t) = tasks.iter().find(|t| t.duration_days == 0) {
            return Err(PdmError::Schedule {
                title,
                reason: format!("task {:?} has zero duration", t.name),
            });
        }
        Ok(Self { title, start, tasks })
    }

    /// Build from parallel name / offset / duration lists
    pub fn from_columns(
        title: impl Into<String>,
        start: NaiveDate,
        names: &[&str],
        offsets: &[u32],
        durations: &[u32],
    ) -> PdmResult<Self> {
        let title = title.into();
        if names.len() != offsets.len() || names.len() != durations.len() {
            return Err(PdmError::Schedule {
                title,
                reason: format!(
                    "{} tasks but {} offsets and {} durations",
                    names.len(),
                    offsets.len(),
                    durations.len()
                ),
            });
        }
        let tasks = names
            .iter()
            .zip(offsets)
            .zip(durations)
            .map(|((name, &offset_days), &duration_days)| MaintenanceTask {
                name: name.to_string(),
                offset_days,
                duration_days,
            })
            .collect();
        Self::new(title, start, tasks)
    }

    pub fn layout(&self) -> Vec<ScheduledTask> {
        self.tasks
            .iter()
            .map(|t| {
                let start = add_days(self.start, t.offset_days);
                ScheduledTask {
                    task: t.name.clone(),
                    start,
                    end: add_days(start, t.duration_days),
                }
            })
            .collect()
    }

    /// Earliest start and latest end over all tasks
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let bars = self.layout();
        let first = bars.iter().map(|b| b.start).min()?;
        let last = bars.iter().map(|b| b.end).max()?;
        Some((first, last))
    }

    /// Tick dates every `interval` days from the schedule start through the
    /// last task end
    pub fn date_ticks(&self, interval: u32) -> Vec<NaiveDate> {
        let Some((_, last)) = self.span() else {
            return Vec::new();
        };
        let step = interval.max(1);
        let mut ticks = Vec::new();
        let mut d = self.start;
        while d <= last {
            ticks.push(d);
            d = add_days(d, step);
        }
        ticks
    }
}
