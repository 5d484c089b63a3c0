use chrono::{Duration, NaiveDate};

use crate::common::pdm_error::PdmResult;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse "YYYY-MM-DD" or "YYYYMMDD"
pub fn parse_date(s: &str) -> PdmResult<NaiveDate> {
    let s = s.trim();
    let date = if s.contains('-') {
        NaiveDate::parse_from_str(s, DATE_FORMAT)?
    } else {
        NaiveDate::parse_from_str(s, "%Y%m%d")?
    };
    Ok(date)
}

pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date + Duration::days(days as i64)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
