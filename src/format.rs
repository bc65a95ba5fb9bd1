//! Display helpers for dates, times and scores

use chrono::{NaiveDate, NaiveDateTime};

pub use crate::models::format_cents;

pub fn date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

pub fn date_time(dt: NaiveDateTime) -> String {
    dt.format("%a %b %-d, %H:%M").to_string()
}

pub fn time(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

pub fn percent(value: f64) -> String {
    format!("{:.0}%", value)
}

pub fn optional_percent(value: Option<f64>) -> String {
    value.map(percent).unwrap_or_else(|| "—".to_string())
}

/// "Due today", "Due in 3 days", "2 days overdue"
pub fn due_relative(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        d if d > 1 => format!("Due in {} days", d),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(date(day(4)), "Mar 4, 2025");
        let dt = day(10).and_hms_opt(15, 30, 0).unwrap();
        assert_eq!(date_time(dt), "Mon Mar 10, 15:30");
        assert_eq!(time(dt), "15:30");
    }

    #[test]
    fn test_due_relative() {
        assert_eq!(due_relative(day(10), day(10)), "Due today");
        assert_eq!(due_relative(day(11), day(10)), "Due tomorrow");
        assert_eq!(due_relative(day(14), day(10)), "Due in 4 days");
        assert_eq!(due_relative(day(9), day(10)), "1 day overdue");
        assert_eq!(due_relative(day(5), day(10)), "5 days overdue");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(86.6), "87%");
        assert_eq!(optional_percent(None), "—");
    }
}
