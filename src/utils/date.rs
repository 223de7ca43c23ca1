use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current time as RFC3339, the format `shots.date` is stored in.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

/// Short display form of a stored RFC3339 shot date.
pub fn short_date(rfc3339: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}
