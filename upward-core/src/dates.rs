//! Conversions between native dates and the `YYYY-MM-DD` strings the API speaks.

use chrono::{DateTime, NaiveDate, ParseResult, TimeZone, Utc};

/// Date format used by every query parameter and payload field.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Values that can be rendered as an API date string.
pub trait ApiDate {
    fn to_api_date(&self) -> String;
}

impl ApiDate for NaiveDate {
    fn to_api_date(&self) -> String {
        self.format(API_DATE_FORMAT).to_string()
    }
}

// ISO-8601 is always rendered in UTC, so the date portion is the UTC date.
impl<Tz: TimeZone> ApiDate for DateTime<Tz> {
    fn to_api_date(&self) -> String {
        self.with_timezone(&Utc).date_naive().to_api_date()
    }
}

impl ApiDate for str {
    fn to_api_date(&self) -> String {
        self.to_string()
    }
}

impl ApiDate for String {
    fn to_api_date(&self) -> String {
        self.clone()
    }
}

impl<T: ApiDate + ?Sized> ApiDate for &T {
    fn to_api_date(&self) -> String {
        (**self).to_api_date()
    }
}

/// Render a date as `YYYY-MM-DD`; strings pass through unchanged.
pub fn format_date<D: ApiDate + ?Sized>(date: &D) -> String {
    date.to_api_date()
}

/// Parse a `YYYY-MM-DD` string or a full RFC 3339 timestamp into a date.
pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    match NaiveDate::parse_from_str(value, API_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(err) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| err),
    }
}
