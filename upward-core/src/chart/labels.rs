use crate::dates::parse_date;

/// Long tooltip header, e.g. `2024-01-05` -> `Friday, Jan 5`.
///
/// Labels that are not dates are returned as-is.
pub fn format_tooltip_title(label: &str) -> String {
    match parse_date(label) {
        Ok(date) => date.format("%A, %b %-d").to_string(),
        Err(_) => label.to_string(),
    }
}

/// Short axis label, e.g. `2024-01-05` -> `Jan 5`.
pub fn format_date_for_chart(date: &str) -> String {
    match parse_date(date) {
        Ok(d) => d.format("%b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}
