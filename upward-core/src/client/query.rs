//! Query-string construction shared by the endpoint functions.

use crate::dates::ApiDate;
use url::form_urlencoded;

/// Trailing window used when a caller gives no explicit dates.
pub const DEFAULT_DAYS: u32 = 30;

/// Ordered query parameters; encoded in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded form without the leading `?`; empty when there are no pairs.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

/// Date filter for range endpoints.
///
/// Explicit dates always win: `start_date` and `end_date` are attached when
/// present, and `days` only when neither date is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub days: u32,
}

impl DateWindow {
    /// Trailing window of `days` days.
    pub fn days(days: u32) -> Self {
        Self {
            start_date: None,
            end_date: None,
            days,
        }
    }

    /// Explicit inclusive range.
    pub fn range<S: ApiDate + ?Sized, E: ApiDate + ?Sized>(start: &S, end: &E) -> Self {
        Self {
            start_date: Some(start.to_api_date()),
            end_date: Some(end.to_api_date()),
            days: DEFAULT_DAYS,
        }
    }

    pub fn with_start<D: ApiDate + ?Sized>(mut self, start: &D) -> Self {
        self.start_date = Some(start.to_api_date());
        self
    }

    pub fn with_end<D: ApiDate + ?Sized>(mut self, end: &D) -> Self {
        self.end_date = Some(end.to_api_date());
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("start_date", self.start_date.as_deref())
            .push_opt("end_date", self.end_date.as_deref());
        if self.start_date.is_none() && self.end_date.is_none() {
            params.push("days", self.days);
        }
        params
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::days(DEFAULT_DAYS)
    }
}
