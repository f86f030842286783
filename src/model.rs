use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of the hitlog exactly as it appears in the CSV file.
#[derive(Debug, Clone, Deserialize)]
pub struct HitRecord {
    pub page_name: String,
    pub page_url: String,
    pub user_id: String,
    pub timestamp: String,
}

/// A parsed page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub page_name: String,
    pub page_url: String,
    pub user_id: String,
    pub timestamp: Timestamp,
}

/// When an event happened.
///
/// Recognised dates and times (including integer epoch seconds) compare
/// chronologically. Any other value is kept verbatim and compared as a
/// string, and sorts after every recognised one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    At(NaiveDateTime),
    Raw(String),
}

impl Timestamp {
    /// `None` only for an empty value.
    pub fn parse(value: &str) -> Option<Timestamp> {
        if value.is_empty() {
            return None;
        }

        let parsed = DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|datetime| datetime.naive_utc())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .or_else(|| {
                value
                    .parse::<i64>()
                    .ok()
                    .and_then(|secs| DateTime::from_timestamp(secs, 0))
                    .map(|datetime| datetime.naive_utc())
            });

        Some(match parsed {
            Some(datetime) => Timestamp::At(datetime),
            None => Timestamp::Raw(value.to_owned()),
        })
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Timestamp::At(datetime)
    }
}

impl Event {
    pub fn new(
        page_name: impl Into<String>,
        page_url: impl Into<String>,
        user_id: impl Into<String>,
        timestamp: impl Into<Timestamp>,
    ) -> Self {
        Event {
            page_name: page_name.into(),
            page_url: page_url.into(),
            user_id: user_id.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn page_key(&self) -> PageKey<'_> {
        PageKey(&self.page_name, &self.page_url)
    }
}

// (page_name, page_url) identifies a page for deduplication and grouping
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageKey<'a>(pub &'a str, pub &'a str);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRecord {
    pub page_name: String,
    pub page_url: String,
    pub total: usize,
}

impl From<(PageKey<'_>, usize)> for AttributionRecord {
    fn from((PageKey(page_name, page_url), total): (PageKey<'_>, usize)) -> Self {
        AttributionRecord {
            page_name: page_name.to_owned(),
            page_url: page_url.to_owned(),
            total,
        }
    }
}
