//! Feedback log rows
//!
//! One row per submission, columns `Name,Rating,Date,Liked`. Dates are
//! written as `YYYY-MM-DD`; a date that fails to parse on read becomes
//! `None` instead of failing the whole file.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Column header of the feedback file
pub const HEADER: [&str; 4] = ["Name", "Rating", "Date", "Liked"];

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Serialized date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One viewer submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Rating", deserialize_with = "deserialize_rating")]
    pub rating: u8,

    #[serde(
        rename = "Date",
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    pub date: Option<NaiveDate>,

    #[serde(rename = "Liked", deserialize_with = "deserialize_liked")]
    pub liked: u8,
}

impl FeedbackRecord {
    /// New submission; `liked` starts at 0
    pub fn new(name: impl Into<String>, rating: u8, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            rating,
            date: Some(date),
            liked: 0,
        }
    }
}

fn serialize_date<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(parse_date_lenient(&raw))
}

/// Parse a calendar date, ignoring any time component
///
/// Accepts `YYYY-MM-DD` optionally followed by a time (`2024-01-01 00:00:00`,
/// `2024-01-01T08:30:00`). Anything else yields `None`.
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let day = raw.split(|c| c == ' ' || c == 'T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(day, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Unparseable feedback date {:?}, keeping row without a date", raw);
            None
        }
    }
}

/// Parse a small non-negative integer cell
///
/// Files rewritten by pandas after a blank cell store the whole column as
/// floats (`5.0`), so integral float text is accepted as well.
pub fn parse_integral_cell(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u8>() {
        return Some(value);
    }
    let value: f64 = raw.parse().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_integral_cell(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("rating is not an integer: {:?}", raw)))
}

fn deserialize_liked<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Ok(0);
    }
    parse_integral_cell(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("liked is not an integer: {:?}", raw)))
}
