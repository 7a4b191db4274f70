use serde::Deserialize;

use crate::Day;

/// Status of one calendar cell. Only `Ok` survives extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Other,
}

impl Status {
    pub(crate) fn from_cell(text: &str) -> Self {
        if text.to_lowercase() == "ok" {
            Self::Ok
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub name: String,
    /// Header text of the cell's column, empty when the table has no header there.
    pub day: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum MovieStatus {
    Available,
    Unavailable,
}

impl From<i64> for MovieStatus {
    fn from(status: i64) -> Self {
        match status {
            1 => Self::Available,
            _ => Self::Unavailable,
        }
    }
}

/// One entry of the cinema's `check` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "movie")]
    pub movie_code: String,
    #[serde(rename = "day")]
    pub day_code: String,
    #[serde(rename = "time")]
    pub start_time_raw: String,
    pub status: MovieStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableMovie {
    pub title: String,
    pub start_time: String,
    /// Day code as reported by the cinema, e.g. `"05"`.
    pub day: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantSlot {
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
}
