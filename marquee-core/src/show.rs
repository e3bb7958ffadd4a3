use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub duration_min: i32,
    /// Classification code (AA, A, B, B15, C, D)
    pub rating: String,
    pub genre: String,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub now_showing: bool,
}

/// A projection room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
}

/// A scheduled screening of a movie in a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub movie_id: i64,
    pub room_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub base_price_cents: i64,
}

/// A show joined with its display context, as listed by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowSummary {
    pub id: i64,
    pub movie_title: String,
    pub room_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub base_price_cents: i64,
}
