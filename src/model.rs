//! The book entity and its create-request shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the `books` table. `id` is assigned by the database on insert
/// and is the sole lookup/delete key.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: Option<NaiveDate>,
    pub page_count: i32,
}

/// Create-request body: a book without its identifier. Absent fields take
/// their zero values, matching what clients of this service already send.
#[derive(Debug, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub page_count: i32,
}
