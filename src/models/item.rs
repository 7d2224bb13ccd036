use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serialize;

/// Upper bound on item text, counted in characters after trimming.
pub const MAX_TEXT_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,                          // ⇔ items.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub text: String,                     // ⇔ items.text (TEXT NOT NULL)
    pub added_by: String,                 // ⇔ items.added_by (TEXT NOT NULL)
    pub created_at: DateTime<Utc>,        // ⇔ items.created_at (TEXT, RFC 3339 µs)
    pub done: bool,                       // ⇔ items.done (INTEGER 0/1)
    pub done_by: Option<String>,          // ⇔ items.done_by (TEXT NULL)
    pub done_at: Option<DateTime<Utc>>,   // ⇔ items.done_at (TEXT NULL)
}

impl Item {
    /// A fresh, not-yet-persisted item. `id` stays 0 until the row is inserted.
    pub fn new(text: impl Into<String>, added_by: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            added_by: added_by.into(),
            created_at: now,
            done: false,
            done_by: None,
            done_at: None,
        }
    }

    /// Flip the done state. Marking done records who and when; un-marking
    /// clears both so `done_by`/`done_at` never outlive `done`.
    pub fn toggle(&mut self, username: &str, now: DateTime<Utc>) {
        if self.done {
            self.done = false;
            self.done_by = None;
            self.done_at = None;
        } else {
            self.done = true;
            self.done_by = Some(username.to_string());
            self.done_at = Some(now);
        }
    }

    pub fn created_at_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn done_at_str(&self) -> Option<String> {
        self.done_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Current time at the precision the database keeps (microseconds), so an
/// item compares equal before and after a round trip.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width UTC encoding used for the `created_at`/`done_at` columns, so
/// that ordering by the TEXT column is chronological.
pub fn to_db_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn from_db_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
