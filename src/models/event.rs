use super::role::Role;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// A stored calendar entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub id: i64,                // ⇔ events.id (assigned by the store)
    pub group_id: String,       // ⇔ events.group_id
    pub owner_id: String,       // ⇔ events.owner_id
    pub owner_name: String,     // ⇔ events.owner_name
    pub owner_role: Role,       // ⇔ events.owner_role ('leader' | 'member')
    pub start_date: NaiveDate,  // ⇔ events.start_date (TEXT "YYYY-MM-DD")
    pub end_date: NaiveDate,    // ⇔ events.end_date (TEXT "YYYY-MM-DD")
    pub title: String,          // ⇔ events.title
    pub created_at: String,     // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// Length of the event in days, counting both ends (a one-day event is 1).
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// `end_date - start_date` in days, the secondary layout sort key.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// True when `day` falls inside `[start_date, end_date]`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// True when the event shares at least one day with `[from, to]`.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && from <= self.end_date
    }

    pub fn start_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}

/// Payload accepted by the store when creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub group_id: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_role: Role,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub title: String,
}

impl NewEvent {
    /// Creation-time precondition: the layout engine never sees a range
    /// whose start lies after its end.
    pub fn validate(&self) -> AppResult<()> {
        if self.start_date > self.end_date {
            return Err(AppError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidTitle);
        }
        Ok(())
    }
}
