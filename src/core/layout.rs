//! Lane layout for multi-day event bars.
//!
//! Events are sorted by start date (ascending) and then by duration
//! (descending), and each one takes the lowest row that is free on every
//! day it covers. Long events therefore claim the low rows first.

use crate::models::event::Event;
use crate::utils::date::{DayKey, day_keys_inclusive};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// An event together with the row it occupies in the current render pass.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlacedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub visual_row: usize,
}

/// Rows taken on each day, local to one layout run.
#[derive(Debug, Default)]
struct Occupancy {
    days: HashMap<DayKey, HashSet<usize>>,
}

impl Occupancy {
    fn is_free(&self, day: DayKey, row: usize) -> bool {
        self.days.get(&day).is_none_or(|rows| !rows.contains(&row))
    }

    /// Smallest row free on every day of `[start, end]`.
    fn first_fit(&self, start: NaiveDate, end: NaiveDate) -> usize {
        let mut row = 0;
        while !day_keys_inclusive(start, end).all(|day| self.is_free(day, row)) {
            row += 1;
        }
        row
    }

    fn occupy(&mut self, start: NaiveDate, end: NaiveDate, row: usize) {
        for day in day_keys_inclusive(start, end) {
            self.days.entry(day).or_default().insert(row);
        }
    }
}

/// Assign a `visual_row` to every event so that two events sharing a day
/// never share a row. The result keeps the caller's order.
///
/// Every event must satisfy `start_date <= end_date`.
pub fn assign_rows(events: Vec<Event>) -> Vec<PlacedEvent> {
    let mut order: Vec<usize> = (0..events.len()).collect();

    // `sort_by` is stable: full ties keep input order.
    order.sort_by(|&a, &b| {
        let (ea, eb) = (&events[a], &events[b]);
        ea.start_date
            .cmp(&eb.start_date)
            .then_with(|| eb.duration_days().cmp(&ea.duration_days()))
    });

    let mut rows = vec![0usize; events.len()];
    let mut occupancy = Occupancy::default();

    for idx in order {
        let ev = &events[idx];
        let row = occupancy.first_fit(ev.start_date, ev.end_date);
        occupancy.occupy(ev.start_date, ev.end_date, row);
        rows[idx] = row;
    }

    events
        .into_iter()
        .zip(rows)
        .map(|(event, visual_row)| PlacedEvent { event, visual_row })
        .collect()
}

/// Events whose range includes `day`, in the order of `placed`.
pub fn events_on_day(placed: &[PlacedEvent], day: NaiveDate) -> Vec<&PlacedEvent> {
    placed.iter().filter(|p| p.event.covers(day)).collect()
}

/// Number of rows in use (highest row + 1), zero for an empty layout.
pub fn row_count(placed: &[PlacedEvent]) -> usize {
    placed.iter().map(|p| p.visual_row + 1).max().unwrap_or(0)
}
