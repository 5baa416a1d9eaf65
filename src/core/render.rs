//! Month render pass.
//!
//! `render` is a pure function of its context: the viewer, the visible
//! month and the full event set of the group. It filters, lays out and
//! flattens the month into day cells and positioned bars.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::core::layout::{PlacedEvent, assign_rows, events_on_day, row_count};
use crate::core::visibility::filter_visible;
use crate::models::event::Event;
use crate::models::viewer::Viewer;
use crate::utils::date::{YearMonth, days_inclusive, grid_window, parse_week_start};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Geometry of the grid.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSettings {
    pub week_start: Weekday,
    /// Vertical offset of row 0 inside a day cell.
    pub base_offset: u32,
    /// Height of one row.
    pub row_height: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            base_offset: 24,
            row_height: 18,
        }
    }
}

impl LayoutSettings {
    /// Geometry from the config file. Fails on an unknown `week_start` or
    /// bar sizes above [`MAX_BAR_GEOMETRY`](crate::config::MAX_BAR_GEOMETRY).
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;
        let week_start = parse_week_start(&cfg.week_start)
            .ok_or_else(|| AppError::Config(format!("invalid week_start '{}'", cfg.week_start)))?;
        Ok(Self {
            week_start,
            base_offset: cfg.bar_base_offset,
            row_height: cfg.bar_row_height,
        })
    }

    /// Saturates at `u32::MAX` instead of overflowing.
    pub fn offset_for(&self, row: usize) -> u32 {
        let row = u32::try_from(row).unwrap_or(u32::MAX);
        self.base_offset.saturating_add(row.saturating_mul(self.row_height))
    }
}

pub struct RenderContext<'a> {
    pub viewer: &'a Viewer,
    pub month: YearMonth,
    pub events: &'a [Event],
    pub settings: LayoutSettings,
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
}

/// One event drawn on one day.
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub event_id: i64,
    pub day: NaiveDate,
    pub visual_row: usize,
    pub offset: u32,
    pub is_start: bool,
    pub is_end: bool,
    pub show_label: bool,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub month: YearMonth,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub rows: usize,
    pub cells: Vec<DayCell>,
    pub events: Vec<PlacedEvent>,
    pub bars: Vec<Bar>,
}

impl RenderModel {
    pub fn events_on(&self, day: NaiveDate) -> Vec<&PlacedEvent> {
        events_on_day(&self.events, day)
    }

    pub fn bars_on(&self, day: NaiveDate) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(move |b| b.day == day)
    }

    /// Grid cells split into weeks of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

pub fn render(ctx: &RenderContext<'_>) -> RenderModel {
    let (window_start, window_end) = grid_window(ctx.month, ctx.settings.week_start);

    let visible: Vec<Event> = filter_visible(ctx.events.to_vec(), ctx.viewer)
        .into_iter()
        .filter(|ev| ev.intersects(window_start, window_end))
        .collect();

    let placed = assign_rows(visible);

    let cells: Vec<DayCell> = days_inclusive(window_start, window_end)
        .map(|date| DayCell {
            date,
            in_month: ctx.month.contains(date),
            is_today: ctx.today == Some(date),
        })
        .collect();

    let mut bars = Vec::new();
    for p in &placed {
        let from = p.event.start_date.max(window_start);
        let to = p.event.end_date.min(window_end);
        for day in days_inclusive(from, to) {
            let is_start = day == p.event.start_date;
            let week_head = day.weekday() == ctx.settings.week_start;
            bars.push(Bar {
                event_id: p.event.id,
                day,
                visual_row: p.visual_row,
                offset: ctx.settings.offset_for(p.visual_row),
                is_start,
                is_end: day == p.event.end_date,
                show_label: is_start || week_head,
                title: p.event.title.clone(),
            });
        }
    }
    bars.sort_by(|a, b| a.day.cmp(&b.day).then(a.visual_row.cmp(&b.visual_row)));

    RenderModel {
        month: ctx.month,
        window_start,
        window_end,
        rows: row_count(&placed),
        cells,
        events: placed,
        bars,
    }
}
