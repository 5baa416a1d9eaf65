//! Terminal rendering of a [`RenderModel`].
//!
//! Each week prints one line of day numbers followed by one line per row
//! in use that week. A bar shows its title on its first day and at the
//! start of every week it continues into, and a line elsewhere.

use crate::core::render::{Bar, RenderModel};
use crate::models::role::Role;
use crate::models::viewer::Viewer;
use crate::utils::colors::{CYAN, GREEN, GREY, YELLOW, paint};
use crate::utils::formatting::{bold, fit_width};
use chrono::Datelike;
use std::collections::HashMap;

pub struct MonthView<'a> {
    pub model: &'a RenderModel,
    pub viewer: &'a Viewer,
    pub cell_width: usize,
    pub use_color: bool,
}

impl MonthView<'_> {
    fn bar_color(&self, event_id: i64) -> &'static str {
        let owner = self
            .model
            .events
            .iter()
            .find(|p| p.event.id == event_id)
            .map(|p| (&p.event.owner_id, p.event.owner_role));

        match owner {
            Some((id, _)) if *id == self.viewer.id => GREEN,
            Some((_, Role::Leader)) => CYAN,
            _ => YELLOW,
        }
    }

    fn bar_cell(&self, bar: &Bar) -> String {
        let width = self.cell_width.max(2);
        let text = if bar.show_label {
            fit_width(&format!("▌{}", bar.title), width)
        } else {
            "─".repeat(width)
        };
        paint(&text, self.bar_color(bar.event_id), self.use_color)
    }

    fn day_number(&self, day: chrono::NaiveDate, in_month: bool, is_today: bool) -> String {
        let label = fit_width(&format!("{:>2}", day.day()), self.cell_width.max(2));
        if !in_month {
            paint(&label, GREY, self.use_color)
        } else if is_today && self.use_color {
            bold(&label)
        } else {
            label
        }
    }

    pub fn render(&self) -> String {
        let width = self.cell_width.max(2);
        let mut out = String::new();

        // Weekday header, starting from the first grid column.
        for cell in self.model.cells.iter().take(7) {
            out.push_str(&fit_width(&cell.date.format("%a").to_string(), width));
            out.push(' ');
        }
        out.push('\n');

        for week in self.model.weeks() {
            for cell in week {
                out.push_str(&self.day_number(cell.date, cell.in_month, cell.is_today));
                out.push(' ');
            }
            out.push('\n');

            let mut by_slot: HashMap<(chrono::NaiveDate, usize), &Bar> = HashMap::new();
            let mut week_rows = 0;
            for cell in week {
                for bar in self.model.bars_on(cell.date) {
                    by_slot.insert((bar.day, bar.visual_row), bar);
                    week_rows = week_rows.max(bar.visual_row + 1);
                }
            }

            for row in 0..week_rows {
                for cell in week {
                    match by_slot.get(&(cell.date, row)) {
                        Some(bar) => out.push_str(&self.bar_cell(bar)),
                        None => out.push_str(&" ".repeat(width)),
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
