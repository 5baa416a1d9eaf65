use crate::cli::commands::month::build_model;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::LayoutSettings;
use crate::db::pool::DbPool;
use crate::db::queries::load_group_events_between;
use crate::errors::{AppError, AppResult};
use crate::session;
use crate::utils::date::{self, YearMonth, grid_window};
use crate::utils::formatting::{describe_span, plural};
use std::path::Path;

const WRAP_WIDTH: usize = 60;

/// Day detail view. Rows are the ones the event has in the month grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_str } = cmd {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let day = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let month = YearMonth::of(day);
        let settings = LayoutSettings::from_config(cfg)?;
        let (from, to) = grid_window(month, settings.week_start);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_group_events_between(&mut pool, &viewer.group_id, from, to)?;
        let model = build_model(settings, &viewer, month, &events);

        let on_day = model.events_on(day);

        println!("📅 {} ({})", day, day.format("%A"));

        if on_day.is_empty() {
            println!("No events for {}", day);
            return Ok(());
        }

        let mut sorted = on_day;
        sorted.sort_by_key(|p| p.visual_row);

        for p in sorted {
            let ev = &p.event;
            println!(
                "  [row {}] #{} {} ({}) · {} ({})",
                p.visual_row,
                ev.id,
                describe_span(&ev.start_str(), &ev.end_str()),
                plural(ev.span_days() as usize, "day", "days"),
                ev.owner_name,
                ev.owner_role
            );
            for line in textwrap::wrap(&ev.title, WRAP_WIDTH) {
                println!("      {}", line);
            }
        }
    }

    Ok(())
}
