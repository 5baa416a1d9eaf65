use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::assign_rows;
use crate::core::visibility::filter_visible;
use crate::db::pool::DbPool;
use crate::db::queries::{load_group_events, load_group_events_between};
use crate::errors::{AppError, AppResult};
use crate::session;
use crate::utils::date::{self, YearMonth};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let mut pool = DbPool::new(&cfg.database)?;

        let bounds = resolve_period(period)?;
        let events = match bounds {
            Some((from, to)) => load_group_events_between(&mut pool, &viewer.group_id, from, to)?,
            None => load_group_events(&mut pool, &viewer.group_id)?,
        };

        let placed = assign_rows(filter_visible(events, &viewer));

        match bounds {
            Some((from, to)) => println!("📅 Events from {} to {}:", from, to),
            None => println!("📅 All events of group {}:", viewer.group_id),
        }

        if placed.is_empty() {
            println!("No events found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("START", 10),
            Column::new("END", 10),
            Column::new("ROW", 3),
            Column::new("OWNER", 14),
            Column::new("ROLE", 6),
            Column::new("TITLE", 32),
        ]);

        for p in &placed {
            table.add_row(vec![
                p.event.id.to_string(),
                p.event.start_str(),
                p.event.end_str(),
                p.visual_row.to_string(),
                p.event.owner_name.clone(),
                p.event.owner_role.to_string(),
                p.event.title.clone(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) => date::resolve_period(p).map_err(AppError::InvalidDate),
        None => {
            let month = YearMonth::current();
            Ok(Some((month.first_day(), month.last_day())))
        }
    }
}
