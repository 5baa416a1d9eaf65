use crate::cli::commands::month::print_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::feed::EventFeed;
use crate::core::render::LayoutSettings;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::session;
use crate::ui::messages::success;
use crate::utils::date::{self, YearMonth};
use crate::utils::formatting::describe_span;
use std::path::Path;

/// Add an event owned by the current viewer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        start,
        end,
        title,
        show,
    } = cmd
    {
        //
        // 1. Parse dates (end defaults to start)
        //
        let start_date = date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
        let end_date = match end {
            Some(e) => date::parse_date(e).ok_or_else(|| AppError::InvalidDate(e.clone()))?,
            None => start_date,
        };

        //
        // 2. Session + DB
        //
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 3. Optional live month view
        //
        let month = YearMonth::of(start_date);
        let settings = LayoutSettings::from_config(cfg)?;
        let mut feed = EventFeed::new();
        if *show {
            feed.subscribe(&viewer.group_id, |events| {
                println!();
                print_month(cfg, settings, &viewer, month, events);
            });
        }

        //
        // 4. Execute logic
        //
        let draft = AddLogic::draft(&viewer, start_date, end_date, title);
        let created = AddLogic::apply(&mut pool, &mut feed, &viewer, draft)?;

        success(format!(
            "Event #{} '{}' added ({})",
            created.id,
            created.title,
            describe_span(&created.start_str(), &created.end_str())
        ));
    }

    Ok(())
}
