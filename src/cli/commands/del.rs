use crate::cli::commands::month::print_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::feed::EventFeed;
use crate::core::render::LayoutSettings;
use crate::db::pool::DbPool;
use crate::db::queries::load_event;
use crate::errors::{AppError, AppResult};
use crate::session;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date::YearMonth;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes, show } = cmd {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let mut pool = DbPool::new(&cfg.database)?;

        let target = load_event(&mut pool, *id)?
            .filter(|ev| ev.group_id == viewer.group_id)
            .ok_or(AppError::EventNotFound(*id))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete event #{} '{}'? This action is irreversible.",
            target.id, target.title
        );
        if !*yes {
            warning(&prompt);
            if !confirm("Confirm").unwrap_or(false) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let month = YearMonth::of(target.start_date);
        let settings = LayoutSettings::from_config(cfg)?;
        let mut feed = EventFeed::new();
        if *show {
            feed.subscribe(&viewer.group_id, |events| {
                println!();
                print_month(cfg, settings, &viewer, month, events);
            });
        }

        let removed = DeleteLogic::apply(&mut pool, &mut feed, &viewer, *id)?;
        success(format!("Event #{} '{}' has been deleted.", removed.id, removed.title));
    }

    Ok(())
}
