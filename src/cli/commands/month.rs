use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::{LayoutSettings, RenderContext, RenderModel, render};
use crate::db::pool::DbPool;
use crate::db::queries::load_group_events_between;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::viewer::Viewer;
use crate::session;
use crate::ui::messages::header;
use crate::ui::month_view::MonthView;
use crate::utils::date::{self, YearMonth, grid_window};
use crate::utils::formatting::plural;
use std::path::Path;

/// Run the render pass for `month` over `events` (the group's event set).
pub fn build_model(
    settings: LayoutSettings,
    viewer: &Viewer,
    month: YearMonth,
    events: &[Event],
) -> RenderModel {
    let ctx = RenderContext {
        viewer,
        month,
        events,
        settings,
        today: Some(date::today()),
    };
    render(&ctx)
}

/// Print the month grid with its title line.
pub fn print_month(
    cfg: &Config,
    settings: LayoutSettings,
    viewer: &Viewer,
    month: YearMonth,
    events: &[Event],
) {
    let model = build_model(settings, viewer, month, events);

    header(format!(
        "{} · group {} · {}",
        month.first_day().format("%B %Y"),
        viewer.group_id,
        plural(model.events.len(), "event", "events")
    ));

    let view = MonthView {
        model: &model,
        viewer,
        cell_width: cfg.cell_width,
        use_color: cfg.use_color,
    };
    print!("{}", view.render());
}

pub fn parse_month(arg: &Option<String>) -> AppResult<YearMonth> {
    match arg {
        Some(m) => YearMonth::parse(m).ok_or_else(|| AppError::InvalidMonth(m.clone())),
        None => Ok(YearMonth::current()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month, json } = cmd {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let month = parse_month(month)?;

        let settings = LayoutSettings::from_config(cfg)?;
        let (from, to) = grid_window(month, settings.week_start);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_group_events_between(&mut pool, &viewer.group_id, from, to)?;

        if *json {
            let model = build_model(settings, &viewer, month, &events);
            println!("{}", serde_json::to_string_pretty(&model)?);
        } else {
            print_month(cfg, settings, &viewer, month, &events);
        }
    }

    Ok(())
}
