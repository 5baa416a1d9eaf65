// src/export/logic.rs

use crate::core::layout::assign_rows;
use crate::core::visibility::filter_visible;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_group_events, load_group_events_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::models::viewer::Viewer;
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the events `viewer` can see, with the rows they get when laid
    /// out together.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"`, or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or two of those joined by `:`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        viewer: &Viewer,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => resolve_period(r).map_err(AppError::InvalidDate)?,
        };

        let events = match bounds {
            Some((from, to)) => load_group_events_between(pool, &viewer.group_id, from, to)?,
            None => load_group_events(pool, &viewer.group_id)?,
        };

        let placed = assign_rows(filter_visible(events, viewer));

        if placed.is_empty() {
            warning("No events found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<EventExport> = placed.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        audit_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} events exported to {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
