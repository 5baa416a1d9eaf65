use crate::core::feed::EventFeed;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_group_events};
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::models::viewer::Viewer;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Build the creation payload for `viewer`, who becomes the owner.
    pub fn draft(viewer: &Viewer, start: NaiveDate, end: NaiveDate, title: &str) -> NewEvent {
        NewEvent {
            group_id: viewer.group_id.clone(),
            owner_id: viewer.id.clone(),
            owner_name: viewer.name.clone(),
            owner_role: viewer.role,
            start_date: start,
            end_date: end,
            title: title.trim().to_string(),
        }
    }

    /// Validate and persist `draft`, then push the group's new event set
    /// to the feed.
    pub fn apply(
        pool: &mut DbPool,
        feed: &mut EventFeed<'_>,
        viewer: &Viewer,
        draft: NewEvent,
    ) -> AppResult<Event> {
        // ------------------------------------------------
        // 1️⃣ Creation-time validation
        // ------------------------------------------------
        draft.validate()?;

        if draft.group_id != viewer.group_id {
            return Err(AppError::WrongGroup {
                event_group: draft.group_id,
                viewer_group: viewer.group_id.clone(),
            });
        }

        // ------------------------------------------------
        // 2️⃣ Persist
        // ------------------------------------------------
        let created = insert_event(pool, &draft)?;

        audit_or_warn(
            &pool.conn,
            "add",
            &format!("#{}", created.id),
            &format!(
                "{} added '{}' ({} → {}) in {}",
                viewer.id,
                created.title,
                created.start_str(),
                created.end_str(),
                created.group_id
            ),
        );

        // ------------------------------------------------
        // 3️⃣ Notify subscribers with the full set
        // ------------------------------------------------
        let current = load_group_events(pool, &created.group_id)?;
        feed.publish(&created.group_id, &current);

        Ok(created)
    }
}
