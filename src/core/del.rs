use crate::core::feed::EventFeed;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event, load_group_events};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::viewer::Viewer;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete event `id` on behalf of `viewer` and return the removed event.
    ///
    /// Allowed for the owner and for any leader of the event's group.
    pub fn apply(
        pool: &mut DbPool,
        feed: &mut EventFeed<'_>,
        viewer: &Viewer,
        id: i64,
    ) -> AppResult<Event> {
        let ev = load_event(pool, id)?.ok_or(AppError::EventNotFound(id))?;

        if ev.group_id != viewer.group_id {
            // Events of other groups are reported as missing.
            return Err(AppError::EventNotFound(id));
        }

        if !viewer.can_delete(&ev) {
            return Err(AppError::PermissionDenied(format!(
                "event #{} belongs to {}; only its owner or a leader can delete it",
                ev.id, ev.owner_name
            )));
        }

        delete_event(pool, id)?;

        audit_or_warn(
            &pool.conn,
            "del",
            &format!("#{}", ev.id),
            &format!("{} deleted '{}' owned by {}", viewer.id, ev.title, ev.owner_id),
        );

        let current = load_group_events(pool, &ev.group_id)?;
        feed.publish(&ev.group_id, &current);

        Ok(ev)
    }
}
