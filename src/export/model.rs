// src/export/model.rs

use crate::core::layout::PlacedEvent;
use serde::Serialize;

/// Flat row for exporting laid-out events.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub group_id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_role: String,
    pub visual_row: usize,
}

impl From<&PlacedEvent> for EventExport {
    fn from(p: &PlacedEvent) -> Self {
        Self {
            id: p.event.id,
            group_id: p.event.group_id.clone(),
            title: p.event.title.clone(),
            start_date: p.event.start_str(),
            end_date: p.event.end_str(),
            owner_id: p.event.owner_id.clone(),
            owner_name: p.event.owner_name.clone(),
            owner_role: p.event.owner_role.to_db_str().to_string(),
            visual_row: p.visual_row,
        }
    }
}
