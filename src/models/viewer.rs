use super::event::Event;
use super::role::Role;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// The person looking at the calendar, as stored in the session file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub group_id: String,
}

impl Viewer {
    /// Build a session identity from user input. Values are trimmed and
    /// none of them may be blank.
    pub fn new(id: &str, name: &str, role: Role, group_id: &str) -> AppResult<Self> {
        let id = non_blank(id, "id")?;
        let name = non_blank(name, "name")?;
        let group_id = non_blank(group_id, "group")?;
        Ok(Self {
            id,
            name,
            role,
            group_id,
        })
    }

    /// Members see leader events and their own; leaders see everything
    /// in their group.
    pub fn can_see(&self, ev: &Event) -> bool {
        if ev.group_id != self.group_id {
            return false;
        }
        match self.role {
            Role::Leader => true,
            Role::Member => ev.owner_role == Role::Leader || ev.owner_id == self.id,
        }
    }

    /// Owners may delete their own events, leaders may delete any event
    /// of their group.
    pub fn can_delete(&self, ev: &Event) -> bool {
        if ev.group_id != self.group_id {
            return false;
        }
        ev.owner_id == self.id || self.role.is_leader()
    }
}

fn non_blank(value: &str, field: &'static str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BlankField(field));
    }
    Ok(value.to_string())
}
