use super::role::Role;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub role: Role,
    pub joined_at: String,
}
