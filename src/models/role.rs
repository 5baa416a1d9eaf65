use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Leader,
    Member,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Leader => "leader",
            Role::Member => "member",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "leader" => Some(Role::Leader),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    /// Helper: parse CLI input (case-insensitive, accepts `l` / `m`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "leader" | "l" => Some(Role::Leader),
            "member" | "m" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn is_leader(&self) -> bool {
        matches!(self, Role::Leader)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
