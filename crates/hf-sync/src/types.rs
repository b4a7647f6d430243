use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role whose project instructions live in `.claude/projects/<role>.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Architect,
    Hydrogen,
    Tooling,
    Docs,
    Manager,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Architect,
        Role::Hydrogen,
        Role::Tooling,
        Role::Docs,
        Role::Manager,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Hydrogen => "hydrogen",
            Role::Tooling => "tooling",
            Role::Docs => "docs",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SyncError::UnknownRole(s.to_string()))
    }
}

/// A file as returned by the contents API, already decoded.
#[derive(Debug, Clone)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!(matches!("intern".parse::<Role>(), Err(SyncError::UnknownRole(_))));
    }
}
