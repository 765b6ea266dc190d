//! Table configuration models.

use serde::{Deserialize, Serialize};

/// Table configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableConfig {
    /// Table name shown in logs
    pub name: String,

    /// Maximum number of concurrent player sessions
    pub max_sessions: usize,

    /// Reject toggles on the free space instead of letting players unmark it
    pub lock_free_space: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "Main Hall".to_string(),
            max_sessions: 200,
            lock_free_space: false,
        }
    }
}
