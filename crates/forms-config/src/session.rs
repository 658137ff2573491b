//! In-memory session store configuration.

use serde::{Deserialize, Serialize};

const fn default_max_sessions() -> usize {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Live sessions kept before the oldest is evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
        }
    }
}
