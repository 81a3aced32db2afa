//! Principal value object for explicit identity passing.

use serde::{Deserialize, Serialize};

/// Identity resolved from a successfully authenticated request.
///
/// Produced by the transport layer after it authenticates the request and
/// passed explicitly into every operation that needs identity. The core
/// never reads identity from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Authenticated username
    pub username: String,
}

impl Principal {
    /// Creates a principal for an authenticated username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
