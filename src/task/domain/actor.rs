//! Attribution of audit activity to the user or subsystem that acted.

use super::UserId;
use serde::{Deserialize, Serialize};

/// The acting party recorded against each audit activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    display_name: String,
}

impl Actor {
    /// Creates an actor for a named user.
    #[must_use]
    pub fn named(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }

    /// The system actor, attributed to automatic mutations such as task
    /// creation and reconciliation cancellations.
    #[must_use]
    pub fn system() -> Self {
        Self::named(UserId::new(1), "System")
    }

    /// The manager actor, attributed to reassignment and priority changes.
    #[must_use]
    pub fn manager() -> Self {
        Self::named(UserId::new(1), "Manager")
    }

    /// Returns the acting user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the acting user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
