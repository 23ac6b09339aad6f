use cableflow_core::{Role, UserIdentity};
use serde::{Deserialize, Serialize};

/// Boolean capability flags derived from the session identity.
///
/// Always computed from the identity at hand; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// An identity is present.
    pub is_authenticated: bool,
    /// An identity is present and holds the administrator role.
    pub is_administrator: bool,
    /// An identity is present and holds the subscriber role.
    pub is_subscriber: bool,
}

impl Capabilities {
    /// Derives the flags for an optional identity.
    #[must_use]
    pub fn for_identity(identity: Option<&UserIdentity>) -> Self {
        let role = identity.map(UserIdentity::role);

        Self {
            is_authenticated: identity.is_some(),
            is_administrator: role == Some(Role::Administrator),
            is_subscriber: role == Some(Role::Subscriber),
        }
    }

    /// Returns whether the flags grant the given role.
    #[must_use]
    pub fn holds(&self, role: Role) -> bool {
        match role {
            Role::Administrator => self.is_administrator,
            Role::Subscriber => self.is_subscriber,
        }
    }
}
