use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Closed set of principal kinds that decide which routes are authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Operator of the administrative console.
    #[serde(rename = "admin")]
    Administrator,
    /// Subscriber using the self-service console.
    #[serde(rename = "member")]
    Subscriber,
}

impl Role {
    /// Returns the stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "admin",
            Self::Subscriber => "member",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Administrator, Role::Subscriber];

        ALL
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Administrator),
            "member" => Ok(Self::Subscriber),
            _ => Err(AppError::UnknownRole(value.to_owned())),
        }
    }
}

/// Authenticated principal held by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: String,
    #[serde(rename = "name")]
    display_name: String,
    email: String,
    role: Role,
}

impl UserIdentity {
    /// Creates a user identity from authentication data.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Returns the opaque principal identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email used to sign in.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the role fixed at sign-in.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Role, UserIdentity};

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Subscriber), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("").is_err());
        assert!(Role::from_str("Admin").is_err());
    }

    #[test]
    fn identity_serializes_with_storage_field_names() {
        let identity = UserIdentity::new("1", "Admin User", "admin@example.com", Role::Administrator);
        let encoded = serde_json::to_value(&identity);
        assert!(encoded.is_ok());
        assert_eq!(
            encoded.unwrap_or_default(),
            serde_json::json!({
                "id": "1",
                "name": "Admin User",
                "email": "admin@example.com",
                "role": "admin",
            })
        );
    }
}
