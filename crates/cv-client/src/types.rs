//! Wire vocabulary shared between the node configuration and the
//! reputation service.

use serde::{Deserialize, Serialize};

/// How the username should be interpreted when matching against the
/// reputation database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserIdType {
    /// No user identifier is considered.
    #[default]
    NotUsed,

    /// Let the service infer the identifier kind.
    AutoDetect,

    /// Literal username.
    Username,

    /// Email address.
    Email,

    /// Hashed email address.
    HashedEmail,

    /// Phone number.
    PhoneNumber,
}

impl UserIdType {
    /// Returns the wire token for this identifier type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotUsed => "not_used",
            Self::AutoDetect => "auto_detect",
            Self::Username => "username",
            Self::Email => "email",
            Self::HashedEmail => "hashed_email",
            Self::PhoneNumber => "phone_number",
        }
    }
}
