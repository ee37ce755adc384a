use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::role::Role;

/// Storage key for the durable identity record (the session cookie).
pub const SESSION_COOKIE_NAME: &str = "bms_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }
}

/// The authenticated user record held for the duration of a session.
///
/// Exactly one identity is current at a time: created on successful login,
/// destroyed on logout. Owned by the session layer; everything else reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub society: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub flat: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub status: AccountStatus,
    pub last_login: Option<Timestamp>,
}

impl Identity {
    /// The society/building subtree this identity is restricted to.
    pub fn scope(&self) -> ScopeRef<'_> {
        ScopeRef {
            society: self.society.as_deref(),
            building: self.building.as_deref(),
        }
    }
}

/// Borrowed view of an identity's scope, consumed by the record filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeRef<'a> {
    pub society: Option<&'a str>,
    pub building: Option<&'a str>,
}

pub fn encode_session(identity: &Identity) -> Result<String> {
    let json = serde_json::to_string(identity)?;
    use base64::Engine;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn decode_session(encoded: &str) -> Result<Identity> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| Error::load("invalid session encoding"))?;
    let json = String::from_utf8(bytes).map_err(|_| Error::load("invalid UTF-8 in session"))?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "secretary@innovativelabs.com".into(),
            name: "Sarah Johnson".into(),
            role: Role::Secretary,
            society: Some("Sunset Gardens".into()),
            building: Some("Tower A".into()),
            floor: None,
            flat: None,
            phone: Some("+1-234-567-8902".into()),
            avatar: None,
            status: AccountStatus::Active,
            last_login: Some(Timestamp::UNIX_EPOCH),
        }
    }

    #[test]
    fn session_round_trips() {
        let identity = identity();
        let encoded = encode_session(&identity).unwrap();
        assert_eq!(decode_session(&encoded).unwrap(), identity);
    }

    #[test]
    fn garbage_session_is_rejected() {
        assert!(decode_session("not base64 at all!").is_err());
        assert!(decode_session("aGVsbG8").is_err());
    }

    #[test]
    fn scope_borrows_identity_fields() {
        let identity = identity();
        let scope = identity.scope();
        assert_eq!(scope.society, Some("Sunset Gardens"));
        assert_eq!(scope.building, Some("Tower A"));
    }
}
