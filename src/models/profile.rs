//! Authenticated user profile.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Profile of the logged-in user, as returned by `GET /auth/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct Profile {
    /// Backend user ID
    pub id: u64,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
}

/// Profile payload as sent by the backend.
///
/// Every field is optional on the wire; a payload without a non-zero `id`
/// does not describe a session and is discarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePayload {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ProfilePayload {
    /// Convert into a [`Profile`] if the identity field is present and non-zero.
    pub fn into_profile(self) -> Option<Profile> {
        let id = self.id.filter(|&id| id != 0)?;
        Some(Profile {
            id,
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_id_is_not_a_profile() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"email": "a@b.c", "name": "Ann"}"#).unwrap();
        assert!(payload.into_profile().is_none());
    }

    #[test]
    fn test_zero_id_is_not_an_identity() {
        let payload: ProfilePayload =
            serde_json::from_str(r#"{"id": 0, "email": "a@b.c"}"#).unwrap();
        assert!(payload.into_profile().is_none());
    }

    #[test]
    fn test_payload_tolerates_missing_optional_fields() {
        let payload: ProfilePayload = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let profile = payload.into_profile().unwrap();
        assert_eq!(profile.id, 7);
        assert_eq!(profile.email, "");
    }
}
