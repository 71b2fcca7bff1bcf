// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response envelopes for the catalog backend.
//!
//! The backend reports failures in the body (`success: false`), often with a
//! non-2xx status, so bodies are parsed regardless of status code.

use serde::Deserialize;

use super::profile::ProfilePayload;

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /auth/profile` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ProfilePayload>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /books/add` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejection_without_token() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "bad credentials"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert_eq!(resp.message.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn test_success_flag_is_required() {
        assert!(serde_json::from_str::<AddItemResponse>(r#"{"ok": true}"#).is_err());
    }
}
