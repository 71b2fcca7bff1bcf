// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! None of these reach the user directly: the session and form operations
//! catch them at their boundary and turn them into a [`Notice`](crate::notice::Notice).

/// Application error type for backend, storage and device failures.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Backend answered with `success: false`.
    #[error("Rejected by backend: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    #[error("No session token stored")]
    Unauthenticated,

    #[error("Credential store error: {0}")]
    CredentialStore(String),

    #[error("Media library permission denied")]
    PermissionDenied,

    #[error("Failed to read image {uri}: {reason}")]
    ImageRead { uri: String, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(i64),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// Message the backend attached to a rejection, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected(Some(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
