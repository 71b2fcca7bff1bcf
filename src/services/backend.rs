// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog backend API client.
//!
//! Handles:
//! - Credential login (`POST /auth/login`)
//! - Profile fetch (`GET /auth/profile`)
//! - Item creation with an image upload (`POST /books/add`)
//!
//! The client never holds a token itself; callers pass the one they just
//! read from the credential store.

use crate::config::Config;
use crate::error::ClientError;
use crate::models::{AddItemResponse, LoginResponse, Profile, ProfileResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Filename the image part is uploaded under.
pub const IMAGE_FILE_NAME: &str = "image.jpg";

/// MIME type the image part is uploaded as.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Catalog backend client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

/// Login request body.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// A validated item ready to be uploaded.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    /// Raw image bytes, sent as the `Image` part
    pub image: Vec<u8>,
}

impl BackendClient {
    /// Create a client for the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a session token.
    ///
    /// A `success: false` answer becomes [`ClientError::Rejected`] carrying the
    /// backend's message.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let url = format!("{}/auth/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Login request failed: {}", e)))?;

        let body: LoginResponse = Self::parse_body(response).await?;
        if !body.success {
            return Err(ClientError::Rejected(body.message));
        }

        body.token.filter(|t| !t.is_empty()).ok_or_else(|| {
            ClientError::MalformedResponse("login succeeded without a token".to_string())
        })
    }

    /// Fetch the profile for `token`.
    ///
    /// Returns `Ok(None)` when the backend answers `success: true` but the
    /// payload has no identity field.
    pub async fn get_profile(&self, token: &str) -> Result<Option<Profile>, ClientError> {
        let url = format!("{}/auth/profile", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Profile request failed: {}", e)))?;

        let body: ProfileResponse = Self::parse_body(response).await?;
        if !body.success {
            return Err(ClientError::Rejected(body.message));
        }

        Ok(body.data.and_then(|payload| payload.into_profile()))
    }

    /// Upload a new item as a multipart form.
    pub async fn add_item(&self, token: &str, item: NewItem) -> Result<(), ClientError> {
        let url = format!("{}/books/add", self.base_url);

        let image = reqwest::multipart::Part::bytes(item.image)
            .file_name(IMAGE_FILE_NAME)
            .mime_str(IMAGE_MIME_TYPE)
            .map_err(|e| ClientError::Internal(anyhow::anyhow!("Invalid image MIME type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .text("Name", item.name)
            .text("Description", item.description)
            .text("category_id", item.category_id.to_string())
            .part("Image", image);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Upload request failed: {}", e)))?;

        let body: AddItemResponse = Self::parse_body(response).await?;
        if !body.success {
            return Err(ClientError::Rejected(body.message));
        }
        Ok(())
    }

    /// Parse a JSON envelope, whatever the status code.
    async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Backend returned non-success status");
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("HTTP {}: {}", status, e)))
    }
}
