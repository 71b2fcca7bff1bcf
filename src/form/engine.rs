// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission engine for the item-creation screen.
//!
//! Owns one [`FormState`] for the lifetime of the screen. `submit` takes
//! `&mut self`, so a second submission cannot start while one is in flight.

use std::sync::Arc;

use crate::error::ClientError;
use crate::form::state::{FieldErrors, FormState, SubmissionDraft, TextField};
use crate::notice::Notice;
use crate::services::device::read_image;
use crate::services::{
    BackendClient, CredentialStore, ImageLibrary, NewItem, PermissionStatus, PickerOutcome,
    TOKEN_KEY,
};
use crate::store::CategoryStore;

/// How an image pick ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickImageOutcome {
    Selected(String),
    Cancelled,
    PermissionDenied,
}

impl PickImageOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            PickImageOutcome::PermissionDenied => Some(Notice::permission_required()),
            _ => None,
        }
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// Backend accepted the item; the form was reset.
    Created,
    /// Backend answered `success: false`; the form is untouched.
    Rejected,
    /// Transport, storage or image read failure; the form is untouched.
    Failed,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Created => Some(Notice::item_created()),
            SubmitOutcome::Rejected => Some(Notice::item_rejected()),
            SubmitOutcome::Failed => Some(Notice::item_error()),
        }
    }
}

/// Item-creation form bound to its collaborators.
pub struct SubmissionForm<C: CredentialStore, L: ImageLibrary> {
    backend: BackendClient,
    credentials: Arc<C>,
    library: L,
    categories: CategoryStore,
    state: FormState,
}

impl<C: CredentialStore, L: ImageLibrary> SubmissionForm<C, L> {
    pub fn new(
        backend: BackendClient,
        credentials: Arc<C>,
        library: L,
        categories: CategoryStore,
    ) -> Self {
        Self {
            backend,
            credentials,
            library,
            categories,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn change_field(&mut self, field: TextField, value: impl Into<String>) {
        self.state.change_field(field, value);
    }

    /// Select a category; it must exist in the category store.
    pub fn select_category(&mut self, category_id: i64) -> Result<(), ClientError> {
        if !self.categories.contains(category_id) {
            tracing::warn!(category_id, "Ignoring unknown category");
            return Err(ClientError::UnknownCategory(category_id));
        }
        self.state.select_category(category_id);
        Ok(())
    }

    /// Ask for media-library access, then let the user pick an image.
    ///
    /// Denial and cancellation leave the form unchanged.
    pub async fn pick_image(&mut self) -> PickImageOutcome {
        if self.library.request_permission().await == PermissionStatus::Denied {
            tracing::info!("Media library permission denied");
            return PickImageOutcome::PermissionDenied;
        }

        match self.library.launch_picker().await {
            PickerOutcome::Selected(uri) => {
                self.state.set_image(uri.clone());
                PickImageOutcome::Selected(uri)
            }
            PickerOutcome::Cancelled => PickImageOutcome::Cancelled,
        }
    }

    /// Validate and upload the item.
    ///
    /// Resets the form on success; on any failure the entered values are
    /// kept so the user can correct and resubmit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = match self.state.begin_submit() {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "Submission blocked by validation");
                return SubmitOutcome::Invalid(errors);
            }
        };

        match self.upload(draft).await {
            Ok(()) => {
                tracing::info!("Item created");
                self.state.reset();
                SubmitOutcome::Created
            }
            Err(ClientError::Rejected(message)) => {
                tracing::warn!(message = ?message, "Item rejected by backend");
                SubmitOutcome::Rejected
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating item");
                SubmitOutcome::Failed
            }
        }
    }

    async fn upload(&self, draft: SubmissionDraft) -> Result<(), ClientError> {
        let token = self
            .credentials
            .get(TOKEN_KEY)
            .await?
            .ok_or(ClientError::Unauthenticated)?;

        let image = read_image(&draft.image_uri).await?;

        tracing::info!(
            category_id = draft.category_id,
            image_bytes = image.len(),
            "Uploading item"
        );

        self.backend
            .add_item(
                &token,
                NewItem {
                    name: draft.name,
                    description: draft.description,
                    category_id: draft.category_id,
                    image,
                },
            )
            .await
    }
}
