// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Catalog client: sign in to the catalog backend and submit new items
//!
//! This crate provides the session handling (login, profile, logout) and
//! the item submission form used by the catalog app.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notice;
pub mod services;
pub mod session;
pub mod store;

use std::sync::Arc;

use config::Config;
use form::SubmissionForm;
use services::{BackendClient, CredentialStore, ImageLibrary};
use session::SessionLifecycle;
use store::{CategoryStore, SessionStore};

/// Shared application state, built once at the composition root.
pub struct AppState<C: CredentialStore> {
    pub backend: BackendClient,
    pub credentials: Arc<C>,
    pub session: SessionStore,
    pub categories: CategoryStore,
}

impl<C: CredentialStore> AppState<C> {
    pub fn new(config: &Config, credentials: C, categories: CategoryStore) -> Self {
        Self {
            backend: BackendClient::from_config(config),
            credentials: Arc::new(credentials),
            session: SessionStore::new(),
            categories,
        }
    }

    /// Session lifecycle writing to this state's session store.
    pub fn session_lifecycle(&self) -> SessionLifecycle<C> {
        SessionLifecycle::new(
            self.backend.clone(),
            self.credentials.clone(),
            self.session.clone(),
        )
    }

    /// A fresh item-creation form, as when the screen mounts.
    pub fn submission_form<L: ImageLibrary>(&self, library: L) -> SubmissionForm<C, L> {
        SubmissionForm::new(
            self.backend.clone(),
            self.credentials.clone(),
            library,
            self.categories.clone(),
        )
    }
}
