// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle: login, profile fetch, startup bootstrap and logout.
//!
//! This is the only writer of the [`SessionStore`]. The token itself lives in
//! the [`CredentialStore`] and is re-read for every authenticated call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ClientError;
use crate::models::Profile;
use crate::notice::{Destination, Notice};
use crate::services::{BackendClient, CredentialStore, TOKEN_KEY};
use crate::store::SessionStore;

/// How a login attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token persisted and session established.
    LoggedIn { profile: Profile },
    /// Token persisted but no profile could be loaded. The token is kept, so
    /// the login itself counts as successful.
    ProfileUnavailable,
    /// Backend answered `success: false`.
    Rejected { message: Option<String> },
    /// Network, parse or storage failure. Nothing was changed.
    Failed,
    /// Email or password empty; nothing was sent.
    MissingFields,
    /// Another login from this lifecycle is still running.
    Busy,
}

impl LoginOutcome {
    /// Notice to show the user, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            LoginOutcome::LoggedIn { .. } | LoginOutcome::ProfileUnavailable => {
                Some(Notice::login_successful())
            }
            LoginOutcome::Failed => Some(Notice::login_error()),
            LoginOutcome::Rejected { message } => Some(Notice::login_failed(message.as_deref())),
            LoginOutcome::MissingFields => Some(Notice::login_missing_fields()),
            LoginOutcome::Busy => None,
        }
    }

    /// Where to navigate afterwards, if anywhere.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            LoginOutcome::LoggedIn { .. } => Some(Destination::Home),
            _ => None,
        }
    }
}

/// Clears the loading flag when a login attempt ends, however it ends.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Orchestrates the session: backend, credential store and session store.
pub struct SessionLifecycle<C: CredentialStore> {
    backend: BackendClient,
    credentials: Arc<C>,
    store: SessionStore,
    loading: AtomicBool,
}

impl<C: CredentialStore> SessionLifecycle<C> {
    pub fn new(backend: BackendClient, credentials: Arc<C>, store: SessionStore) -> Self {
        Self {
            backend,
            credentials,
            store,
            loading: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// True while a login is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Log in with email and password.
    ///
    /// On success the token is persisted first, then the profile is fetched
    /// and the session store updated in one write.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::MissingFields;
        }

        if self.loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("Login already in progress");
            return LoginOutcome::Busy;
        }
        let _guard = LoadingGuard(&self.loading);

        tracing::info!("Login started");

        let token = match self.backend.login(email, password).await {
            Ok(token) => token,
            Err(ClientError::Rejected(message)) => {
                tracing::info!("Login rejected by backend");
                return LoginOutcome::Rejected { message };
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                return LoginOutcome::Failed;
            }
        };

        if let Err(e) = self.credentials.set(TOKEN_KEY, &token).await {
            tracing::error!(error = %e, "Failed to persist session token");
            return LoginOutcome::Failed;
        }
        tracing::info!("Session token persisted");

        match self.fetch_profile().await {
            Some(profile) => LoginOutcome::LoggedIn { profile },
            None => {
                tracing::warn!("Logged in but profile unavailable; token kept");
                LoginOutcome::ProfileUnavailable
            }
        }
    }

    /// Fetch the profile for the stored token and, if it has an identity,
    /// establish the session.
    ///
    /// Failures are logged and leave the session store untouched.
    pub async fn fetch_profile(&self) -> Option<Profile> {
        match self.try_fetch_profile().await {
            Ok(Some(profile)) => {
                tracing::info!(user_id = profile.id, "Profile loaded");
                self.store.establish(profile.clone());
                Some(profile)
            }
            Ok(None) => {
                tracing::warn!("Profile response has no identity");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Profile fetch failed");
                None
            }
        }
    }

    async fn try_fetch_profile(&self) -> Result<Option<Profile>, ClientError> {
        let token = self
            .credentials
            .get(TOKEN_KEY)
            .await?
            .ok_or(ClientError::Unauthenticated)?;
        self.backend.get_profile(&token).await
    }

    /// Restore the session at startup from a persisted token.
    ///
    /// Returns whether a session was established.
    pub async fn bootstrap(&self) -> bool {
        match self.credentials.get(TOKEN_KEY).await {
            Ok(Some(_)) => self.fetch_profile().await.is_some(),
            Ok(None) => {
                tracing::debug!("No stored session token");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read session token");
                false
            }
        }
    }

    /// Forget the session. Safe to call repeatedly; makes no network call.
    ///
    /// Callers are expected to have asked the user for confirmation.
    pub async fn logout(&self) -> Destination {
        if let Err(e) = self.credentials.delete(TOKEN_KEY).await {
            tracing::error!(error = %e, "Failed to delete session token");
        }
        self.store.clear();
        tracing::info!("Logged out");
        Destination::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryCredentialStore;

    fn lifecycle() -> SessionLifecycle<MemoryCredentialStore> {
        // Discard port; nothing is sent in these tests.
        SessionLifecycle::new(
            BackendClient::new("http://127.0.0.1:9"),
            Arc::new(MemoryCredentialStore::new()),
            SessionStore::new(),
        )
    }

    #[tokio::test]
    async fn test_empty_fields_fail_fast() {
        let session = lifecycle();
        assert_eq!(session.login("", "secret").await, LoginOutcome::MissingFields);
        assert_eq!(
            session.login("a@b.c", "").await,
            LoginOutcome::MissingFields
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_stays_logged_out() {
        let session = lifecycle();
        assert!(!session.bootstrap().await);
        assert!(!session.store().is_logged_in());
    }

    #[test]
    fn test_outcome_notices() {
        let rejected = LoginOutcome::Rejected {
            message: Some("bad credentials".to_string()),
        };
        assert_eq!(rejected.notice().unwrap().message, "bad credentials");
        assert_eq!(rejected.destination(), None);
        assert_eq!(LoginOutcome::Busy.notice(), None);
    }

    #[test]
    fn test_profile_unavailable_reports_success_without_navigation() {
        let outcome = LoginOutcome::ProfileUnavailable;
        assert_eq!(outcome.notice(), Some(Notice::login_successful()));
        assert_eq!(outcome.destination(), None);
    }
}
