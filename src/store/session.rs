// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store: the authenticated profile and the logged-in flag.
//!
//! The store does no validation of its own. Keeping `is_logged_in` and
//! `profile` consistent is the job of [`SessionLifecycle`](crate::session::SessionLifecycle),
//! which uses [`SessionStore::establish`] and [`SessionStore::clear`] to
//! change both in one write.

use std::sync::Arc;
use tokio::sync::watch;

use crate::models::Profile;

/// Snapshot of the session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub profile: Option<Profile>,
    pub is_logged_in: bool,
}

/// Process-wide session state, passed explicitly to whoever needs it.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a logged-out store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn profile(&self) -> Option<Profile> {
        self.tx.borrow().profile.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().is_logged_in
    }

    /// Both fields, read together.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn set_profile(&self, profile: Option<Profile>) {
        self.tx.send_modify(|state| state.profile = profile);
    }

    pub fn set_is_logged_in(&self, is_logged_in: bool) {
        self.tx.send_modify(|state| state.is_logged_in = is_logged_in);
    }

    /// Mark the session as logged in with `profile`, in a single write.
    pub fn establish(&self, profile: Profile) {
        self.tx.send_modify(|state| {
            state.is_logged_in = true;
            state.profile = Some(profile);
        });
    }

    /// Reset to the logged-out state, in a single write.
    pub fn clear(&self) {
        self.tx.send_replace(SessionState::default());
    }

    /// Receiver that observes every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }
}
