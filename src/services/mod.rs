// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend access and device collaborators.

pub mod backend;
pub mod credentials;
pub mod device;

pub use backend::{BackendClient, NewItem};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY};
pub use device::{ImageLibrary, PathImageLibrary, PermissionStatus, PickerOutcome};
