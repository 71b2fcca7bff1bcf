// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use catalog_client::config::Config;
use catalog_client::models::Category;
use catalog_client::services::{ImageLibrary, MemoryCredentialStore, PermissionStatus, PickerOutcome};
use catalog_client::store::CategoryStore;
use catalog_client::AppState;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;
use wiremock::MockServer;

/// Bytes written as the test cover image (ASCII so multipart bodies stay matchable).
#[allow(dead_code)]
pub const IMAGE_BYTES: &[u8] = b"fake-jpeg-bytes";

/// Create an app wired to a mock backend, with categories 1 ("Fiction") and 3 ("Sci-Fi").
#[allow(dead_code)]
pub fn create_test_app(server: &MockServer) -> AppState<MemoryCredentialStore> {
    let categories = CategoryStore::new(vec![
        Category {
            id: 1,
            name: "Fiction".to_string(),
        },
        Category {
            id: 3,
            name: "Sci-Fi".to_string(),
        },
    ]);
    AppState::new(
        &Config::with_api_url(&server.uri()),
        MemoryCredentialStore::new(),
        categories,
    )
}

/// Write a cover image into `dir` and return its `file://` URI.
#[allow(dead_code)]
pub fn write_test_image(dir: &TempDir) -> String {
    let path = dir.path().join("cover.jpg");
    std::fs::write(&path, IMAGE_BYTES).expect("Failed to write test image");
    url::Url::from_file_path(&path)
        .expect("Temp path should be absolute")
        .to_string()
}

/// Media library with a fixed permission answer and a script of picker
/// results; the last result repeats once the script runs out.
#[allow(dead_code)]
pub struct ScriptedLibrary {
    permission: PermissionStatus,
    outcomes: Mutex<VecDeque<PickerOutcome>>,
    picker_calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedLibrary {
    pub fn selecting(uri: &str) -> Self {
        Self::scripted(vec![PickerOutcome::Selected(uri.to_string())])
    }

    pub fn cancelling() -> Self {
        Self::scripted(vec![PickerOutcome::Cancelled])
    }

    pub fn denying() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            ..Self::cancelling()
        }
    }

    pub fn scripted(outcomes: Vec<PickerOutcome>) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            outcomes: Mutex::new(outcomes.into()),
            picker_calls: AtomicUsize::new(0),
        }
    }

    pub fn picker_calls(&self) -> usize {
        self.picker_calls.load(Ordering::SeqCst)
    }
}

impl ImageLibrary for ScriptedLibrary {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn launch_picker(&self) -> PickerOutcome {
        self.picker_calls.fetch_add(1, Ordering::SeqCst);
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes.front().cloned().unwrap_or(PickerOutcome::Cancelled)
        }
    }
}

impl ImageLibrary for &ScriptedLibrary {
    async fn request_permission(&self) -> PermissionStatus {
        (**self).request_permission().await
    }

    async fn launch_picker(&self) -> PickerOutcome {
        (**self).launch_picker().await
    }
}
