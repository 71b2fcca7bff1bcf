// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device media library: permission prompt, image picker, and reading the
//! picked image back for upload.

use crate::error::ClientError;
use std::future::Future;
use std::path::PathBuf;

/// Answer to a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Result of showing the image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Cancelled,
    /// URI of the picked local resource
    Selected(String),
}

/// Platform media library.
pub trait ImageLibrary: Send + Sync {
    /// Ask the user for media-library access.
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    /// Show the picker and wait for the user to choose or cancel.
    fn launch_picker(&self) -> impl Future<Output = PickerOutcome> + Send;
}

/// Media library backed by a path chosen up front (e.g. on the command line).
///
/// Access is always granted; the picker "selects" the path if it names an
/// existing file and is cancelled otherwise.
#[derive(Debug, Clone, Default)]
pub struct PathImageLibrary {
    path: Option<PathBuf>,
}

impl PathImageLibrary {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ImageLibrary for PathImageLibrary {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn launch_picker(&self) -> PickerOutcome {
        let Some(path) = self.path.as_deref() else {
            return PickerOutcome::Cancelled;
        };

        let absolute = match tokio::fs::canonicalize(path).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Image not found, treating as cancelled");
                return PickerOutcome::Cancelled;
            }
        };

        match url::Url::from_file_path(&absolute) {
            Ok(uri) => PickerOutcome::Selected(uri.to_string()),
            Err(()) => PickerOutcome::Selected(absolute.display().to_string()),
        }
    }
}

/// Resolve a picked resource URI (`file://` URL or plain path) to a path.
pub fn resolve_image_path(uri: &str) -> Result<PathBuf, ClientError> {
    let read_err = |reason: String| ClientError::ImageRead {
        uri: uri.to_string(),
        reason,
    };

    match url::Url::parse(uri) {
        Ok(parsed) if parsed.scheme() == "file" => parsed
            .to_file_path()
            .map_err(|()| read_err("not a local file URL".to_string())),
        // Windows drive letters parse as one-letter schemes
        Ok(parsed) if parsed.scheme().len() == 1 => Ok(PathBuf::from(uri)),
        Ok(parsed) => Err(read_err(format!("unsupported scheme {}", parsed.scheme()))),
        Err(_) => Ok(PathBuf::from(uri)),
    }
}

/// Read the bytes of a picked image.
pub async fn read_image(uri: &str) -> Result<Vec<u8>, ClientError> {
    let path = resolve_image_path(uri)?;
    tokio::fs::read(&path).await.map_err(|e| ClientError::ImageRead {
        uri: uri.to_string(),
        reason: e.to_string(),
    })
}
