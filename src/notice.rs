// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-visible notices and navigation signals.

use std::fmt;

/// A modal notice shown to the user (title + body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn login_successful() -> Self {
        Self::new("Login successful", "Please login to your account")
    }

    /// Login rejected by the backend; falls back to a default text when the
    /// backend sent no message.
    pub fn login_failed(message: Option<&str>) -> Self {
        let message = message.filter(|m| !m.is_empty()).unwrap_or("Unknown error");
        Self::new("Login failed", message)
    }

    pub fn login_missing_fields() -> Self {
        Self::new("Login failed", "Email and password are required")
    }

    pub fn login_error() -> Self {
        Self::new("Error", "An error occurred during login")
    }

    pub fn permission_required() -> Self {
        Self::new(
            "Permission required",
            "Permission to access camera roll is required!",
        )
    }

    pub fn item_created() -> Self {
        Self::new("Success", "Book created successfully!")
    }

    pub fn item_rejected() -> Self {
        Self::new("Error", "Failed to create book")
    }

    pub fn item_error() -> Self {
        Self::new("Error", "An error occurred while creating the book")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Where the UI should navigate after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
}
