// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod category;
pub mod profile;
pub mod responses;

pub use category::Category;
pub use profile::{Profile, ProfilePayload};
pub use responses::{AddItemResponse, LoginResponse, ProfileResponse};
