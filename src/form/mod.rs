// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Item submission form.
//!
//! [`FormState`] is the synchronous state machine (values, submit flag,
//! errors); [`SubmissionForm`] drives it through the async steps: image
//! picking and the authenticated upload.

pub mod engine;
pub mod state;

pub use engine::{PickImageOutcome, SubmissionForm, SubmitOutcome};
pub use state::{validate, Field, FieldErrors, FormState, SubmissionDraft, TextField, NAME_MIN_LENGTH};
