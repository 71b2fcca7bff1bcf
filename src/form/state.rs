// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form state and validation rules for a new item.
//!
//! Errors are computed by [`validate`] at submit time and only become
//! visible once the first submit has been attempted.

use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Minimum number of characters in an item name.
pub const NAME_MIN_LENGTH: usize = 3;

/// Form inputs that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Category,
    Image,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "description" => Some(Field::Description),
            "category_id" => Some(Field::Category),
            "image" => Some(Field::Image),
            _ => None,
        }
    }
}

/// Free-text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Field::Name,
            TextField::Description => Field::Description,
        }
    }
}

/// Per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// A form that passed validation, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub image_uri: String,
}

/// Values entered on the item-creation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct FormState {
    #[validate(custom(function = "validate_name"))]
    name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    description: String,
    #[validate(required(message = "Please select a category"))]
    category_id: Option<i64>,
    #[validate(required(message = "Please select an image"))]
    image: Option<String>,
    has_submitted: bool,
    errors: FieldErrors,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Name is required")));
    }
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Name must be at least 3 characters long")));
    }
    Ok(())
}

/// Compute the errors for `state` from scratch.
pub fn validate(state: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let Err(report) = Validate::validate(state) else {
        return errors;
    };

    for (name, field_errors) in report.field_errors() {
        let Some(field) = Field::from_name(&name) else {
            continue;
        };
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            errors.0.insert(field, message);
        }
    }
    errors
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    /// Update a text input. After the first submit, its error is cleared.
    pub fn change_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Name => self.name = value,
            TextField::Description => self.description = value,
        }
        self.clear_error(field.into());
    }

    pub fn select_category(&mut self, category_id: i64) {
        self.category_id = Some(category_id);
        self.clear_error(Field::Category);
    }

    pub fn set_image(&mut self, uri: impl Into<String>) {
        self.image = Some(uri.into());
        self.clear_error(Field::Image);
    }

    fn clear_error(&mut self, field: Field) {
        if self.has_submitted {
            self.errors.remove(field);
        }
    }

    /// Errors the UI should render: none before the first submit.
    pub fn visible_errors(&self) -> FieldErrors {
        if self.has_submitted {
            self.errors.clone()
        } else {
            FieldErrors::default()
        }
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.has_submitted {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Inline "Please select a category" condition.
    pub fn category_missing(&self) -> bool {
        self.has_submitted && self.category_id.is_none()
    }

    /// Inline "Please select an image" condition.
    pub fn image_missing(&self) -> bool {
        self.has_submitted && self.image.is_none()
    }

    /// Mark the form submitted and validate it.
    ///
    /// Returns the draft to upload only when every rule passes.
    pub fn begin_submit(&mut self) -> Result<SubmissionDraft, FieldErrors> {
        self.has_submitted = true;
        self.errors = validate(self);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        match (self.category_id, self.image.as_ref()) {
            (Some(category_id), Some(image_uri)) => Ok(SubmissionDraft {
                name: self.name.clone(),
                description: self.description.clone(),
                category_id,
                image_uri: image_uri.clone(),
            }),
            // Unreachable while the `required` rules hold; kept as a guard.
            _ => Err(self.errors.clone()),
        }
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> FormState {
        let mut form = FormState::new();
        form.change_field(TextField::Name, "Dune");
        form.change_field(TextField::Description, "Classic sci-fi");
        form.select_category(3);
        form.set_image("file:///tmp/dune.jpg");
        form
    }

    #[test]
    fn test_no_errors_visible_before_submit() {
        let form = FormState::new();
        assert!(form.visible_errors().is_empty());
        assert!(!form.category_missing());
        assert!(!form.image_missing());
        // The rules still fail; they are just not shown.
        assert_eq!(validate(&form).len(), 4);
    }

    #[test]
    fn test_empty_form_errors() {
        let errors = validate(&FormState::new());
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Description), Some("Description is required"));
        assert_eq!(errors.get(Field::Category), Some("Please select a category"));
        assert_eq!(errors.get(Field::Image), Some("Please select an image"));
    }

    #[test]
    fn test_short_name_error() {
        let mut form = complete_form();
        form.change_field(TextField::Name, "Go");
        let errors = validate(&form);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 3 characters long")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut form = complete_form();
        form.change_field(TextField::Name, "Ñoñ");
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_begin_submit_valid_form() {
        let mut form = complete_form();
        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.name, "Dune");
        assert_eq!(draft.category_id, 3);
        assert_eq!(draft.image_uri, "file:///tmp/dune.jpg");
        assert!(form.has_submitted());
    }

    #[test]
    fn test_begin_submit_invalid_form_reveals_errors() {
        let mut form = FormState::new();
        form.change_field(TextField::Name, "Go");
        let errors = form.begin_submit().unwrap_err();

        assert!(form.has_submitted());
        assert_eq!(form.visible_errors(), errors);
        assert!(form.category_missing());
        assert!(form.image_missing());
    }

    #[test]
    fn test_change_clears_only_that_field_after_submit() {
        let mut form = FormState::new();
        let _ = form.begin_submit();

        form.change_field(TextField::Name, "D");
        assert_eq!(form.visible_error(Field::Name), None);
        assert!(form.visible_error(Field::Description).is_some());

        form.select_category(1);
        assert_eq!(form.visible_error(Field::Category), None);
        form.set_image("a.jpg");
        assert_eq!(form.visible_error(Field::Image), None);

        // Errors are not recomputed until the next submit.
        assert!(!form.visible_errors().contains(Field::Name));
        let errors = form.begin_submit().unwrap_err();
        assert!(errors.contains(Field::Name));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = complete_form();
        form.begin_submit().unwrap();
        form.reset();
        assert_eq!(form, FormState::new());
    }
}
