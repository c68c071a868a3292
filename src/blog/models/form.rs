//! # Add-Post Form Model
//!
//! Draft title and body for a new post. A submission is only accepted when
//! both fields are non-empty; a rejected submission leaves the draft alone.

use super::post::Post;

/// Which field of the form is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Body,
}

/// Draft state of the add-post form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    title: String,
    body: String,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Body => &self.body,
        }
    }

    pub fn set_field(&mut self, field: FormField, text: impl Into<String>) {
        match field {
            FormField::Title => self.title = text.into(),
            FormField::Body => self.body = text.into(),
        }
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        self.field_mut(field).push(ch);
    }

    /// Remove the last character of `field`. Returns false if it was already empty.
    pub fn pop_char(&mut self, field: FormField) -> bool {
        self.field_mut(field).pop().is_some()
    }

    /// Take the draft as a post if both fields are filled, clearing the form
    ///
    /// Returns `None` and keeps the draft when either field is empty.
    pub fn submit(&mut self) -> Option<Post> {
        if self.title.is_empty() || self.body.is_empty() {
            return None;
        }
        let title = std::mem::take(&mut self.title);
        let body = std::mem::take(&mut self.body);
        Some(Post::new(title, body))
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Body => &mut self.body,
        }
    }
}
