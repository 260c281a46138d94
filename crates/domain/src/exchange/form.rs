//! Multipart form payloads

use serde::{Deserialize, Serialize};

/// A single field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormField {
    /// Plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// File read from disk when the request is built.
    File {
        /// Field name.
        name: String,
        /// Path to the file.
        path: String,
    },
    /// In-memory file part.
    Bytes {
        /// Field name.
        name: String,
        /// File name reported to the server.
        file_name: String,
        /// Raw content.
        content: Vec<u8>,
        /// MIME type; guessed from `file_name` when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime: Option<String>,
    },
}

impl FormField {
    /// Creates a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a file field backed by a path on disk.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates an in-memory file field.
    #[must_use]
    pub fn bytes(name: impl Into<String>, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self::Bytes {
            name: name.into(),
            file_name: file_name.into(),
            content,
            mime: None,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } | Self::Bytes { name, .. } => name,
        }
    }
}

/// Multipart form body. Field order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormPayload {
    /// Form fields in insertion order.
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormPayload {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field and returns the form.
    #[must_use]
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a text field and returns the form.
    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_field(FormField::text(name, value))
    }

    /// Returns true if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
