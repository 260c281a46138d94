//! Multipart body builder.
//!
//! Converts the domain `FormPayload` into a `reqwest` multipart form.
//! The boundary and the resulting `Content-Type` come from `reqwest`.

use std::path::Path;

use reqpanel_domain::{FormField, FormPayload};
use reqwest::multipart::{Form, Part};

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// Failed to read a file field.
    #[error("Failed to read file: {message}")]
    FileReadError {
        /// Path and I/O error.
        message: String,
    },

    /// A field carried an unusable MIME type.
    #[error("Invalid MIME type for field {field}: {message}")]
    InvalidMime {
        /// Field name.
        field: String,
        /// Parser message.
        message: String,
    },
}

/// Build a multipart form from form data fields, preserving field order.
///
/// # Errors
///
/// Returns an error if a file field cannot be read or a MIME type is invalid.
pub async fn build_multipart_form(payload: &FormPayload) -> Result<Form, BodyBuildError> {
    let mut form = Form::new();

    for field in &payload.fields {
        let name = field.name().to_string();
        form = match field {
            FormField::Text { value, .. } => form.text(name, value.clone()),
            FormField::File { path, .. } => {
                let file_path = Path::new(path);
                let content = tokio::fs::read(file_path).await.map_err(|e| {
                    BodyBuildError::FileReadError {
                        message: format!("{}: {}", file_path.display(), e),
                    }
                })?;

                let file_name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("file")
                    .to_string();

                let part = file_part(&name, content, file_name, None)?;
                form.part(name, part)
            }
            FormField::Bytes {
                file_name,
                content,
                mime,
                ..
            } => {
                let part = file_part(&name, content.clone(), file_name.clone(), mime.as_deref())?;
                form.part(name, part)
            }
        };
    }

    Ok(form)
}

fn file_part(
    field: &str,
    content: Vec<u8>,
    file_name: String,
    mime: Option<&str>,
) -> Result<Part, BodyBuildError> {
    let mime_type = mime.map_or_else(
        || {
            mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .to_string()
        },
        str::to_string,
    );

    Part::bytes(content)
        .file_name(file_name)
        .mime_str(&mime_type)
        .map_err(|e| BodyBuildError::InvalidMime {
            field: field.to_string(),
            message: e.to_string(),
        })
}
