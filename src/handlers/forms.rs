use axum::body::Bytes;
use axum::extract::Multipart;
use std::collections::HashMap;

use crate::error::AdminError;

/// Collected multipart submission: text fields by name, plus the optional
/// `photo` file part. Field names mirror the form inputs (camelCase).
pub struct FormData {
    fields: HashMap<String, String>,
    photo: Option<Bytes>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AdminError> {
        let mut fields = HashMap::new();
        let mut photo = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if name == "photo" {
                let data = field.bytes().await?;
                // An empty file input still submits a zero-byte part.
                if !data.is_empty() {
                    photo = Some(data);
                }
            } else {
                fields.insert(name, field.text().await?);
            }
        }

        Ok(Self { fields, photo })
    }

    pub fn require(&self, name: &'static str) -> Result<&str, AdminError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .ok_or(AdminError::MissingField(name))
    }

    pub fn require_i64(&self, name: &'static str) -> Result<i64, AdminError> {
        self.require(name)?
            .trim()
            .parse()
            .map_err(|_| AdminError::InvalidField(name))
    }

    pub fn opt(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Unparsable values count as absent, matching the original forms.
    pub fn opt_i64(&self, name: &str) -> Option<i64> {
        self.opt(name).and_then(|v| v.trim().parse().ok())
    }

    pub fn photo(&self) -> Option<&[u8]> {
        self.photo.as_deref()
    }
}

/// Stat fields on buildings and units must not go below zero.
pub fn ensure_non_negative(values: &[(&'static str, i64)]) -> Result<(), AdminError> {
    for (name, value) in values {
        if *value < 0 {
            return Err(AdminError::NegativeField(name));
        }
    }
    Ok(())
}
