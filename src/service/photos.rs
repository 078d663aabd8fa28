use crate::error::AdminError;
use chrono::Utc;
use std::path::Path;
use tokio::fs;

/// Write uploaded photo bytes to the uploads directory and return the public
/// path stored in the row (`/uploaded_photos/<file>`). The filename combines
/// a slug of the record name with a millisecond timestamp so re-uploads
/// never clobber each other.
pub async fn save_photo(upload_dir: &Path, name: &str, data: &[u8]) -> Result<String, AdminError> {
    fs::create_dir_all(upload_dir).await?;

    let file_name = format!("{}-{}.jpg", slugify(name), Utc::now().timestamp_millis());
    fs::write(upload_dir.join(&file_name), data).await?;

    Ok(format!("/uploaded_photos/{file_name}"))
}

/// Reduce a record name to a filesystem-safe ASCII slug.
fn slugify(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "photo".to_string()
    } else {
        trimmed.to_string()
    }
}
