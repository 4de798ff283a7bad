#[cfg(test)]
#[path = "attachments_test.rs"]
mod tests;

use std::path::PathBuf;

use futures::future;
use tokio::fs;

use crate::domain::models::image_mime_type;
use crate::domain::models::AttachmentFile;
use crate::domain::models::PendingAttachment;

async fn load_file(path: PathBuf) -> Option<PendingAttachment> {
    let name = path.file_name()?.to_string_lossy().to_string();
    let mime = match image_mime_type(&name) {
        Some(mime) => mime,
        None => {
            tracing::warn!(file = %path.display(), "Skipping attachment that is not an image");
            return None;
        }
    };

    match fs::read(&path).await {
        Ok(bytes) => {
            return Some(PendingAttachment::new(AttachmentFile {
                name,
                mime: mime.to_string(),
                bytes,
            }));
        }
        Err(err) => {
            tracing::warn!(file = %path.display(), error = ?err, "Failed to read attachment");
            return None;
        }
    }
}

/// Reads a batch of files concurrently. Resolves once every file has been
/// read or skipped, keeping the order of `paths`.
pub async fn load_batch(paths: &[PathBuf]) -> Vec<PendingAttachment> {
    let reads = paths.iter().map(|path| return load_file(path.clone()));

    return future::join_all(reads)
        .await
        .into_iter()
        .flatten()
        .collect();
}
