#[cfg(test)]
#[path = "attachment_test.rs"]
mod tests;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

pub const MAX_ATTACHMENTS: usize = 5;

/// Mime type for a file name, only for the image formats the backend
/// analyzes.
pub fn image_mime_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit('.').next()?.to_lowercase();
    if extension == file_name.to_lowercase() {
        return None;
    }

    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => return None,
    };

    return Some(mime);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAttachment {
    pub id: String,
    pub preview_source: String,
    pub file: AttachmentFile,
}

impl PendingAttachment {
    pub fn new(file: AttachmentFile) -> PendingAttachment {
        let preview_source = format!(
            "data:{};base64,{}",
            file.mime,
            STANDARD.encode(&file.bytes)
        );

        return PendingAttachment {
            id: PendingAttachment::create_id(),
            preview_source,
            file,
        };
    }

    fn create_id() -> String {
        return Uuid::new_v4()
            .to_string()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();
    }
}

/// What the renderer needs to list a staged attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentPreview {
    pub id: String,
    pub name: String,
    pub size: usize,
}

/// Attachments staged for the next analyze-photo request.
#[derive(Clone, Debug, Default)]
pub struct Attachments {
    items: Vec<PendingAttachment>,
}

impl Attachments {
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    /// Whether a batch of `count` more files still fits.
    pub fn can_accept(&self, count: usize) -> bool {
        return self.items.len() + count <= MAX_ATTACHMENTS;
    }

    pub fn extend(&mut self, batch: Vec<PendingAttachment>) {
        for attachment in batch {
            if self.items.len() >= MAX_ATTACHMENTS {
                break;
            }
            self.items.push(attachment);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|attachment| return attachment.id != id);
        return self.items.len() != before;
    }

    pub fn clear(&mut self) {
        self.items = vec![];
    }

    pub fn take(&mut self) -> Vec<PendingAttachment> {
        return std::mem::take(&mut self.items);
    }

    pub fn previews(&self) -> Vec<AttachmentPreview> {
        return self
            .items
            .iter()
            .map(|attachment| {
                return AttachmentPreview {
                    id: attachment.id.to_string(),
                    name: attachment.file.name.to_string(),
                    size: attachment.file.bytes.len(),
                };
            })
            .collect();
    }
}
