// SPDX-License-Identifier: MPL-2.0
//! Attachment handling: reading user-selected files and classifying them by
//! declared media type (judged from the file extension).

pub mod preview;

pub use preview::PreviewImage;

use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Supported attachment extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm"];

    /// All accepted extensions (images + videos) for file dialogs
    pub const ALL_ATTACHMENT_EXTENSIONS: &[&str] = &[
        "png", "jpg", "jpeg", "gif", "webp", "bmp", "mp4", "m4v", "mov", "webm",
    ];
}

/// Broad classification of an attachment's declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Video,
    Other,
}

/// Classifies a path by its extension.
#[must_use]
pub fn attachment_kind(path: &Path) -> AttachmentKind {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return AttachmentKind::Other;
    };
    let ext = ext.to_ascii_lowercase();

    if extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        AttachmentKind::Image
    } else if extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        AttachmentKind::Video
    } else {
        AttachmentKind::Other
    }
}

/// MIME type declared for a path, derived from its extension.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

/// A user-selected attachment, fully read into memory.
///
/// Bytes are stored in an `Arc` so the draft can be cloned cheaply.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub kind: AttachmentKind,
    pub mime: &'static str,
    bytes: Arc<Vec<u8>>,
}

impl Attachment {
    /// Builds an attachment from raw bytes, classifying by `path`.
    #[must_use]
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();

        Self {
            file_name,
            kind: attachment_kind(path),
            mime: mime_for(path),
            bytes: Arc::new(bytes),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Human-readable size for the form's "file selected" line.
    #[must_use]
    pub fn display_size(&self) -> String {
        let size = self.size_bytes() as f64;
        if size >= 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else if size >= 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else {
            format!("{} B", self.size_bytes())
        }
    }
}

/// Reads the file at `path` into an [`Attachment`].
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read.
pub fn load_attachment(path: &Path) -> Result<Attachment> {
    let bytes = std::fs::read(path)?;
    Ok(Attachment::from_bytes(path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn extension_classification_is_case_insensitive() {
        assert_eq!(
            attachment_kind(&PathBuf::from("shot.PNG")),
            AttachmentKind::Image
        );
        assert_eq!(
            attachment_kind(&PathBuf::from("clip.Mp4")),
            AttachmentKind::Video
        );
        assert_eq!(
            attachment_kind(&PathBuf::from("notes.txt")),
            AttachmentKind::Other
        );
        assert_eq!(
            attachment_kind(&PathBuf::from("no_extension")),
            AttachmentKind::Other
        );
    }

    #[test]
    fn mime_matches_extension() {
        assert_eq!(mime_for(&PathBuf::from("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(&PathBuf::from("a.mov")), "video/quicktime");
        assert_eq!(
            mime_for(&PathBuf::from("a.dat")),
            "application/octet-stream"
        );
    }

    #[test]
    fn load_attachment_reads_file_contents() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("shot.png");
        fs::write(&path, b"fake png bytes").expect("failed to write file");

        let attachment = load_attachment(&path).expect("attachment should load");
        assert_eq!(attachment.file_name, "shot.png");
        assert_eq!(attachment.kind, AttachmentKind::Image);
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.bytes(), b"fake png bytes");
    }

    #[test]
    fn load_attachment_missing_file_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope.png");
        assert!(load_attachment(&missing).is_err());
    }

    #[test]
    fn display_size_picks_sensible_units() {
        let path = PathBuf::from("a.bin");
        assert_eq!(Attachment::from_bytes(&path, vec![0; 512]).display_size(), "512 B");
        assert_eq!(
            Attachment::from_bytes(&path, vec![0; 2048]).display_size(),
            "2.0 KB"
        );
        assert_eq!(
            Attachment::from_bytes(&path, vec![0; 3 * 1024 * 1024]).display_size(),
            "3.0 MB"
        );
    }
}
