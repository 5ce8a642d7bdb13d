// SPDX-License-Identifier: MPL-2.0
//! Inline preview generation for image attachments.
//!
//! Only attachments whose declared media type is an image are decoded; other
//! kinds yield no preview, which clears any previously shown one.

use super::{Attachment, AttachmentKind};
use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded, displayable representation of an image attachment.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl PreviewImage {
    /// Creates a preview from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes `attachment` into a preview when it is an image.
///
/// Non-image attachments return `Ok(None)`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] when the bytes claim to be an
/// image but cannot be decoded.
pub fn generate(attachment: &Attachment) -> Result<Option<PreviewImage>> {
    if attachment.kind != AttachmentKind::Image {
        return Ok(None);
    }

    let img = image_rs::load_from_memory(attachment.bytes())?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(Some(PreviewImage::from_rgba(width, height, pixels)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([40, 90, 220, 255]));
        let mut bytes = Vec::new();
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode test png");
        bytes
    }

    #[test]
    fn image_attachment_produces_preview_with_dimensions() {
        let attachment = Attachment::from_bytes(&PathBuf::from("shot.png"), png_bytes(6, 3));

        let preview = generate(&attachment)
            .expect("decode should succeed")
            .expect("image attachment should yield a preview");
        assert_eq!(preview.width, 6);
        assert_eq!(preview.height, 3);
    }

    #[test]
    fn non_image_attachment_yields_no_preview() {
        let attachment =
            Attachment::from_bytes(&PathBuf::from("clip.mp4"), vec![0, 1, 2, 3]);
        let preview = generate(&attachment).expect("non-image should not error");
        assert!(preview.is_none());
    }

    #[test]
    fn corrupt_image_bytes_error() {
        let attachment =
            Attachment::from_bytes(&PathBuf::from("shot.png"), b"not a png".to_vec());
        assert!(generate(&attachment).is_err());
    }
}
