//! PDF page rasterisation.
//!
//! Renders every page of a PDF document to a PNG image so the pages can be
//! sent through the OCR client one by one. Rendering is backed by pdfium,
//! which is not async-safe: callers must run [`render_pages`] inside
//! `tokio::task::spawn_blocking`.

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::io::Cursor;

use crate::error::{PdfError, PdfResult};

/// Rendering resolution, matching a typical scanner output.
pub const DEFAULT_DPI: f32 = 300.0;

/// PDF user-space units per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Render every page of `bytes` to a PNG image at the given DPI.
///
/// Returns one PNG byte buffer per page, in document order.
pub fn render_pages(bytes: &[u8], dpi: f32) -> PdfResult<Vec<Vec<u8>>> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library().map_err(|e| PdfError::Bind(e.to_string()))?,
    );

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| PdfError::Invalid(e.to_string()))?;

    if document.pages().len() == 0 {
        return Err(PdfError::Empty);
    }

    let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi / POINTS_PER_INCH);

    let mut pages = Vec::new();

    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfError::Render {
                page: index + 1,
                message: e.to_string(),
            })?;

        pages.push(encode_png(&bitmap.as_image())?);
    }

    Ok(pages)
}

/// PNG-encode a rendered page for the OCR request body.
fn encode_png(image: &DynamicImage) -> PdfResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_magic_bytes() {
        let image = DynamicImage::new_rgb8(4, 4);
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_invalid_pdf_bytes() {
        // Requires a working pdfium binding; skip silently where absent.
        let Ok(bindings) = Pdfium::bind_to_system_library() else {
            return;
        };
        let pdfium = Pdfium::new(bindings);
        assert!(pdfium.load_pdf_from_byte_slice(b"not a pdf", None).is_err());
    }
}
