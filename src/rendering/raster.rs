//! Rasterization: vector document to PNG bytes at the fixed canvas size.

use crate::fonts::FontSet;
use crate::rendering::Bitmap;
use crate::{Canvas, Error, Result};

/// Parse the SVG document and render it into a PNG bitmap.
///
/// Every resolved font is loaded into the font database before parsing so the
/// text-shaping pass sees exactly the families the tree references. System
/// fonts are deliberately not loaded; output must not depend on the host.
pub fn rasterize(svg: &str, fonts: &FontSet, canvas: Canvas) -> Result<Bitmap> {
    let mut options = usvg::Options::default();
    let fontdb = options.fontdb_mut();
    for font in fonts.iter() {
        fontdb.load_font_data(font.data.clone());
    }
    log::debug!("fontdb holds {} face(s)", fontdb.len());

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| Error::Render(format!("invalid vector document: {}", e)))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| Error::Render("failed to allocate pixmap".to_string()))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::Render(format!("png encoding failed: {}", e)))?;
    Ok(Bitmap { width: canvas.width, height: canvas.height, png_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_produces_png_at_canvas_size() {
        let canvas = Canvas { width: 64, height: 32 };
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"32\">\
                   <rect x=\"0\" y=\"0\" width=\"64\" height=\"32\" fill=\"#0C0C0F\"/></svg>";
        let bitmap = rasterize(svg, &FontSet::new(), canvas).unwrap();
        assert_eq!(bitmap.width, 64);
        assert_eq!(bitmap.height, 32);
        // PNG signature
        assert_eq!(&bitmap.png_data[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn malformed_document_is_a_render_error() {
        let canvas = Canvas { width: 10, height: 10 };
        let err = rasterize("<svg", &FontSet::new(), canvas).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
