//! SVG to PNG rasterization.

use crate::error::CardError;
use usvg::{fontdb, TreeParsing, TreeTextToPath};

/// Rasterize an SVG document to PNG bytes at its intrinsic size.
pub fn render_png(svg: &str) -> Result<Vec<u8>, CardError> {
    let options = usvg::Options::default();
    let mut tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| CardError::Render(e.to_string()))?;

    // resvg cannot render text nodes as-is; convert them to paths first.
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    tree.convert_text(&fontdb);

    let size = tree.size.to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| CardError::Render("zero-sized pixmap".to_string()))?;
    let rtree = resvg::Tree::from_usvg(&tree);
    rtree.render(tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| CardError::Render(e.to_string()))
}
