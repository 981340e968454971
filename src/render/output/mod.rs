#[cfg(feature = "pdf")]
pub mod pdf;
#[cfg(feature = "raster")]
pub mod raster;
pub mod svg;

use std::path::Path;

use crate::render::RenderError;

/// Raster resolution used for png, jpeg and tiff destinations.
pub const RASTER_DPI: u32 = 96;

/// Encode the SVG `document` according to the destination's extension and write it out.
pub fn save(document: &str, path: &Path) -> crate::render::Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let bytes = match ext {
        "svg" => {
            svg::validate(document)?;
            document.as_bytes().to_vec()
        }
        #[cfg(feature = "raster")]
        "png" => raster::svg_to_png(document, RASTER_DPI)?,
        #[cfg(feature = "raster")]
        "jpg" | "jpeg" => raster::svg_to_jpeg(document, RASTER_DPI)?,
        #[cfg(feature = "raster")]
        "tif" | "tiff" => raster::svg_to_tiff(document, RASTER_DPI)?,
        #[cfg(feature = "pdf")]
        "pdf" => pdf::svg_to_pdf(document)?,
        _ => return Err(RenderError::UnsupportedExtension(path.to_path_buf())),
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(any(feature = "raster", feature = "pdf"))]
pub(crate) fn options_with_system_fonts() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt
}

#[cfg(test)]
#[path = "../../../tests/src_inline/render/output.rs"]
mod tests;
