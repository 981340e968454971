use std::io::Cursor;

use crate::render::RenderError;
use crate::render::output::options_with_system_fonts;

/// JPEG quality used for `.jpg`/`.jpeg` charts.
pub const JPEG_QUALITY: u8 = 90;

/// Rasterise an SVG document onto a white pixmap at the given DPI.
pub fn rasterize(svg: &str, dpi: u32) -> crate::render::Result<tiny_skia::Pixmap> {
    let opt = options_with_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))?;

    let scale = dpi as f32 / 72.0;
    let size = tree.size();
    let w = (size.width() * scale).ceil() as u32;
    let h = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| RenderError::Raster("failed to create pixmap".into()))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    Ok(pixmap)
}

pub fn svg_to_png(svg: &str, dpi: u32) -> crate::render::Result<Vec<u8>> {
    rasterize(svg, dpi)?
        .encode_png()
        .map_err(|e| RenderError::Raster(e.to_string()))
}

pub fn svg_to_jpeg(svg: &str, dpi: u32) -> crate::render::Result<Vec<u8>> {
    let rgb = to_rgb(rasterize(svg, dpi)?)?;
    let mut bytes = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| RenderError::Raster(e.to_string()))?;
    Ok(bytes)
}

pub fn svg_to_tiff(svg: &str, dpi: u32) -> crate::render::Result<Vec<u8>> {
    let rgb = to_rgb(rasterize(svg, dpi)?)?;
    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, image::ImageFormat::Tiff)
        .map_err(|e| RenderError::Raster(e.to_string()))?;
    Ok(out.into_inner())
}

// The background is filled opaque, so premultiplied RGBA equals straight RGBA.
fn to_rgb(pixmap: tiny_skia::Pixmap) -> crate::render::Result<image::RgbImage> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let rgba = image::RgbaImage::from_raw(w, h, pixmap.take())
        .ok_or_else(|| RenderError::Raster("pixmap size mismatch".into()))?;
    Ok(image::DynamicImage::ImageRgba8(rgba).to_rgb8())
}
