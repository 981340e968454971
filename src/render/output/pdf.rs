use crate::render::RenderError;
use crate::render::output::options_with_system_fonts;

/// Convert SVG string to single-page PDF bytes.
pub fn svg_to_pdf(svg: &str) -> crate::render::Result<Vec<u8>> {
    let opt = options_with_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))?;

    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), svg2pdf::PageOptions::default())
        .map_err(|e| RenderError::Pdf(e.to_string()))
}
