use crate::render::RenderError;

/// Parse `svg` without rendering it, so a malformed document is reported
/// before anything is written.
pub fn validate(svg: &str) -> crate::render::Result<()> {
    usvg::Tree::from_str(svg, &usvg::Options::default())
        .map(|_| ())
        .map_err(|e| RenderError::Svg(e.to_string()))
}
