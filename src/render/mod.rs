pub mod chart;
pub mod output;
pub mod text;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported chart extension: {0}")]
    UnsupportedExtension(PathBuf),
    #[error("svg parse error: {0}")]
    Svg(String),
    #[cfg(feature = "raster")]
    #[error("raster encoding error: {0}")]
    Raster(String),
    #[cfg(feature = "pdf")]
    #[error("PDF conversion error: {0}")]
    Pdf(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
