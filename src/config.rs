use std::path::{Path, PathBuf};

use crate::input::Compression;
use crate::input::detect::{SeqFormat, detect_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Png,
    Pdf,
    Svg,
    Cli,
}

impl OutputMode {
    /// File extension of the chart this mode writes; `None` for terminal output.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OutputMode::Png => Some("png"),
            OutputMode::Pdf => Some("pdf"),
            OutputMode::Svg => Some("svg"),
            OutputMode::Cli => None,
        }
    }
}

/// What the driver does after a stage reports an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the error and keep going with whatever data is available.
    #[default]
    Continue,
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Terminal,
    Chart(PathBuf),
}

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub compression: Compression,
    pub format: Option<SeqFormat>,
    pub destination: Destination,
    pub on_error: ErrorPolicy,
}

impl RunConfig {
    pub fn new(
        input: PathBuf,
        mode: OutputMode,
        out: Option<PathBuf>,
        on_error: ErrorPolicy,
    ) -> Self {
        let destination = resolve_destination(&input, mode, out);
        Self {
            compression: Compression::from_path(&input),
            format: detect_format(&input),
            input,
            destination,
            on_error,
        }
    }
}

/// Chart output defaults to the input path with the mode's extension appended.
pub fn resolve_destination(input: &Path, mode: OutputMode, out: Option<PathBuf>) -> Destination {
    match mode.extension() {
        None => Destination::Terminal,
        Some(ext) => Destination::Chart(out.unwrap_or_else(|| {
            let mut name = input.as_os_str().to_os_string();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        })),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
