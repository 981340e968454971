use thiserror::Error;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::input::{InputError, open_reader, path_display};
use crate::lengths::{ExtractError, ReadLengths};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),
}

impl Stage1Error {
    /// Short, user-facing description paired with the error detail in logs.
    pub fn description(&self) -> &'static str {
        match self {
            Stage1Error::Input(InputError::Open { .. }) => "Could not open file",
            Stage1Error::Input(InputError::Decompress { .. }) => "Could not create GZip reader",
            Stage1Error::Input(InputError::GzipNotEnabled(_)) => "Could not create GZip reader",
            Stage1Error::Extract(_) => "Error scanning text",
        }
    }

    /// Whatever lengths survived the failure; empty if the input never opened.
    pub fn into_partial(self) -> ReadLengths {
        match self {
            Stage1Error::Input(_) => ReadLengths::new(),
            Stage1Error::Extract(err) => err.into_partial(),
        }
    }
}

/// Opens the input and runs the extractor selected by its suffix. An
/// unrecognised suffix yields an empty length sequence.
pub fn run_stage1(cfg: &RunConfig) -> Result<ReadLengths, Stage1Error> {
    let mut reader = open_reader(&cfg.input)?;

    let Some(format) = cfg.format else {
        warn!(
            input = %path_display(&cfg.input),
            "unrecognised sequence file suffix, no reads extracted"
        );
        return Ok(ReadLengths::new());
    };

    info!(
        format = %format,
        compression = %cfg.compression,
        "computing lengths of reads"
    );
    let lengths = format.extractor().extract(&mut reader)?;
    Ok(lengths)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;
