use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::Destination;
use crate::input::path_display;
use crate::lengths::SortedLengths;
use crate::render::RenderError;
use crate::render::chart::BarChart;
use crate::render::output;
use crate::render::text::write_histogram;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("terminal output error: {0}")]
    Terminal(#[source] io::Error),
    #[error("chart error for {path}: {source}")]
    Chart {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

impl Stage3Error {
    pub fn description(&self) -> &'static str {
        match self {
            Stage3Error::Terminal(_) => "Could not write histogram",
            Stage3Error::Chart {
                source: RenderError::Svg(_),
                ..
            } => "Could not create bar chart",
            Stage3Error::Chart { .. } => "Could not save plot",
        }
    }
}

pub fn run_stage3(lengths: &SortedLengths, destination: &Destination) -> Result<(), Stage3Error> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    run_stage3_to(lengths, destination, &mut lock)
}

/// Same as [`run_stage3`] with terminal output sent to `term`.
pub fn run_stage3_to<W: Write>(
    lengths: &SortedLengths,
    destination: &Destination,
    term: &mut W,
) -> Result<(), Stage3Error> {
    match destination {
        Destination::Terminal => {
            write_histogram(term, lengths).map_err(Stage3Error::Terminal)
        }
        Destination::Chart(path) => {
            info!(bars = lengths.len(), out = %path_display(path), "plotting");
            let chart = BarChart::from_lengths(lengths);
            let svg = chart.to_svg();
            output::save(&svg, path).map_err(|source| Stage3Error::Chart {
                path: path.clone(),
                source,
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_render.rs"]
mod tests;
