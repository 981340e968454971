use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::config::{ErrorPolicy, OutputMode, RunConfig};

mod run;

#[derive(Parser, Debug)]
#[command(
    name = "kira-readlen",
    about = "Read length distribution of a FASTA/FASTQ file",
    disable_version_flag = true
)]
pub struct Cli {
    /// Input file in FASTA or FASTQ format, optionally gzip-compressed
    #[arg(long = "in", visible_alias = "input", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output type: png, pdf or svg chart, or a text histogram (cli)
    #[arg(long = "type", value_enum, default_value = "png")]
    plot_type: PlotType,

    /// Chart output path; format follows the extension (png, jpg/jpeg, tif/tiff, pdf, svg). Defaults to the input path with the type appended
    #[arg(long, visible_alias = "plot", value_name = "PATH")]
    out: Option<PathBuf>,

    /// Whether a failed step stops the run or is logged and skipped
    #[arg(long, value_enum, default_value = "continue")]
    on_error: OnErrorArg,

    /// Print the version and exit
    #[arg(long)]
    version: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotType {
    Png,
    Pdf,
    Svg,
    Cli,
}

impl From<PlotType> for OutputMode {
    fn from(value: PlotType) -> Self {
        match value {
            PlotType::Png => OutputMode::Png,
            PlotType::Pdf => OutputMode::Pdf,
            PlotType::Svg => OutputMode::Svg,
            PlotType::Cli => OutputMode::Cli,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnErrorArg {
    Continue,
    Abort,
}

impl From<OnErrorArg> for ErrorPolicy {
    fn from(value: OnErrorArg) -> Self {
        match value {
            OnErrorArg::Continue => ErrorPolicy::Continue,
            OnErrorArg::Abort => ErrorPolicy::Abort,
        }
    }
}

impl Cli {
    /// Resolved run configuration, or `None` when no input was given.
    pub fn config(&self) -> Option<RunConfig> {
        let input = self.input.clone()?;
        Some(RunConfig::new(
            input,
            self.plot_type.into(),
            self.out.clone(),
            self.on_error.into(),
        ))
    }

    pub fn dispatch(self) -> anyhow::Result<ExitCode> {
        if self.version {
            println!("kira-readlen v{}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::FAILURE);
        }
        let Some(cfg) = self.config() else {
            println!("You have to specify an input filename!");
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        };
        run::handle(cfg)?;
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
