use std::time::Instant;

use tracing::{error, info};

use crate::config::{ErrorPolicy, RunConfig};
use crate::input::path_display;
use crate::pipeline::stage1_extract::run_stage1;
use crate::pipeline::stage2_sort::run_stage2;
use crate::pipeline::stage3_render::run_stage3;

pub fn handle(cfg: RunConfig) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(
        stage = "stage1_extract",
        input = %path_display(&cfg.input),
        "starting stage"
    );
    let lengths = match run_stage1(&cfg) {
        Ok(lengths) => lengths,
        Err(err) => {
            error!(error = %err, "{}", err.description());
            if cfg.on_error == ErrorPolicy::Abort {
                return Err(err.into());
            }
            err.into_partial()
        }
    };
    info!(
        stage = "stage1_extract",
        elapsed_ms = start.elapsed().as_millis(),
        reads = lengths.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_sort", "sorting lengths");
    let sorted = run_stage2(lengths);
    info!(
        stage = "stage2_sort",
        elapsed_ms = start.elapsed().as_millis(),
        max_len = sorted.max().unwrap_or(0),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_render", "starting stage");
    if let Err(err) = run_stage3(&sorted, &cfg.destination) {
        error!(error = %err, "{}", err.description());
        if cfg.on_error == ErrorPolicy::Abort {
            return Err(err.into());
        }
    }
    info!(
        stage = "stage3_render",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/run.rs"]
mod tests;
