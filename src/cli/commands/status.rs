use std::io::{self, Write};

use crate::config::Config;
use crate::core::{Core, MenuTarget, RenderOptions, StatusView};
use crate::errors::AppResult;
use crate::store::{FailurePolicy, JsonFileStore};
use crate::utils::clock::Clock;

/// Handle the no-argument invocation: print the plugin output.
pub fn handle(cfg: &Config, target: MenuTarget, clock: &dyn Clock) -> AppResult<()> {
    let store = JsonFileStore::new(cfg.data_path());
    let options = RenderOptions {
        icon_style: cfg.icon_style,
        target,
    };

    let view = Core::current_status(&store, clock, &options, FailurePolicy::BestEffort)?;
    write_view(&mut io::stdout().lock(), &view)
}

/// Write the plugin lines to `out`. A host that closed the pipe early is an
/// I/O error, not a panic.
pub fn write_view<W: Write>(out: &mut W, view: &StatusView) -> AppResult<()> {
    write!(out, "{view}")?;
    out.flush()?;
    Ok(())
}
