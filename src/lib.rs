//! time_hedge library root.
//! Exposes the CLI parser, the high-level run() function, and the tracker
//! modules (record store, accrual engine, action state machine, renderer).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use crate::core::MenuTarget;
use errors::{AppError, AppResult};
use tracing::{debug, warn};
use utils::clock::{Clock, FixedClock, SystemClock};
use utils::logging::enable_logging;

/// Central dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if cli.print_config || cli.init_config {
        return cli::commands::config::handle(cli, cfg);
    }

    match &cli.action {
        Some(action) => cli::commands::action::handle(action, cfg, clock),
        None => cli::commands::status::handle(cfg, menu_target(cli), clock),
    }
}

/// Menu triggers re-run this executable; a `--data` override is forwarded so
/// they act on the same file that is being displayed.
fn menu_target(cli: &Cli) -> MenuTarget {
    let exe = std::env::current_exe()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string());

    match &cli.data {
        Some(data) => MenuTarget::new(exe).with_args(["--data", data.as_str()]),
        None => MenuTarget::new(exe),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI; usage errors are reported but never fail the host
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(());
        }
    };

    // 2️⃣ logging on stderr, only when asked
    if let Err(e) = enable_logging(cli.log) {
        eprintln!("{e}");
    }

    // 3️⃣ load config once, then apply the command-line override
    let mut cfg = Config::load();
    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }
    debug!(data = %cfg.data_path().display(), "configuration ready");

    // 4️⃣ pick the clock
    let result = match cli.at {
        Some(at) => {
            let clock = FixedClock::from_epoch_seconds(at)
                .ok_or_else(|| AppError::Config(format!("invalid --at value: {at}")))?;
            dispatch(&cli, &cfg, &clock)
        }
        None => dispatch(&cli, &cfg, &SystemClock),
    };

    result.inspect_err(|e| warn!("invocation failed: {e}"))
}
