use clap::Parser;

/// Command-line interface definition for time_hedge
/// Status-bar plugin that turns research time into debt and work time into payoff
#[derive(Parser, Debug)]
#[command(
    name = "time_hedge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Research vs work debt tracker for xbar/SwiftBar: research accrues 4x debt, work pays it off",
    long_about = None
)]
pub struct Cli {
    /// Action to apply: work, research, stop or reset.
    /// Without an action the current status is printed for the host.
    /// Any other value, including one starting with '-', only settles the balance.
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    pub action: Option<String>,

    /// Override the data file path (useful for tests or a second tracker)
    #[arg(long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(long = "log")]
    pub log: bool,

    /// Print the effective configuration
    #[arg(long = "print-config", help = "Print the effective configuration")]
    pub print_config: bool,

    /// Create the configuration file with default values
    #[arg(
        long = "init-config",
        help = "Create the configuration file with default values (never overwrites)"
    )]
    pub init_config: bool,

    /// Pretend the current time is this many seconds since the Unix epoch
    #[arg(long = "at", value_name = "EPOCH_SECONDS", hide = true)]
    pub at: Option<f64>,
}
