use crate::config::Config;
use crate::core::{Action, Core};
use crate::errors::AppResult;
use crate::store::{FailurePolicy, JsonFileStore};
use crate::utils::clock::Clock;
use tracing::info;

/// Handle an action argument: settle, transition, save. Prints nothing, the
/// host refreshes the status right after.
pub fn handle(action: &str, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let store = JsonFileStore::new(cfg.data_path());
    let action = Action::parse(action);

    let record = Core::perform_action(&store, clock, &action, FailurePolicy::BestEffort)?;
    info!(%action, mode = %record.mode, balance = record.balance, "action handled");
    Ok(())
}
