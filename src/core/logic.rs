use tracing::debug;

use super::action::Action;
use super::display::{RenderOptions, StatusView, render};
use crate::errors::AppResult;
use crate::models::Record;
use crate::store::{FailurePolicy, RecordStore};
use crate::utils::clock::Clock;

pub struct Core;

impl Core {
    /// Load, settle and transition, then write the result back.
    pub fn perform_action<S, C>(
        store: &S,
        clock: &C,
        action: &Action,
        policy: FailurePolicy,
    ) -> AppResult<Record>
    where
        S: RecordStore + ?Sized,
        C: Clock + ?Sized,
    {
        let record = store.load(policy)?;
        let now = clock.epoch_seconds();
        let next = action.apply(&record, now);

        store.save(&next, policy)?;
        Ok(next)
    }

    /// Load and render. The store is never written.
    pub fn current_status<S, C>(
        store: &S,
        clock: &C,
        options: &RenderOptions,
        policy: FailurePolicy,
    ) -> AppResult<StatusView>
    where
        S: RecordStore + ?Sized,
        C: Clock + ?Sized,
    {
        let record = store.load(policy)?;
        let view = render(&record, clock.epoch_seconds(), options);
        debug!(balance = view.balance, mode = %view.mode, "status rendered");
        Ok(view)
    }
}
