//! Pinning the current date for development

use crate::storage::{Calendar, KeyValueStore, ProgressStore};
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// What to do with the pinned date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevDateAction {
    Show,
    Set(NaiveDate),
    Clear,
}

/// Apply `action` and return the pinned date afterwards
///
/// # Errors
///
/// Returns an error when asked to pin a date while dev mode is off.
pub fn run_dev_date<S: KeyValueStore>(
    calendar: Calendar,
    store: &mut ProgressStore<S>,
    action: DevDateAction,
) -> Result<Option<NaiveDate>> {
    match action {
        DevDateAction::Show => {}
        DevDateAction::Set(date) => {
            if !calendar.pin(store, date) {
                bail!("Dev mode is off; pass --dev or set KONEKCIJE_DEV_MODE=true");
            }
            log::info!("Pinned current date to {date}");
        }
        DevDateAction::Clear => {
            calendar.unpin(store);
            log::info!("Cleared pinned date");
        }
    }
    Ok(calendar.pinned(store))
}
