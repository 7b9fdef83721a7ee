use chrono::Days;
use log::{debug, info};

use crate::SqlStore;
use crate::core::cli::CleanupArgs;
use crate::core::cmds::today;
use crate::types::config::config;
use crate::types::{AppError, AppResult};

pub async fn execute_cleanup(args: CleanupArgs, store: SqlStore) -> AppResult<()> {
    let keep = args
        .days
        .unwrap_or_else(|| config().stats().retention_days());
    let cutoff = today()
        .checked_sub_days(Days::new(u64::from(keep)))
        .ok_or_else(|| AppError::InvalidArgument(format!("retention of {keep} days is too large")))?;

    debug!("Removing statistics recorded before {}", cutoff);
    let removed = store.remove_days_before(cutoff).await?;
    info!(
        "Removed {} day(s) of statistics older than {} day(s)",
        removed, keep
    );

    Ok(())
}
