use log::{debug, info};

use crate::SqlStore;
use crate::core::cli::RecordArgs;
use crate::core::cmds::{read_input, today};
use crate::types::config::config;
use crate::types::{AppResult, SessionOutcome};

pub async fn execute_record(args: RecordArgs, store: SqlStore) -> AppResult<()> {
    let outcome: SessionOutcome = serde_json::from_str(&read_input(&args.session)?)?;
    let day = args.date.unwrap_or_else(today);
    let threshold = config().stats().success_threshold();

    debug!(
        "Recording session: position={:?}, complete={}, average score={:.2}",
        outcome.position(),
        outcome.interview_complete,
        outcome.average_score()
    );

    let stats = store.record_interview(day, &outcome, threshold).await?;

    let position = outcome.position().unwrap_or("unspecified position");
    let verdict = if !outcome.interview_complete {
        "incomplete"
    } else if outcome.is_success(threshold) {
        "passed"
    } else {
        "not passed"
    };
    info!("Recorded {} interview ({}) for {}", position, verdict, day);
    info!(
        "  {} total, {} completed, {} successful",
        stats.total_interviews, stats.completed_interviews, stats.success_count
    );

    Ok(())
}
