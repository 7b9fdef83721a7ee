use log::info;

use crate::SqlStore;
use crate::core::cli::DaysArgs;
use crate::core::display::OutputFormat;
use crate::types::AppResult;

pub async fn execute_days(args: DaysArgs, store: SqlStore) -> AppResult<()> {
    let days = store.list_days().await?;
    let mut all_stats = Vec::with_capacity(days.len());
    for day in days {
        all_stats.push(store.get_daily_stats(day).await?);
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&all_stats)?);
        }
        OutputFormat::Table => {
            if all_stats.is_empty() {
                info!("No statistics recorded yet. Use the 'record' command to add a session.");
                return Ok(());
            }
            for stats in &all_stats {
                info!(
                    "{}  {} total, {} completed ({:.1}%), {} successful ({:.1}%)",
                    stats.day,
                    stats.total_interviews,
                    stats.completed_interviews,
                    stats.completion_rate(),
                    stats.success_count,
                    stats.success_rate()
                );
            }
        }
    }

    Ok(())
}
