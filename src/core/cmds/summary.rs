use log::info;

use crate::SqlStore;
use crate::core::cli::SummaryArgs;
use crate::core::cmds::today;
use crate::core::display::{NumberFormat, OutputFormat};
use crate::types::AppResult;
use crate::types::config::config;

pub async fn execute_summary(args: SummaryArgs, store: SqlStore) -> AppResult<()> {
    let day = args.date.unwrap_or_else(today);
    let stats = store.get_daily_stats(day).await?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats.summary())?);
        }
        OutputFormat::Table => {
            let fmt = NumberFormat::new(config().display().thousands_separator());
            info!("Statistics for {}", day);
            match stats.last_updated {
                Some(at) => info!("  Last updated: {}", at.to_rfc3339()),
                None => info!("  Last updated: never"),
            }
            info!("  Interviews: {}", fmt.count(stats.total_interviews));
            info!(
                "  Completed: {} ({})",
                fmt.count(stats.completed_interviews),
                fmt.percent(stats.completion_rate())
            );
            info!(
                "  Successful: {} ({})",
                fmt.count(stats.success_count),
                fmt.percent(stats.success_rate())
            );
            info!("  Positions:");
            for (position, count) in stats.position_distribution.iter() {
                info!("    {}: {}", position, fmt.count(count.unwrap_or(0)));
            }
        }
    }

    Ok(())
}
