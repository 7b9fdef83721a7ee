use log::info;

use crate::SqlStore;
use crate::core::cli::DashboardArgs;
use crate::core::cmds::{read_input, today};
use crate::core::display::terminal::render_lines;
use crate::core::display::{NumberFormat, OutputFormat, RenderState};
use crate::types::config::config;
use crate::types::{AppResult, StatisticsInput, parse_statistics};

/// Where the dashboard takes its statistics from
pub enum DashboardSource {
    Document(String),
    Store(SqlStore),
}

pub async fn execute_dashboard(args: DashboardArgs, source: DashboardSource) -> AppResult<()> {
    let input = load_statistics(&args, source).await?;

    let display = config().display();
    let number_format = NumberFormat::new(display.thousands_separator());
    let state = RenderState::new(input.as_ref(), &number_format);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        OutputFormat::Table => {
            for line in render_lines(&state, display.bar_width()) {
                info!("{}", line);
            }
        }
    }

    Ok(())
}

async fn load_statistics(
    args: &DashboardArgs,
    source: DashboardSource,
) -> AppResult<Option<StatisticsInput>> {
    match source {
        DashboardSource::Document(path) => Ok(parse_statistics(&read_input(&path)?)?),
        DashboardSource::Store(store) => {
            let day = args.date.unwrap_or_else(today);
            let stats = store.get_daily_stats(day).await?;
            Ok(Some(stats.summary()))
        }
    }
}
