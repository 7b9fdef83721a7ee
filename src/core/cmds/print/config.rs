use log::info;

use crate::core::display::OutputFormat;
use crate::types::AppResult;
use crate::types::config::config;

pub async fn execute(format: OutputFormat) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    let log = effective_config.log.unwrap_or_default();
    let stats = effective_config.stats.unwrap_or_default();
    let display = effective_config.display.unwrap_or_default();

    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    info!("  db: {}", effective_config.db.unwrap_or_default());

    info!("");
    info!("Log:");
    info!("  level: {}", log.level());
    match log.color {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    info!("");
    info!("Stats:");
    info!("  retention_days: {}", stats.retention_days());
    info!("  success_threshold: {}", stats.success_threshold());

    info!("");
    info!("Display:");
    info!("  bar_width: {}", display.bar_width());
    info!(
        "  thousands_separator: {:?}",
        display.thousands_separator()
    );

    Ok(())
}
