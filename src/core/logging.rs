use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Install the global logger using the effective log config.
///
/// `info` records are printed bare since command output is routed through
/// them; every other level gets a prefix.
pub fn init_logging() {
    let level = LevelFilter::from_str(config().log().level()).unwrap_or(LevelFilter::Info);
    let use_color = colors_enabled();
    console::set_colors_enabled(use_color);

    let result = fern::Dispatch::new()
        .format(move |out, message, record| match record.level() {
            Level::Info => out.finish(format_args!("{message}")),
            level => {
                let prefix = format!("[{}]", level.as_str().to_lowercase());
                let prefix = if use_color {
                    match level {
                        Level::Error => style(prefix).red().bold().to_string(),
                        Level::Warn => style(prefix).yellow().bold().to_string(),
                        _ => style(prefix).dim().to_string(),
                    }
                } else {
                    prefix
                };
                out.finish(format_args!("{prefix} {message}"))
            }
        })
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .filter(|meta| meta.level() > Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .filter(|meta| meta.level() <= Level::Warn)
                .chain(std::io::stderr()),
        )
        .apply();

    if result.is_err() {
        eprintln!("Logger already initialized");
    }
}
