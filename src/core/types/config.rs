use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_SUCCESS_THRESHOLD;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StatsConfig {
    pub retention_days: Option<u32>,
    pub success_threshold: Option<f64>,
}

impl StatsConfig {
    pub fn retention_days(&self) -> u32 {
        self.retention_days.unwrap_or(30)
    }

    pub fn success_threshold(&self) -> f64 {
        self.success_threshold.unwrap_or(DEFAULT_SUCCESS_THRESHOLD)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            retention_days: Some(self.retention_days()),
            success_threshold: Some(self.success_threshold()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DisplayConfig {
    pub bar_width: Option<u16>,
    pub thousands_separator: Option<String>,
}

impl DisplayConfig {
    pub fn bar_width(&self) -> u16 {
        self.bar_width.unwrap_or(40)
    }

    pub fn thousands_separator(&self) -> &str {
        self.thousands_separator.as_deref().unwrap_or(",")
    }

    pub fn to_effective(&self) -> Self {
        Self {
            bar_width: Some(self.bar_width()),
            thousands_separator: Some(self.thousands_separator().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub db: Option<String>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub stats: Option<StatsConfig>,
    pub display: Option<DisplayConfig>,
}

impl Config {
    pub fn db(&self) -> String {
        self.db
            .clone()
            .unwrap_or_else(|| format!("{}.sqlite", namespace()))
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn stats(&self) -> StatsConfig {
        self.stats.clone().unwrap_or_default()
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            db: Some(self.db()),
            log: Some(self.log().to_effective()),
            stats: Some(self.stats().to_effective()),
            display: Some(self.display().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

static NAMESPACE: OnceCell<String> = OnceCell::new();
static CONFIG: OnceCell<Config> = OnceCell::new();

/// Set the namespace used to derive the config and database filenames.
pub fn set_namespace(namespace: &str) {
    let _ = NAMESPACE.set(namespace.to_string());
}

pub fn namespace() -> &'static str {
    NAMESPACE
        .get()
        .map(|s| s.as_str())
        .unwrap_or("interview-stats")
}

pub fn get_config_filename() -> String {
    format!("{}.toml", namespace())
}

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.db.is_some() {
        cfg.db = file.db.clone();
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    if let Some(file_stats) = &file.stats {
        let mut stats = cfg.stats.clone().unwrap_or_default();
        if file_stats.retention_days.is_some() {
            stats.retention_days = file_stats.retention_days;
        }
        if let Some(threshold) = file_stats.success_threshold
            && threshold.is_finite()
        {
            stats.success_threshold = Some(threshold);
        }
        cfg.stats = Some(stats);
    }

    if let Some(file_display) = &file.display {
        let mut display = cfg.display.clone().unwrap_or_default();
        if let Some(width) = file_display.bar_width
            && width > 0
        {
            display.bar_width = Some(width);
        }
        if file_display.thousands_separator.is_some() {
            display.thousands_separator = file_display.thousands_separator.clone();
        }
        cfg.display = Some(display);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(db) = &overrides.db
        && !db.trim().is_empty()
    {
        cfg.db = Some(db.clone());
    }

    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let config_filename = get_config_filename();
    for dir in cwd.ancestors() {
        let candidate = dir.join(&config_filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
