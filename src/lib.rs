pub mod core;

// Re-export key items for easy importing in this crate
pub use crate::core::store::SqlStore;
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::display::{
    ChartEntry, Dashboard, NumberFormat, RenderState, SummaryCard, chart_entries, summary_cards,
};
pub use crate::core::main_shared::run_main;
pub use crate::core::types::{Statistics, StatisticsInput, normalize, parse_statistics};
