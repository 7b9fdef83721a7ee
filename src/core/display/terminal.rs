use console::style;

use crate::core::display::{ChartEntry, Dashboard, RenderState};

const BAR: &str = "█";

/// Lay out a render state as terminal lines.
pub fn render_lines(state: &RenderState, bar_width: u16) -> Vec<String> {
    match state {
        RenderState::NoData { message } => {
            vec![style(format!("⚠ {message}")).yellow().to_string()]
        }
        RenderState::HasData(dashboard) => render_dashboard(dashboard, bar_width),
    }
}

fn render_dashboard(dashboard: &Dashboard, bar_width: u16) -> Vec<String> {
    let mut lines = vec![
        style("📊 Interview Statistics").bold().to_string(),
        String::new(),
    ];

    for card in &dashboard.cards {
        lines.push(format!(
            "{}: {}",
            style(card.title).bold(),
            style(&card.value).cyan().bold()
        ));
        lines.push(format!("  {}", style(card.description).dim()));
    }

    if dashboard.has_chart() {
        lines.push(String::new());
        lines.push(style("Distribution by Position").bold().to_string());
        lines.extend(render_chart(&dashboard.chart, bar_width));
    }

    lines
}

fn render_chart(entries: &[ChartEntry], bar_width: u16) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = entries.iter().map(|e| e.value).max().unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let bar = BAR.repeat(bar_length(entry.value, max_value, bar_width));
            let padding = label_width - entry.label.chars().count();
            format!(
                "  {}{} {}{}{}",
                entry.label,
                " ".repeat(padding),
                style(bar).blue(),
                if entry.value > 0 { " " } else { "" },
                entry.value
            )
        })
        .collect()
}

/// Bars are scaled against the largest value; any non-zero value gets at least one cell.
fn bar_length(value: u64, max_value: u64, bar_width: u16) -> usize {
    if value == 0 || max_value == 0 {
        return 0;
    }
    let fraction = value as f64 / max_value as f64;
    let cells = (fraction * f64::from(bar_width)).round() as usize;
    cells.clamp(1, usize::from(bar_width.max(1)))
}
