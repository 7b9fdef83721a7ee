//! Turns a normalized statistics record into what the dashboard shows:
//! three summary cards and the position chart dataset.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::types::{PositionDistribution, Statistics, StatisticsInput};

pub mod terminal;

pub const NO_DATA_MESSAGE: &str = "Statistics data could not be loaded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Locale-style number formatting with digit grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(",")
    }
}

impl NumberFormat {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn count(&self, value: u64) -> String {
        self.group(&value.to_string())
    }

    /// Grouped integer part and at most three fraction digits, trailing zeros dropped.
    pub fn number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        // Ties round away from zero, as locale formatting does
        let rounded = (value.abs() * 1000.0).round() / 1000.0;
        let fixed = format!("{rounded:.3}");
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');
        let is_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');

        let mut out = String::new();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.number(value))
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.chars().count();
        let mut out = String::with_capacity(digits.len() + len / 3 * self.separator.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.separator);
            }
            out.push(c);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardKind {
    TotalInterviews,
    CompletionRate,
    SuccessRate,
}

impl CardKind {
    pub fn title(&self) -> &'static str {
        match self {
            CardKind::TotalInterviews => "Total Interviews",
            CardKind::CompletionRate => "Completion Rate",
            CardKind::SuccessRate => "Success Rate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CardKind::TotalInterviews => "Total number of interviews conducted so far",
            CardKind::CompletionRate => "Share of all interviews that were completed",
            CardKind::SuccessRate => "Share of completed interviews that met the passing bar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub kind: CardKind,
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

impl SummaryCard {
    fn new(kind: CardKind, value: String) -> Self {
        Self {
            kind,
            title: kind.title(),
            value,
            description: kind.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub cards: Vec<SummaryCard>,
    pub chart: Vec<ChartEntry>,
}

impl Dashboard {
    pub fn new(stats: &Statistics, format: &NumberFormat) -> Self {
        Self {
            cards: summary_cards(stats, format),
            chart: chart_entries(&stats.position_distribution),
        }
    }

    pub fn card(&self, kind: CardKind) -> Option<&SummaryCard> {
        self.cards.iter().find(|c| c.kind == kind)
    }

    pub fn has_chart(&self) -> bool {
        !self.chart.is_empty()
    }
}

pub fn summary_cards(stats: &Statistics, format: &NumberFormat) -> Vec<SummaryCard> {
    vec![
        SummaryCard::new(
            CardKind::TotalInterviews,
            format.count(stats.total_interviews),
        ),
        SummaryCard::new(
            CardKind::CompletionRate,
            format.percent(stats.completion_rate),
        ),
        SummaryCard::new(CardKind::SuccessRate, format.percent(stats.success_rate)),
    ]
}

/// One entry per position in distribution order; missing counts show as zero.
pub fn chart_entries(distribution: &PositionDistribution) -> Vec<ChartEntry> {
    distribution
        .iter()
        .map(|(label, count)| ChartEntry {
            label: label.to_string(),
            value: count.unwrap_or(0),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderState {
    NoData { message: &'static str },
    HasData(Dashboard),
}

impl RenderState {
    pub fn new(input: Option<&StatisticsInput>, format: &NumberFormat) -> Self {
        match input {
            None => RenderState::NoData {
                message: NO_DATA_MESSAGE,
            },
            Some(input) => RenderState::HasData(Dashboard::new(&input.normalize(), format)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn counts_are_grouped() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.count(0), "0");
        assert_eq!(fmt.count(120), "120");
        assert_eq!(fmt.count(1234), "1,234");
        assert_eq!(fmt.count(1234567), "1,234,567");
        assert_eq!(NumberFormat::new(" ").count(100000), "100 000");
    }

    #[test]
    fn numbers_trim_fraction_zeros() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.number(42.0), "42");
        assert_eq!(fmt.number(85.5), "85.5");
        assert_eq!(fmt.number(66.6666), "66.667");
        assert_eq!(fmt.number(1234.5), "1,234.5");
        assert_eq!(fmt.number(-1500.25), "-1,500.25");
        assert_eq!(fmt.number(-0.0), "0");
        assert_eq!(fmt.number(-0.0001), "0");
    }

    #[test]
    fn fraction_ties_round_away_from_zero() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.number(0.0625), "0.063");
        assert_eq!(fmt.number(2.0625), "2.063");
        assert_eq!(fmt.number(-2.0625), "-2.063");
        assert_eq!(fmt.percent(12.3125), "12.313%");
    }

    #[test]
    fn non_finite_numbers() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.number(f64::NAN), "NaN");
        assert_eq!(fmt.number(f64::INFINITY), "∞");
        assert_eq!(fmt.number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn percent_appends_sign() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.percent(0.0), "0%");
        assert_eq!(fmt.percent(150.0), "150%");
    }

    #[test]
    fn chart_entries_default_missing_counts() {
        let dist: PositionDistribution = [("Frontend", Some(3)), ("Backend", None)]
            .into_iter()
            .collect();
        assert_eq!(
            chart_entries(&dist),
            vec![
                ChartEntry {
                    label: "Frontend".to_string(),
                    value: 3
                },
                ChartEntry {
                    label: "Backend".to_string(),
                    value: 0
                },
            ]
        );
    }

    #[test]
    fn absent_input_renders_no_data() {
        let state = RenderState::new(None, &NumberFormat::default());
        assert_eq!(
            state,
            RenderState::NoData {
                message: NO_DATA_MESSAGE
            }
        );
    }

    #[test]
    fn cards_follow_fixed_order() {
        let state = RenderState::new(Some(&StatisticsInput::default()), &NumberFormat::default());
        let RenderState::HasData(dashboard) = state else {
            panic!("expected data");
        };
        let kinds: Vec<_> = dashboard.cards.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardKind::TotalInterviews,
                CardKind::CompletionRate,
                CardKind::SuccessRate
            ]
        );
        assert!(dashboard.has_chart());
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn no_data_serializes_with_state_tag() {
        let state = RenderState::new(None, &NumberFormat::default());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "no_data");
        assert_eq!(json["message"], NO_DATA_MESSAGE);
    }
}
