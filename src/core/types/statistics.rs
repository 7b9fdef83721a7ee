use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Position labels shown when no distribution is available.
pub const DEFAULT_POSITIONS: [&str; 3] = ["Frontend", "Backend", "Fullstack"];

/// Interview counts per position, in document order.
///
/// Counts are optional because statistics documents may carry `null` for a
/// position; consumers decide how to treat a missing count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionDistribution {
    entries: Vec<(String, Option<u64>)>,
}

impl PositionDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed fallback distribution: every default position at zero.
    pub fn default_positions() -> Self {
        DEFAULT_POSITIONS
            .iter()
            .map(|label| (label.to_string(), Some(0)))
            .collect()
    }

    /// Set the count for a label. An existing label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, count: Option<u64>) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((label, count)),
        }
    }

    pub fn get(&self, label: &str) -> Option<Option<u64>> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u64>)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<u64>)> for PositionDistribution {
    fn from_iter<I: IntoIterator<Item = (S, Option<u64>)>>(iter: I) -> Self {
        let mut dist = PositionDistribution::new();
        for (label, count) in iter {
            dist.insert(label, count);
        }
        dist
    }
}

impl Serialize for PositionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

struct DistributionVisitor;

impl<'de> Visitor<'de> for DistributionVisitor {
    type Value = PositionDistribution;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of position labels to interview counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dist = PositionDistribution::new();
        while let Some((label, count)) = access.next_entry::<String, Option<u64>>()? {
            dist.insert(label, count);
        }
        Ok(dist)
    }

    /// An empty list carries no positions, same as an empty map.
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        match access.next_element::<IgnoredAny>()? {
            None => Ok(PositionDistribution::new()),
            Some(_) => Err(de::Error::invalid_type(Unexpected::Seq, &self)),
        }
    }
}

impl<'de> Deserialize<'de> for PositionDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DistributionVisitor)
    }
}

/// A statistics document as supplied by a caller. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsInput {
    #[serde(default)]
    pub total_interviews: Option<u64>,
    #[serde(default)]
    pub completion_rate: Option<f64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub position_distribution: Option<PositionDistribution>,
}

/// A statistics record with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_interviews: u64,
    pub completion_rate: f64,
    pub success_rate: f64,
    pub position_distribution: PositionDistribution,
}

impl StatisticsInput {
    /// Fill every missing field with its default.
    ///
    /// Numbers default to zero. A missing or empty distribution is replaced
    /// wholesale by [`PositionDistribution::default_positions`]; a non-empty
    /// one is kept verbatim. Rates are not range checked.
    pub fn normalize(&self) -> Statistics {
        let position_distribution = match &self.position_distribution {
            Some(dist) if !dist.is_empty() => dist.clone(),
            _ => PositionDistribution::default_positions(),
        };

        Statistics {
            total_interviews: self.total_interviews.unwrap_or(0),
            completion_rate: self.completion_rate.unwrap_or(0.0),
            success_rate: self.success_rate.unwrap_or(0.0),
            position_distribution,
        }
    }
}

impl From<Statistics> for StatisticsInput {
    fn from(stats: Statistics) -> Self {
        Self {
            total_interviews: Some(stats.total_interviews),
            completion_rate: Some(stats.completion_rate),
            success_rate: Some(stats.success_rate),
            position_distribution: Some(stats.position_distribution),
        }
    }
}

/// Normalize an optional statistics document.
///
/// Returns `None` when there is no document at all, so the caller can show
/// its "no data" state instead of a fabricated record.
pub fn normalize(input: Option<&StatisticsInput>) -> Option<Statistics> {
    input.map(StatisticsInput::normalize)
}

/// Parse a statistics document. Blank text and JSON `null` are both absent.
pub fn parse_statistics(text: &str) -> serde_json::Result<Option<StatisticsInput>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<StatisticsInput>>(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dist(entries: &[(&str, Option<u64>)]) -> PositionDistribution {
        entries.iter().map(|(l, c)| (*l, *c)).collect()
    }

    #[test]
    fn absent_input_has_no_record() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let input = StatisticsInput {
            total_interviews: Some(5),
            ..Default::default()
        };
        let stats = input.normalize();
        assert_eq!(stats.total_interviews, 5);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(
            stats.position_distribution,
            PositionDistribution::default_positions()
        );
    }

    #[test]
    fn empty_distribution_is_replaced_not_merged() {
        let input = StatisticsInput {
            position_distribution: Some(PositionDistribution::new()),
            ..Default::default()
        };
        assert_eq!(
            input.normalize().position_distribution.labels(),
            vec!["Frontend", "Backend", "Fullstack"]
        );
    }

    #[test]
    fn non_empty_distribution_is_kept_verbatim() {
        let given = dist(&[("Data", Some(3)), ("Frontend", None)]);
        let input = StatisticsInput {
            position_distribution: Some(given.clone()),
            ..Default::default()
        };
        assert_eq!(input.normalize().position_distribution, given);
    }

    #[test]
    fn out_of_range_rates_pass_through() {
        let input = StatisticsInput {
            completion_rate: Some(150.0),
            success_rate: Some(-3.5),
            ..Default::default()
        };
        let stats = input.normalize();
        assert_eq!(stats.completion_rate, 150.0);
        assert_eq!(stats.success_rate, -3.5);
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = StatisticsInput {
            total_interviews: Some(9),
            success_rate: Some(12.5),
            ..Default::default()
        }
        .normalize();
        let second = StatisticsInput::from(first.clone()).normalize();
        assert_eq!(first, second);
    }

    #[test]
    fn parse_keeps_document_order() {
        let input = parse_statistics(
            r#"{"position_distribution": {"Zeta": 1, "Alpha": 2, "Mid": null}}"#,
        )
        .unwrap()
        .unwrap();
        let dist = input.position_distribution.unwrap();
        assert_eq!(dist.labels(), vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(dist.get("Mid"), Some(None));
    }

    #[test]
    fn duplicate_label_keeps_first_position_and_last_value() {
        let input = parse_statistics(r#"{"position_distribution": {"A": 1, "B": 2, "A": 7}}"#)
            .unwrap()
            .unwrap();
        let dist = input.position_distribution.unwrap();
        assert_eq!(dist.labels(), vec!["A", "B"]);
        assert_eq!(dist.get("A"), Some(Some(7)));
    }

    #[test]
    fn empty_list_distribution_falls_back_to_defaults() {
        let input = parse_statistics(r#"{"position_distribution": []}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            input.normalize().position_distribution,
            PositionDistribution::default_positions()
        );
    }

    #[test]
    fn non_map_distributions_are_rejected() {
        assert!(parse_statistics(r#"{"position_distribution": ["Frontend"]}"#).is_err());
        assert!(parse_statistics(r#"{"position_distribution": 3}"#).is_err());
        assert!(parse_statistics(r#"{"position_distribution": {"Data": 2.5}}"#).is_err());
        assert!(parse_statistics(r#"{"position_distribution": {"Data": -1}}"#).is_err());
    }

    #[test]
    fn null_and_blank_documents_are_absent() {
        assert_eq!(parse_statistics("null").unwrap(), None);
        assert_eq!(parse_statistics("  \n").unwrap(), None);
    }

    #[test]
    fn null_fields_are_treated_as_missing() {
        let input = parse_statistics(
            r#"{"total_interviews": null, "completion_rate": null, "position_distribution": null}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(input, StatisticsInput::default());
    }

    #[test]
    fn serialized_distribution_round_trips_order() {
        let given = dist(&[("Backend", Some(4)), ("Frontend", Some(1))]);
        let json = serde_json::to_string(&given).unwrap();
        assert_eq!(json, r#"{"Backend":4,"Frontend":1}"#);
    }
}
