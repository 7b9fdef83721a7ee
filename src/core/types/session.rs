use serde::{Deserialize, Serialize};

/// Average completion score a finished session needs to count as a success.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 4.0;

/// A finished interview session as reported by the interview runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub interview_complete: bool,
    #[serde(default)]
    pub completed_topics: Vec<String>,
    #[serde(default)]
    pub final_feedback: Option<String>,
    /// Per-answer completion scores (1-5) collected across all topics
    #[serde(default)]
    pub completion_scores: Vec<f64>,
}

impl SessionOutcome {
    /// Position label, ignoring blank values.
    pub fn position(&self) -> Option<&str> {
        self.position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn average_score(&self) -> f64 {
        if self.completion_scores.is_empty() {
            0.0
        } else {
            self.completion_scores.iter().sum::<f64>() / self.completion_scores.len() as f64
        }
    }

    /// A session passes when it covered at least one topic, received final
    /// feedback, and its average completion score reaches `threshold`.
    pub fn is_success(&self, threshold: f64) -> bool {
        let has_feedback = self
            .final_feedback
            .as_deref()
            .is_some_and(|f| !f.trim().is_empty());
        if self.completed_topics.is_empty() || !has_feedback {
            return false;
        }
        self.average_score() >= threshold
    }
}
