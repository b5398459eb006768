use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed three-valued classification of incident impact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lenient parse for values coming off the severity `<select>`.
    /// Anything unrecognized falls back to the form default.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported AI-safety issue.
///
/// `show_details` is a presentation flag, not domain data; it defaults to
/// `false` and is the only field that mutates after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub show_details: bool,
}

impl Incident {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            severity,
            reported_at,
            show_details: false,
        }
    }
}

pub(crate) fn instant(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

/// The three fixed records every fresh dashboard starts with.
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident::new(
            1,
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics...",
            Severity::Medium,
            // 2025-03-15T10:00:00Z
            instant(1_742_032_800),
        ),
        Incident::new(
            2,
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information...",
            Severity::High,
            // 2025-04-01T14:30:00Z
            instant(1_743_517_800),
        ),
        Incident::new(
            3,
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata...",
            Severity::Low,
            // 2025-03-20T09:15:00Z
            instant(1_742_462_100),
        ),
    ]
}
