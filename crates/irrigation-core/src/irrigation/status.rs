use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::ValidationError;

/// Where a watering window sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Label used in tables, filters and CSV.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

/// Classify a window against `now`.
///
/// Both ends are inclusive: `now == start` and `now == end` are in progress.
/// Windows are assumed not to cross midnight; an inverted window is rejected
/// when the configuration is built, not here.
pub fn classify(start: TimeOfDay, end: TimeOfDay, now: TimeOfDay) -> TaskStatus {
    if now < start {
        TaskStatus::Pending
    } else if now <= end {
        TaskStatus::InProgress
    } else {
        TaskStatus::Done
    }
}
