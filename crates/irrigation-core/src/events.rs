use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::irrigation::TaskStatus;

/// Every change to the schedule board produces an Event.
/// The CLI prints them; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A fresh schedule replaced the previous one.
    ScheduleGenerated {
        schedule_id: Uuid,
        task_count: usize,
        counts: StatusCounts,
        at: DateTime<Utc>,
    },
    FiltersApplied {
        plot: Option<String>,
        status: Option<TaskStatus>,
        matched: usize,
        at: DateTime<Utc>,
    },
    /// Periodic re-classification of every task.
    StatusRefreshed {
        changed: usize,
        counts: StatusCounts,
        at: DateTime<Utc>,
    },
    ScheduleExported {
        path: PathBuf,
        rows: usize,
        at: DateTime<Utc>,
    },
}

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TaskStatus>,
    {
        statuses.into_iter().fold(Self::default(), |mut acc, status| {
            match status {
                TaskStatus::Pending => acc.pending += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Done => acc.done += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.done
    }
}
