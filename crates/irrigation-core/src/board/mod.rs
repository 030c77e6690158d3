//! Schedule board: the dashboard's working state.
//!
//! Holds the full generated schedule, the filtered view the user is
//! looking at, the active filters and the current page. The board has a
//! single owner; regeneration and the periodic status refresh are plain
//! `&mut self` calls and cannot interleave.
//!
//! ## Usage
//!
//! ```ignore
//! let mut board = ScheduleBoard::new(8);
//! board.generate(&config, TimeOfDay::now_local());
//! board.apply_filters(Some("D1"), None);
//! let rows = board.page_items();
//! // Once a minute:
//! board.refresh_status(TimeOfDay::now_local());
//! ```

pub mod export;

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::clock::TimeOfDay;
use crate::error::{ExportError, ValidationError};
use crate::events::{Event, StatusCounts};
use crate::irrigation::{IrrigationConfig, IrrigationTask, ScheduleGenerator, TaskStatus};

pub use export::{to_csv, write_csv, CSV_HEADER, DEFAULT_FILE_NAME};

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Serializable for reporting only; a board is always built through
/// [`ScheduleBoard::new`] so `page_size >= 1` and `current_page >= 1` hold.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleBoard {
    schedule_id: Option<Uuid>,
    schedule: Vec<IrrigationTask>,
    filtered_schedule: Vec<IrrigationTask>,
    plot_filter: Option<String>,
    status_filter: Option<TaskStatus>,
    /// 1-based.
    current_page: usize,
    page_size: usize,
}

impl Default for ScheduleBoard {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ScheduleBoard {
    /// Create an empty board. A page size of 0 is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            schedule_id: None,
            schedule: Vec::new(),
            filtered_schedule: Vec::new(),
            plot_filter: None,
            status_filter: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn schedule_id(&self) -> Option<Uuid> {
        self.schedule_id
    }

    /// Full, unfiltered schedule.
    pub fn schedule(&self) -> &[IrrigationTask] {
        &self.schedule
    }

    /// Current filtered view.
    pub fn filtered_schedule(&self) -> &[IrrigationTask] {
        &self.filtered_schedule
    }

    pub fn plot_filter(&self) -> Option<&str> {
        self.plot_filter.as_deref()
    }

    pub fn status_filter(&self) -> Option<TaskStatus> {
        self.status_filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_schedule.len().div_ceil(self.page_size)
    }

    /// Rows of the filtered view on the current page.
    pub fn page_items(&self) -> &[IrrigationTask] {
        let len = self.filtered_schedule.len();
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = (start + self.page_size).min(len);
        &self.filtered_schedule[start..end]
    }

    /// Distinct plot ids of the full schedule, in first-seen order.
    pub fn plot_options(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for task in &self.schedule {
            if !seen.contains(&task.plot.as_str()) {
                seen.push(&task.plot);
            }
        }
        seen
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.schedule.iter().map(|task| task.status))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the schedule wholesale. The filtered view is reset to the
    /// full list and the page to 1; filter selections are kept but not
    /// re-applied until [`apply_filters`](Self::apply_filters) is called.
    pub fn set_schedule(&mut self, schedule: Vec<IrrigationTask>) {
        self.filtered_schedule = schedule.clone();
        self.schedule = schedule;
        self.current_page = 1;
    }

    pub fn set_filtered_schedule(&mut self, filtered: Vec<IrrigationTask>) {
        self.filtered_schedule = filtered;
    }

    /// Generate from `config` and replace the current schedule.
    pub fn generate(&mut self, config: &IrrigationConfig, now: TimeOfDay) -> Event {
        let schedule = ScheduleGenerator::new().generate(config, now);
        let schedule_id = Uuid::new_v4();
        let task_count = schedule.len();
        self.schedule_id = Some(schedule_id);
        self.set_schedule(schedule);
        info!(%schedule_id, task_count, "schedule replaced");
        Event::ScheduleGenerated {
            schedule_id,
            task_count,
            counts: self.counts(),
            at: Utc::now(),
        }
    }

    /// Filter the full schedule by exact plot id and/or status.
    ///
    /// `None` or an empty plot string matches everything. Resets to page 1.
    pub fn apply_filters(&mut self, plot: Option<&str>, status: Option<TaskStatus>) -> Event {
        self.plot_filter = plot.map(str::trim).filter(|p| !p.is_empty()).map(String::from);
        self.status_filter = status;

        let filtered: Vec<IrrigationTask> = self
            .schedule
            .iter()
            .filter(|task| {
                let plot_ok = self.plot_filter.as_deref().map_or(true, |p| task.plot == p);
                let status_ok = self.status_filter.map_or(true, |s| task.status == s);
                plot_ok && status_ok
            })
            .cloned()
            .collect();
        let matched = filtered.len();
        self.set_filtered_schedule(filtered);
        self.current_page = 1;

        Event::FiltersApplied {
            plot: self.plot_filter.clone(),
            status: self.status_filter,
            matched,
            at: Utc::now(),
        }
    }

    /// Jump to a 1-based page of the filtered view.
    ///
    /// Page 1 is always accepted, even when the view is empty.
    pub fn set_page(&mut self, page: usize) -> Result<(), ValidationError> {
        let total = self.total_pages().max(1);
        if page == 0 || page > total {
            return Err(ValidationError::InvalidPage { page, total });
        }
        self.current_page = page;
        Ok(())
    }

    /// Re-classify every task against `now`.
    ///
    /// Only `status` is touched, in both the full schedule and the filtered
    /// view. The filtered view is not re-filtered, so a status filter may
    /// show stale membership until filters are applied again.
    pub fn refresh_status(&mut self, now: TimeOfDay) -> Event {
        let changed = self
            .schedule
            .iter_mut()
            .map(|task| task.restamp(now))
            .filter(|changed| *changed)
            .count();
        for task in &mut self.filtered_schedule {
            task.restamp(now);
        }
        let counts = self.counts();
        info!(
            %now,
            changed,
            pending = counts.pending,
            in_progress = counts.in_progress,
            done = counts.done,
            "status refreshed"
        );
        Event::StatusRefreshed {
            changed,
            counts,
            at: Utc::now(),
        }
    }

    /// CSV of the full schedule.
    ///
    /// Refuses when the filtered view is empty, but otherwise ignores the
    /// active filters and exports every task.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        if self.filtered_schedule.is_empty() {
            warn!("export requested with nothing to export");
            return Err(ExportError::EmptySchedule);
        }
        Ok(to_csv(&self.schedule))
    }

    /// Write [`export_csv`](Self::export_csv) output to `path`.
    pub fn export_to_file(&self, path: &Path) -> Result<Event, ExportError> {
        let csv = self.export_csv()?;
        write_csv(path, &csv)?;
        info!(path = %path.display(), rows = self.schedule.len(), "schedule exported");
        Ok(Event::ScheduleExported {
            path: path.to_path_buf(),
            rows: self.schedule.len(),
            at: Utc::now(),
        })
    }
}
