//! Round-robin watering schedule generation.
//!
//! Plots are split into rounds of `motor_count` consecutive plots. Every
//! motor in a round starts at the same cursor time, so the cursor moves
//! forward by one runtime per round. After a full pass over all plots the
//! cursor also skips the configured interval, and the next pass begins.
//!
//! ```text
//! plots=4 motors=2 runtime=5 interval=20
//!
//! 06:00  D1/M1 D2/M2
//! 06:05  D3/M1 D4/M2
//! 06:10  (interval)
//! 06:30  D1/M1 D2/M2
//! ...
//! ```
//!
//! The cursor is a date-anchored chrono value advanced by exact minute
//! deltas, so a task running past midnight lands on the next day and is
//! rejected by the boundary check instead of wrapping to 00:00.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::IrrigationConfig;
use super::status::{classify, TaskStatus};
use crate::clock::TimeOfDay;

/// One watering slot: a plot served by a motor for one runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationTask {
    /// 0-based position in generation order.
    pub index: usize,
    pub plot: String,
    /// Motor serving the plot.
    pub run_by: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Cached result of the last classification.
    pub status: TaskStatus,
}

impl IrrigationTask {
    /// Recompute `status` for `now`. Returns true if it changed.
    pub fn restamp(&mut self, now: TimeOfDay) -> bool {
        let status = classify(self.start_time, self.end_time, now);
        let changed = status != self.status;
        self.status = status;
        changed
    }
}

/// Stateless schedule generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the full task list for `config`, stamping each task's
    /// status against `now`.
    pub fn generate(&self, config: &IrrigationConfig, now: TimeOfDay) -> Vec<IrrigationTask> {
        if config.motor_count == 0 || config.motor_runtime_min == 0 {
            warn!(
                motors = config.motor_count,
                runtime = config.motor_runtime_min,
                "refusing to generate without motors or runtime"
            );
            return Vec::new();
        }
        let plots = config.plot_ids();
        let motors = config.motor_ids();
        let runtime = Duration::minutes(i64::from(config.motor_runtime_min));
        let interval = Duration::minutes(i64::from(config.interval_min));

        let day = NaiveDate::default();
        let end = NaiveDateTime::new(day, config.end_time.as_naive());
        let mut cursor = NaiveDateTime::new(day, config.start_time.as_naive());

        let mut schedule = Vec::new();
        let mut passes = 0usize;

        'passes: while cursor + runtime < end {
            for round in plots.chunks(motors.len()) {
                // Every motor in a round shares the cursor, and the cursor only
                // grows, so once one round misses the boundary all later ones do.
                let task_end = cursor + runtime;
                if task_end >= end {
                    break 'passes;
                }
                for (plot, motor) in round.iter().zip(&motors) {
                    let start_time = TimeOfDay::from_naive(cursor.time());
                    let end_time = TimeOfDay::from_naive(task_end.time());
                    schedule.push(IrrigationTask {
                        index: schedule.len(),
                        plot: plot.clone(),
                        run_by: motor.clone(),
                        start_time,
                        end_time,
                        status: classify(start_time, end_time, now),
                    });
                }
                cursor += runtime;
            }
            cursor += interval;
            passes += 1;
        }

        debug!(
            plots = config.plot_count,
            motors = config.motor_count,
            passes,
            tasks = schedule.len(),
            "generated irrigation schedule"
        );
        schedule
    }
}

/// Convenience wrapper over [`ScheduleGenerator::generate`].
pub fn generate(config: &IrrigationConfig, now: TimeOfDay) -> Vec<IrrigationTask> {
    ScheduleGenerator::new().generate(config, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn config(
        plots: u32,
        motors: u32,
        start: &str,
        end: &str,
        runtime: u32,
        interval: u32,
    ) -> IrrigationConfig {
        IrrigationConfig::new(plots, motors, t(start), t(end), runtime, interval).unwrap()
    }

    fn row(task: &IrrigationTask) -> (String, String, String, String) {
        (
            task.plot.clone(),
            task.run_by.clone(),
            task.start_time.to_string(),
            task.end_time.to_string(),
        )
    }

    #[test]
    fn first_pass_of_default_scenario() {
        let cfg = config(4, 2, "060000", "190000", 5, 20);
        let schedule = generate(&cfg, t("000000"));

        let first: Vec<_> = schedule.iter().take(6).map(row).collect();
        let expect = |p: &str, m: &str, s: &str, e: &str| {
            (p.to_string(), m.to_string(), s.to_string(), e.to_string())
        };
        assert_eq!(
            first,
            vec![
                expect("D1", "M1", "060000", "060500"),
                expect("D2", "M2", "060000", "060500"),
                expect("D3", "M1", "060500", "061000"),
                expect("D4", "M2", "060500", "061000"),
                expect("D1", "M1", "063000", "063500"),
                expect("D2", "M2", "063000", "063500"),
            ]
        );
    }

    #[test]
    fn default_scenario_fills_the_day() {
        let cfg = config(4, 2, "060000", "190000", 5, 20);
        let schedule = generate(&cfg, t("000000"));

        // Each pass spans 30 minutes; 26 passes fit between 06:00 and 19:00.
        assert_eq!(schedule.len(), 26 * 4);
        let last = schedule.last().unwrap();
        assert_eq!(last.start_time.to_string(), "183500");
        assert_eq!(last.end_time.to_string(), "184000");
        assert!(schedule.iter().all(|task| task.status == TaskStatus::Pending));
    }

    #[test]
    fn runtime_equal_to_window_yields_nothing() {
        let cfg = config(4, 2, "060000", "060500", 5, 0);
        assert!(generate(&cfg, t("000000")).is_empty());
    }

    #[test]
    fn runtime_longer_than_window_yields_nothing() {
        let cfg = config(4, 2, "060000", "060400", 5, 0);
        assert!(generate(&cfg, t("000000")).is_empty());
    }

    #[test]
    fn zero_motors_or_runtime_yields_nothing() {
        let mut cfg = config(4, 2, "060000", "190000", 5, 20);
        cfg.motor_count = 0;
        assert!(generate(&cfg, t("000000")).is_empty());

        let mut cfg = config(4, 2, "060000", "190000", 5, 0);
        cfg.motor_runtime_min = 0;
        assert!(generate(&cfg, t("000000")).is_empty());
    }

    #[test]
    fn round_crossing_the_boundary_is_dropped() {
        // 06:00-06:12 with 5 minute runtime: rounds at 06:00 and 06:05 fit,
        // the 06:10 round would end at 06:15 and is discarded whole.
        let cfg = config(6, 2, "060000", "061200", 5, 0);
        let schedule = generate(&cfg, t("000000"));
        let plots: Vec<_> = schedule.iter().map(|task| task.plot.as_str()).collect();
        assert_eq!(plots, vec!["D1", "D2", "D3", "D4"]);
    }

    #[test]
    fn uneven_last_round_keeps_remaining_plots_only() {
        let cfg = config(3, 2, "060000", "070000", 10, 60);
        let schedule = generate(&cfg, t("000000"));
        let rows: Vec<_> = schedule
            .iter()
            .map(|task| (task.plot.as_str(), task.run_by.as_str()))
            .collect();
        assert_eq!(rows, vec![("D1", "M1"), ("D2", "M2"), ("D3", "M1")]);
        assert_eq!(schedule[2].start_time.to_string(), "061000");
    }

    #[test]
    fn many_rounds_past_the_boundary_stop_the_pass() {
        // One round fits a nearly day-long window; the remaining rounds are
        // never stepped through.
        let cfg = config(200_000, 1, "000000", "235959", 1439, 0);
        let schedule = generate(&cfg, t("000000"));
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].plot, "D1");
        assert_eq!(schedule[0].end_time.to_string(), "235900");
    }

    #[test]
    fn more_motors_than_plots() {
        let cfg = config(2, 5, "060000", "061100", 5, 0);
        let schedule = generate(&cfg, t("000000"));
        let rows: Vec<_> = schedule
            .iter()
            .map(|task| (task.plot.as_str(), task.run_by.as_str()))
            .collect();
        assert_eq!(rows, vec![("D1", "M1"), ("D2", "M2"), ("D1", "M1"), ("D2", "M2")]);
        assert_eq!(schedule[2].start_time.to_string(), "060500");
    }

    #[test]
    fn window_ending_at_midnight_does_not_wrap() {
        let cfg = config(1, 1, "233000", "235959", 10, 0);
        let schedule = generate(&cfg, t("000000"));
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[1].end_time.to_string(), "235000");
    }

    #[test]
    fn status_is_stamped_from_now() {
        let cfg = config(2, 1, "060000", "061500", 5, 0);
        let schedule = generate(&cfg, t("060700"));
        let statuses: Vec<_> = schedule.iter().map(|task| task.status).collect();
        assert_eq!(statuses, vec![TaskStatus::Done, TaskStatus::InProgress]);
    }

    #[test]
    fn restamp_reports_changes() {
        let cfg = config(1, 1, "060000", "061000", 5, 0);
        let mut task = generate(&cfg, t("050000")).remove(0);
        assert!(!task.restamp(t("055959")));
        assert!(task.restamp(t("060000")));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.restamp(t("060501")));
        assert_eq!(task.status, TaskStatus::Done);
    }

    fn arb_config() -> impl Strategy<Value = IrrigationConfig> {
        (1u32..12, 1u32..5, 0u32..20 * 60, 1u32..4 * 60, 1u32..90, 0u32..60).prop_map(
            |(plots, motors, start_min, span_min, runtime, interval)| {
                let start = TimeOfDay::from_hms(start_min / 60, start_min % 60, 0).unwrap();
                let end_min = (start_min + span_min).min(23 * 60 + 59);
                let end = TimeOfDay::from_hms(end_min / 60, end_min % 60, 0).unwrap();
                IrrigationConfig::new(plots, motors, start, end, runtime, interval).unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn tasks_fit_inside_the_window(cfg in arb_config()) {
            let runtime = i64::from(cfg.motor_runtime_min);
            for task in generate(&cfg, TimeOfDay::from_hms(12, 0, 0).unwrap()) {
                let span = (task.end_time.as_naive() - task.start_time.as_naive()).num_minutes();
                prop_assert_eq!(span, runtime);
                prop_assert!(task.start_time >= cfg.start_time);
                prop_assert!(task.end_time < cfg.end_time);
            }
        }

        #[test]
        fn tasks_are_ordered(cfg in arb_config()) {
            let schedule = generate(&cfg, TimeOfDay::from_hms(12, 0, 0).unwrap());
            for (i, task) in schedule.iter().enumerate() {
                prop_assert_eq!(task.index, i);
            }
            for pair in schedule.windows(2) {
                prop_assert!(pair[0].start_time <= pair[1].start_time);
            }
        }

        #[test]
        fn motors_are_assigned_round_robin(cfg in arb_config()) {
            let plots = cfg.plot_ids();
            for task in generate(&cfg, TimeOfDay::from_hms(12, 0, 0).unwrap()) {
                let k = plots.iter().position(|p| *p == task.plot).unwrap();
                let expected = format!("M{}", (k as u32 % cfg.motor_count) + 1);
                prop_assert_eq!(task.run_by, expected);
            }
        }
    }
}
