//! Integration tests for the generate -> filter -> refresh -> export workflow.

use irrigation_core::board::CSV_HEADER;
use irrigation_core::storage::Config;
use irrigation_core::{
    ConfigForm, Event, ExportError, IrrigationConfig, ScheduleBoard, TaskStatus, TimeOfDay,
    ValidationError,
};

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

#[test]
fn test_form_to_csv_workflow() {
    let config = IrrigationConfig::from_form(&ConfigForm::default()).unwrap();
    let mut board = ScheduleBoard::new(8);
    board.generate(&config, t("061200"));

    // 06:12: first pass done, second pass not started yet.
    let counts = board.counts();
    assert_eq!(counts.done, 4);
    assert_eq!(counts.in_progress, 0);
    assert_eq!(counts.pending, 100);

    board.apply_filters(None, Some(TaskStatus::Done));
    assert_eq!(board.total_pages(), 1);
    let plots: Vec<_> = board.page_items().iter().map(|task| task.plot.as_str()).collect();
    assert_eq!(plots, vec!["D1", "D2", "D3", "D4"]);

    // Export bypasses the status filter.
    let csv = board.export_csv().unwrap();
    assert!(csv.starts_with(CSV_HEADER));
    assert_eq!(csv.lines().count(), 1 + 104);
}

#[test]
fn test_scenario_cursor_after_first_pass() {
    let config = IrrigationConfig::from_form(&ConfigForm::default()).unwrap();
    let mut board = ScheduleBoard::default();
    board.generate(&config, t("000000"));

    let fifth = &board.schedule()[4];
    assert_eq!(fifth.index, 4);
    assert_eq!(fifth.plot, "D1");
    assert_eq!(fifth.run_by, "M1");
    assert_eq!(fifth.start_time.to_string(), "063000");
    assert_eq!(fifth.end_time.to_string(), "063500");
}

#[test]
fn test_five_minute_window_is_empty() {
    let form = ConfigForm {
        start_time: "060000".into(),
        end_time: "060500".into(),
        motor_runtime: "5".into(),
        ..ConfigForm::default()
    };
    let config = IrrigationConfig::from_form(&form).unwrap();
    let mut board = ScheduleBoard::default();
    match board.generate(&config, t("060000")) {
        Event::ScheduleGenerated { task_count, .. } => assert_eq!(task_count, 0),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(matches!(board.export_csv(), Err(ExportError::EmptySchedule)));
}

#[test]
fn test_export_with_plot_filter_keeps_every_row() {
    let form = ConfigForm {
        plots: "3".into(),
        motors: "3".into(),
        start_time: "060000".into(),
        end_time: "060600".into(),
        motor_runtime: "5".into(),
        interval: "0".into(),
    };
    let config = IrrigationConfig::from_form(&form).unwrap();
    let mut board = ScheduleBoard::default();
    board.generate(&config, t("050000"));
    board.apply_filters(Some("D1"), None);
    assert_eq!(board.filtered_schedule().len(), 1);

    let csv = board.export_csv().unwrap();
    assert_eq!(csv.lines().skip(1).count(), 3);
}

#[test]
fn test_day_progression_via_refresh() {
    let config = IrrigationConfig::from_form(&ConfigForm {
        plots: "2".into(),
        motors: "1".into(),
        start_time: "080000".into(),
        end_time: "081100".into(),
        motor_runtime: "5".into(),
        interval: "0".into(),
    })
    .unwrap();
    let mut board = ScheduleBoard::default();
    board.generate(&config, t("075900"));
    assert_eq!(board.counts().pending, 2);

    board.refresh_status(t("080000"));
    assert_eq!(board.schedule()[0].status, TaskStatus::InProgress);
    assert_eq!(board.schedule()[1].status, TaskStatus::Pending);

    board.refresh_status(t("080500"));
    assert_eq!(board.schedule()[0].status, TaskStatus::InProgress);
    assert_eq!(board.schedule()[1].status, TaskStatus::InProgress);

    board.refresh_status(t("081001"));
    assert_eq!(board.counts().done, 2);
}

#[test]
fn test_settings_drive_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut settings = Config::load_from(&path).unwrap();
    settings.set("defaults.plots", "6").unwrap();
    settings.set("defaults.motors", "3").unwrap();
    settings.set("display.page_size", "5").unwrap();
    settings.save_to(&path).unwrap();

    let settings = Config::load_from(&path).unwrap();
    let config = IrrigationConfig::from_form(&settings.defaults.to_form()).unwrap();
    let mut board = ScheduleBoard::new(settings.display.page_size);
    board.generate(&config, t("000000"));

    assert_eq!(board.plot_options(), vec!["D1", "D2", "D3", "D4", "D5", "D6"]);
    assert_eq!(board.page_items().len(), 5);
    assert!(board.schedule().iter().all(|task| task.run_by != "M4"));
}

#[test]
fn test_invalid_form_is_rejected_before_generation() {
    let form = ConfigForm {
        start_time: "190000".into(),
        end_time: "060000".into(),
        ..ConfigForm::default()
    };
    let err = IrrigationConfig::from_form(&form).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid time range: end_time (060000) must be after start_time (190000)"
    );
    assert!(matches!(err, ValidationError::InvalidTimeRange { .. }));
}
