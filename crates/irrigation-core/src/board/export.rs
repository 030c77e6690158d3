//! CSV export of a task list.

use std::path::Path;

use crate::error::ExportError;
use crate::irrigation::IrrigationTask;

pub const CSV_HEADER: &str = "Index,Plot,Start,End,RunBy,Status";

/// Default file name offered for downloads.
pub const DEFAULT_FILE_NAME: &str = "irrigation_schedule.csv";

/// Render tasks as CSV: header line, then one line per task, no trailing newline.
///
/// Fields never contain commas or quotes, so no escaping is needed.
pub fn to_csv(tasks: &[IrrigationTask]) -> String {
    let rows = tasks.iter().map(|task| {
        format!(
            "{},{},{},{},{},{}",
            task.index, task.plot, task.start_time, task.end_time, task.run_by, task.status
        )
    });
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    out.push_str(&rows.collect::<Vec<_>>().join("\n"));
    out
}

/// Write rendered CSV to `path`.
pub fn write_csv(path: &Path, csv: &str) -> Result<(), ExportError> {
    std::fs::write(path, csv).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
