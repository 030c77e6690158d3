use std::path::PathBuf;

use clap::Args;
use irrigation_core::{Config, IrrigationTask, ScheduleBoard, TaskStatus};

use super::args::PlannerArgs;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub planner: PlannerArgs,
    /// Show only this plot (e.g. D1)
    #[arg(long)]
    pub plot: Option<String>,
    /// Show only this status ("Pending", "In Progress", "Done")
    #[arg(long)]
    pub status: Option<TaskStatus>,
    /// Page of the filtered view to show
    #[arg(long, default_value = "1")]
    pub page: usize,
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
    /// Also write the full schedule as CSV (default file name from settings)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub csv: Option<String>,
}

#[derive(serde::Serialize)]
struct PageView<'a> {
    page: usize,
    total_pages: usize,
    total_tasks: usize,
    matched: usize,
    tasks: &'a [IrrigationTask],
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Config::load_or_default();
    let (config, now) = args.planner.prepare(&settings)?;

    let mut board = ScheduleBoard::new(settings.display.page_size);
    board.generate(&config, now);
    if args.plot.is_some() || args.status.is_some() {
        board.apply_filters(args.plot.as_deref(), args.status);
    }
    board.set_page(args.page)?;

    if args.json {
        let view = PageView {
            page: board.current_page(),
            total_pages: board.total_pages(),
            total_tasks: board.schedule().len(),
            matched: board.filtered_schedule().len(),
            tasks: board.page_items(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_table(&board);
    }

    if let Some(path) = args.csv {
        let path = if path.is_empty() {
            PathBuf::from(&settings.export.file_name)
        } else {
            PathBuf::from(path)
        };
        board.export_to_file(&path)?;
        eprintln!("exported {} rows to {}", board.schedule().len(), path.display());
    }
    Ok(())
}

/// Render the current page. Row numbers are 1-based.
pub fn print_table(board: &ScheduleBoard) {
    println!(
        "{:>5}  {:<6} {:<7} {:<7} {:<6} {}",
        "#", "Plot", "Start", "End", "RunBy", "Status"
    );
    for task in board.page_items() {
        println!(
            "{:>5}  {:<6} {:<7} {:<7} {:<6} {}",
            task.index + 1,
            task.plot,
            task.start_time,
            task.end_time,
            task.run_by,
            task.status
        );
    }
    if board.filtered_schedule().is_empty() {
        println!("(no tasks)");
    }
    let counts = board.counts();
    println!(
        "page {}/{} | {} tasks | pending {} | in progress {} | done {}",
        board.current_page(),
        board.total_pages().max(1),
        board.filtered_schedule().len(),
        counts.pending,
        counts.in_progress,
        counts.done
    );
}
