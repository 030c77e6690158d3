use std::path::PathBuf;

use clap::Args;
use irrigation_core::{Config, ScheduleBoard};

use super::args::PlannerArgs;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub planner: PlannerArgs,
    /// Output file (default: export.file_name setting)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// Write CSV to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Config::load_or_default();
    let (config, now) = args.planner.prepare(&settings)?;

    let mut board = ScheduleBoard::new(settings.display.page_size);
    board.generate(&config, now);

    if args.stdout {
        println!("{}", board.export_csv()?);
        return Ok(());
    }

    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(&settings.export.file_name));
    let event = board.export_to_file(&path)?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
