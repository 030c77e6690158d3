use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use clap::Args;
use irrigation_core::{Config, Event, ScheduleBoard, StatusTicker};
use tracing::{info, warn};

use super::args::PlannerArgs;
use super::generate::print_table;

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub planner: PlannerArgs,
    /// Seconds between status refreshes (default: refresh.interval_secs setting)
    #[arg(long)]
    pub every: Option<u64>,
    /// Stop after this many refreshes (at least 1)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: Option<u64>,
    /// Print the status counts as JSON events instead of the table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Config::load_or_default();
    let (config, now) = args.planner.prepare(&settings)?;
    let period = Duration::from_secs(args.every.unwrap_or(settings.refresh.interval_secs));

    let mut board = ScheduleBoard::new(settings.display.page_size);
    let generated = board.generate(&config, now);
    if args.json {
        println!("{}", serde_json::to_string(&generated)?);
    } else {
        print_table(&board);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let json = args.json;
    let limit = args.ticks;
    let ticks = runtime.block_on(async {
        let mut ticker = StatusTicker::new(period);
        info!(period_secs = ticker.period().as_secs(), "watching schedule");
        let shutdown = shutdown_signal(tokio::signal::ctrl_c());
        let mut seen = 0u64;
        ticker
            .run(&mut board, shutdown, |board, event| {
                seen += 1;
                report(board, event, json);
                match limit {
                    Some(limit) if seen >= limit => ControlFlow::Break(()),
                    _ => ControlFlow::Continue(()),
                }
            })
            .await
    });
    info!(ticks, "watch finished");
    Ok(())
}

/// Resolve when `signal` fires. If the handler cannot be installed the
/// watch keeps running until `--ticks` or the process is killed.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "cannot listen for Ctrl-C; stop with --ticks or kill");
        std::future::pending::<()>().await;
    }
}

fn report(board: &ScheduleBoard, event: &Event, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("error: {e}"),
        }
    } else {
        print_table(board);
    }
}
