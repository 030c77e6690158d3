use clap::Args;
use irrigation_core::{classify, TimeOfDay};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Window start, HHMMSS
    pub start: String,
    /// Window end, HHMMSS
    pub end: String,
    /// Time of day to classify against, HHMMSS (default: local clock)
    #[arg(long)]
    pub now: Option<String>,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = TimeOfDay::parse_field("start", &args.start)?;
    let end = TimeOfDay::parse_field("end", &args.end)?;
    let now = match args.now {
        Some(now) => TimeOfDay::parse_field("now", &now)?,
        None => TimeOfDay::now_local(),
    };
    if end < start {
        return Err(irrigation_core::ValidationError::InvalidTimeRange { start, end }.into());
    }
    println!("{}", classify(start, end, now));
    Ok(())
}
