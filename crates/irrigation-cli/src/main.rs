use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "irrigation-cli", version, about = "Irrigation schedule planner")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a schedule and show it as a table or JSON
    Generate(commands::generate::GenerateArgs),
    /// Generate a schedule and write it as CSV
    Export(commands::export::ExportArgs),
    /// Generate a schedule and keep task status up to date
    Watch(commands::watch::WatchArgs),
    /// Classify a single watering window
    Status(commands::status::StatusArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irrigation_core=warn,irrigation_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Status(args) => commands::status::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "irrigation-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
