use anyhow::Result;
use clap::{Parser, Subcommand};
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Serve { bind } => fxconv::AppCommand::Serve { bind },
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Convert { amount, from, to } => {
                fxconv::AppCommand::Convert { amount, from, to }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the web converter (default)
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// List supported currencies
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code, defaults to the configured pair
        from: Option<String>,
        /// Target currency code, defaults to the configured pair
        to: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            fxconv::run_command(
                fxconv::AppCommand::Serve { bind: None },
                cli.config_path.as_deref(),
            )
            .await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
