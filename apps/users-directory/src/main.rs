use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use runtime::{AppConfig, CliArgs};
use tokio::io::BufReader;
use users_directory::config::UsersDirectoryConfig;
use users_directory::UsersDirectory;

mod auth;
mod session;

use auth::DemoAuthenticator;
use session::Session;

/// Users Directory - Chilean user records with RUT validation
#[derive(Parser)]
#[command(name = "users-directory")]
#[command(about = "Users Directory - Chilean user records with RUT validation")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve JSON-lines requests from stdin (default)
    Session,
    /// RUT helpers
    Rut {
        #[command(subcommand)]
        action: RutCommand,
    },
    /// Check configuration
    Check,
}

#[derive(Subcommand)]
enum RutCommand {
    /// Exit successfully if the RUT is valid
    Validate { rut: String },
    /// Print the RUT as XX.XXX.XXX-X
    Format { rut: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config
        .logging
        .clone()
        .unwrap_or_else(runtime::config::default_logging_config);
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.home_dir));
    tracing::debug!(config = ?args.config, "Configuration loaded");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(config).await,
        Commands::Rut { action } => Ok(run_rut(action)),
        Commands::Check => check_config(config),
    }
}

async fn run_session(config: AppConfig) -> Result<ExitCode> {
    let module_cfg: UsersDirectoryConfig = config.module_config("users_directory")?;
    let directory = UsersDirectory::init(&module_cfg);
    let mut session = Session::new(
        directory.api(),
        DemoAuthenticator::new(config.auth.demo_password.clone()),
    );

    tracing::info!("Users directory session started");
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    tracing::info!("Users directory session finished");
    Ok(ExitCode::SUCCESS)
}

fn run_rut(action: RutCommand) -> ExitCode {
    match action {
        RutCommand::Validate { rut } => {
            if validation::validate_rut(&rut) {
                println!("RUT válido");
                ExitCode::SUCCESS
            } else {
                println!("RUT inválido");
                ExitCode::FAILURE
            }
        }
        RutCommand::Format { rut } => {
            println!("{}", validation::format_rut(&rut));
            ExitCode::SUCCESS
        }
    }
}

fn check_config(config: AppConfig) -> Result<ExitCode> {
    tracing::info!("Checking configuration...");

    // Surface bad module sections here rather than at session start
    let module_cfg: UsersDirectoryConfig = config.module_config("users_directory")?;
    tracing::debug!(?module_cfg, "users_directory configuration");

    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(ExitCode::SUCCESS)
}
