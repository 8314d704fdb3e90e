//! Clockface - a customizable terminal clock.
//!
//! `clockface run` shows the live clock with its settings pane. Every other
//! subcommand reads or changes the persisted settings and exits.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use clockface::{
    cli::{CliService, formatting::format_error},
    config::{AppConfig, ConfigPaths},
    config_store::{ConfigStore, FileStorage, MemoryStorage},
    display::{self, RunOptions},
    tracing_config,
};
use tracing::{info, instrument};

#[derive(Parser)]
#[command(name = "clockface")]
#[command(about = "A customizable terminal clock", version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// State file holding the clock settings
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Program configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep settings in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the live clock
    Run {
        /// Print a single frame and exit
        #[arg(long)]
        once: bool,

        /// Hide the settings pane
        #[arg(long)]
        no_settings: bool,
    },
    /// Read and change clock settings
    Config {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Render the clock without the interactive loop
    Display {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List commands
    Help { category: Option<String> },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => ConfigPaths::main_config()?,
    };
    let app_config = AppConfig::load(&config_path)?;

    let is_display = matches!(cli.command, Some(Commands::Run { once: false, .. }));
    if is_display {
        tracing_config::init_with_file(&app_config.general)?;
    } else {
        tracing_config::init_cli_mode(&app_config.general)?;
    }

    let state_path = match cli.state_file.or_else(|| app_config.storage.state_file.clone()) {
        Some(path) => path,
        None => ConfigPaths::state_file()?,
    };

    let store = if cli.ephemeral {
        ConfigStore::load(MemoryStorage::new())
    } else {
        ensure_state_directory(&state_path)?;
        ConfigStore::load(FileStorage::new(state_path.clone()))
    };

    match cli.command {
        Some(Commands::Run { once, no_settings }) => {
            info!("Starting clockface");

            let options = RunOptions {
                once,
                settings: !no_settings,
                watch_path: (!cli.ephemeral).then_some(state_path),
                size: None,
            };
            display::run(store, options).await?;
        }
        Some(Commands::Config { args }) => run_cli_command(store, "config", &args)?,
        Some(Commands::Display { args }) => run_cli_command(store, "display", &args)?,
        Some(Commands::Help { category }) => {
            println!("{}", CliService::new().help(category.as_deref())?);
        }
        None => println!("{}", CliService::new().help(None)?),
    }

    Ok(())
}

/// Executes one registry command and prints its output.
///
/// Without a command name the help of the category is printed instead.
///
/// # Errors
/// Returns error if the command is unknown or fails.
fn run_cli_command(
    mut store: ConfigStore,
    category: &str,
    args: &[String],
) -> Result<(), Box<dyn Error>> {
    let cli_service = CliService::new();

    let Some((command, command_args)) = args.split_first() else {
        println!("{}", cli_service.help(Some(category))?);
        return Ok(());
    };

    let output = cli_service.execute_command(&mut store, category, command, command_args)?;
    if !output.trim().is_empty() {
        println!("{output}");
    }

    Ok(())
}

#[instrument]
fn ensure_state_directory(state_path: &Path) -> Result<(), Box<dyn Error>> {
    let Some(directory) = state_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    else {
        return Ok(());
    };

    if !directory.exists() {
        info!("Creating state directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    Ok(())
}
