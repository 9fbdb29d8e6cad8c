//! Dessert Clicker - Main entry point
//!
//! Parses the command line, loads the configuration and either runs the
//! terminal UI or one of the headless commands.

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use dessert_clicker::app::App;
use dessert_clicker::cli::{Cli, Commands};
use dessert_clicker::config::ClickerConfig;
use dessert_clicker::error::ClickerError;
use dessert_clicker::headless;
use dessert_clicker::session::DessertSession;

/// Initialize the logger with appropriate settings
///
/// The TUI draws on the alternate screen, so it only logs when a log file
/// is given. Headless commands log to stderr.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<()> {
    // Allows RUST_LOG env var to override
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Load the config file (if any) and apply command line overrides
fn load_config(cli: &Cli) -> Result<ClickerConfig> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            ClickerConfig::load_from_file(path)?
        }
        None => ClickerConfig::default(),
    };
    let config = config.with_overrides(cli.end_policy, cli.share_file.clone());
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn new_session(config: &ClickerConfig) -> Result<DessertSession> {
    Ok(DessertSession::new(config.catalog()?, config.end_policy))
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let headless = !matches!(cli.command, None | Some(Commands::Play));
    init_logging(cli.log_file.as_deref(), headless)?;
    info!("Dessert Clicker starting up");
    debug!(?cli, "CLI arguments parsed");

    if let Some(Commands::Config {
        dump: _,
        validate: Some(path),
    }) = &cli.command
    {
        return validate_config_file(path);
    }

    let config = load_config(&cli)?;
    let mut out = stdout().lock();

    match cli.command {
        None | Some(Commands::Play) => {
            drop(out);
            run_tui(&config)?;
        }
        Some(Commands::Sell { count }) => {
            let mut session = new_session(&config)?;
            headless::sell(&mut session, count, &mut out)?;
        }
        Some(Commands::Catalog) => {
            headless::print_catalog(&config.catalog()?, &mut out)?;
        }
        Some(Commands::Share { count }) => {
            let mut session = new_session(&config)?;
            let mut target = config.share_target();
            headless::sell_and_share(
                &mut session,
                count,
                &config.formatter(),
                target.as_mut(),
                &mut out,
            )?;
        }
        Some(Commands::Config { dump, .. }) => match dump {
            Some(path) => {
                config.save_to_file(&path)?;
                println!("✓ Configuration written to {:?}", path);
            }
            None => {
                let json = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize configuration to JSON")?;
                println!("{}", json);
            }
        },
    }

    Ok(())
}

fn validate_config_file(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    match ClickerConfig::load_from_file(path).and_then(|config| config.validate()) {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {:?}", path);
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the TUI
fn run_tui(config: &ClickerConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let session = new_session(config)?;

    enable_raw_mode()
        .map_err(|e| ClickerError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    setup_or_restore(
        || crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture),
        restore_terminal,
    )?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| ClickerError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(
                session,
                Box::new(config.formatter()),
                config.share_target(),
            );
            app.run(&mut terminal)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    restore_terminal();

    result.map_err(Into::into)
}

/// Run a terminal setup step once raw mode is on.
///
/// If the step fails, `restore` runs before the error is returned so the
/// shell is not left in raw mode.
fn setup_or_restore<S, R>(setup: S, restore: R) -> Result<(), ClickerError>
where
    S: FnOnce() -> std::io::Result<()>,
    R: FnOnce(),
{
    setup().map_err(|e| {
        restore();
        ClickerError::terminal(format!("Failed to enter alternate screen: {}", e))
    })
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
