mod bundle;
mod charts;
mod config;
mod consts;
mod events;
mod icons;
mod logging;
mod panels;
mod reference;
mod registry;
mod theme;
mod ui;

use crate::bundle::Customization;
use crate::config::{AppConfig, Severity};
use crate::events::{EventKind, UiEvent};
use crate::logging::LogLevel;
use crate::ui::UiOptions;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Path to the bundle configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Tab id to open first.
        #[arg(long, value_name = "TAB_ID")]
        tab: Option<String>,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Validate a bundle configuration file.
    Validate {
        /// Path to the bundle configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write the built-in sample configuration to disk.
    Init {
        /// Destination path for the configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            config,
            tab,
            no_background_color,
        } => start_command(config, tab, no_background_color),
        Command::Validate { config } => validate_command(config),
        Command::Init { config, force } => init_command(config, force),
    }
}

/// The per-user config path used when `--config` is not given.
fn default_config_path() -> Result<PathBuf, Box<dyn Error>> {
    let home = home::home_dir().ok_or("could not determine the home directory")?;
    Ok(home.join(".dashdeck").join("config.json"))
}

/// Resolve the config to display: explicit path, then the default path,
/// then `None` for the built-in sample bundle.
fn resolve_config(path: Option<PathBuf>) -> Result<Option<(AppConfig, PathBuf)>, Box<dyn Error>> {
    if let Some(path) = path {
        let config = AppConfig::load_from_file(&path)?;
        return Ok(Some((config, path)));
    }
    let default_path = default_config_path()?;
    if default_path.exists() {
        let config = AppConfig::load_from_file(&default_path)?;
        return Ok(Some((config, default_path)));
    }
    Ok(None)
}

fn start_command(
    config_path: Option<PathBuf>,
    tab: Option<String>,
    no_background_color: bool,
) -> Result<(), Box<dyn Error>> {
    let mut startup_events = Vec::new();

    let customization = match resolve_config(config_path)? {
        Some((config, origin)) => {
            // Fail fast on structural errors before touching the terminal
            config.ensure_valid()?;
            for issue in config.validate() {
                startup_events.push(UiEvent::config(
                    issue.message,
                    EventKind::Error,
                    LogLevel::Warn,
                ));
            }
            startup_events.push(UiEvent::config(
                format!("Configuration loaded from {}", origin.display()),
                EventKind::Success,
                LogLevel::Info,
            ));
            Customization::with_config(config)
        }
        None => {
            startup_events.push(UiEvent::config(
                "No configuration file found; showing the built-in sample bundle".to_string(),
                EventKind::Notice,
                LogLevel::Info,
            ));
            Customization::sample()
        }
    };

    startup_events.push(UiEvent::shell(
        format!(
            "Bundle ready: {} custom panels, {} property types, {} invoice statuses",
            customization.panels.len(),
            customization.reference.property_types.len(),
            customization.reference.invoice_statuses.len()
        ),
        EventKind::Notice,
    ));
    for tab_config in &customization.config.dashboard.tabs {
        if !customization.panels.contains(&tab_config.id) {
            startup_events.push(UiEvent::config(
                format!(
                    "Tab '{}' has no custom panel; the chart fallback will be used",
                    tab_config.label
                ),
                EventKind::Notice,
                LogLevel::Debug,
            ));
        }
    }

    let options = UiOptions {
        with_background_color: !no_background_color,
        initial_tab: tab,
    };
    run_ui(customization, options, startup_events)
}

/// Starts the dashboard UI.
///
/// # Arguments
/// * `customization` - The bundle to display.
/// * `options` - UI options resolved from the command line.
/// * `startup_events` - Events queued for the activity trail.
fn run_ui(
    customization: Customization,
    options: UiOptions,
    startup_events: Vec<UiEvent>,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(customization, options, startup_events);
    let res = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn validate_command(config_path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = AppConfig::load_from_file(&path).map_err(|e| {
        print_error("Failed to load configuration", Some(&e.to_string()));
        e
    })?;

    let mut failed = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                print_error(&issue.message, None);
                failed = true;
            }
            Severity::Warning => print_warn(&issue.message, ""),
        }
    }

    if failed {
        return Err(Box::from(format!(
            "configuration at {} is invalid",
            path.display()
        )));
    }

    let chart_count = config.dashboard.charts.len() + config.analytics.charts.len();
    print_success(
        &format!("Configuration at {} is valid", path.display()),
        &format!(
            "{} tabs, {} charts, {} clients",
            config.dashboard.tabs.len(),
            chart_count,
            config.clients.len()
        ),
    );
    Ok(())
}

fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<(), Box<dyn Error>> {
    let path = match config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    if path.exists() && !force {
        return Err(Box::from(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }

    let config = bundle::sample_config();
    config
        .save(&path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_success("Wrote sample configuration", &path.display().to_string());
    Ok(())
}

/// Print CLI command success
fn print_success(title: &str, details: &str) {
    print!("\x1b[1;32m[SUCCESS]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print CLI command warn message
fn print_warn(title: &str, details: &str) {
    print!("\x1b[1;91m[WARN]\x1b[0m {}", title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print CLI command error
fn print_error(title: &str, details: Option<&str>) {
    println!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    if let Some(details) = details {
        println!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
    }
}
