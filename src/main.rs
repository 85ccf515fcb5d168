// Copyright (c) 2024 Predulive Labs. All rights reserved.

mod api;
mod config;
mod consts;
mod environment;
mod events;
mod fetcher;
mod logging;
mod payload;
mod ui;
mod view_model;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{DEFAULT_USER_ID, EVENT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::fetcher::DashboardFetcher;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

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
        /// User identifier to fetch the dashboard for
        #[arg(long, value_name = "USER_ID")]
        user_id: Option<String>,

        /// Override the dashboard API base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Clear the saved user configuration.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("PREDULIVE_ENVIRONMENT").unwrap_or_default();
    let mut environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start { user_id, base_url } => {
            if let Some(api_base_url) = base_url {
                environment = Environment::Custom { api_base_url };
            }

            // Persist an explicitly-provided user ID for subsequent sessions.
            if let Some(id) = &user_id {
                Config::new(id.clone())
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
            }

            let mut user_id = user_id;
            // If no user ID is provided, try to load it from the config file.
            if user_id.is_none() && config_path.exists() {
                if let Ok(config) = Config::load_from_file(&config_path) {
                    user_id = Some(config.user_id);
                }
            }
            let user_id = user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());

            start(user_id, environment).await
        }
        Command::Logout => {
            println!("Logging out and clearing the saved user configuration...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Starts the dashboard application.
///
/// # Arguments
/// * `user_id` - The identifier whose dashboard payload is fetched.
/// * `env` - The environment to connect to.
async fn start(user_id: String, env: Environment) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the fetch worker to the UI loop.
    let api_client = ApiClient::new(env.clone());
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (outcome_sender, outcome_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let cancellation = CancellationToken::new();
    let fetcher = DashboardFetcher::new(
        Arc::new(api_client),
        user_id.clone(),
        event_sender,
        outcome_sender,
        cancellation.clone(),
    );

    let app = ui::App::new(
        user_id,
        env,
        fetcher,
        event_receiver,
        outcome_receiver,
        cancellation,
    );
    let res = ui::run(&mut terminal, app).await;

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
