use anyhow::{Context, Result};
use clap::Parser;
use moodshop_core::{ClientConfig, FileStorage, ShopClient, UserIdentity};
use moodshop_ui::{FlowOutcome, ShopController};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod cli;
mod output;

use crate::app::App;
use crate::cli::Args;
use crate::output::{print_error, print_usage_instructions};

/// Main function - builds the client from config and flags, then runs one command or a session
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // File and environment config, with command line flags on top
    let config = ClientConfig::load()?.merge(&ClientConfig {
        api_base_url: args.api_url.clone(),
        storage_path: args.storage.clone(),
        log_level: args.verbose.then(|| "debug".to_string()),
    });

    // Logs go to stderr; stdout carries page output
    let default_level = config.log_level.clone().unwrap_or_else(|| "warn".to_string());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level)),
        )
        .init();

    let storage_path = config.storage_path()?;
    debug!("Using storage at {}", storage_path.display());
    let storage = FileStorage::new(storage_path);
    let identity = UserIdentity::load_or_create(&storage).context("Failed to load user id")?;

    let client = match ShopClient::from_config(&config, identity) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize client: {}", e);
            print_error(&format!("Error initializing client: {}", e));
            return Ok(ExitCode::FAILURE);
        }
    };
    let controller = ShopController::new(Arc::new(client))?;
    let app = App::new(controller, args.page_out.clone());

    let outcome = if args.interactive {
        app.run_interactive().await?
    } else if let Some(command) = args.command {
        app.run_command(command).await?
    } else {
        print_usage_instructions();
        return Ok(ExitCode::SUCCESS);
    };
    app.finish().await;

    Ok(match outcome {
        FlowOutcome::Completed => ExitCode::SUCCESS,
        FlowOutcome::Failed => ExitCode::FAILURE,
        FlowOutcome::Skipped => ExitCode::from(2),
    })
}
