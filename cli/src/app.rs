use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use moodshop_ui::{ElementId, FlowOutcome, ShopController};
use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::{Command, InteractiveLine};
use crate::output::{print_alerts, print_container, print_error, print_identity};

/// Controller plus the per-run output options.
pub struct App {
    controller: ShopController,
    page_out: Option<PathBuf>,
}

impl App {
    pub fn new(controller: ShopController, page_out: Option<PathBuf>) -> Self {
        Self {
            controller,
            page_out,
        }
    }

    /// Runs one command, prints what changed and returns how the flow ended.
    pub async fn run_command(&self, command: Command) -> Result<FlowOutcome> {
        debug!("Running command: {:?}", command);
        let outcome = match command {
            Command::Mood { text } => {
                self.controller
                    .set_input(ElementId::MoodInput, &text.join(" "))
                    .await;
                let outcome = with_spinner(
                    ElementId::AnalyzeMoodBtn.busy_label(),
                    self.controller.analyze_mood(),
                )
                .await;
                self.print(&[ElementId::SentimentAnalysis, ElementId::RecommendationsList])
                    .await;
                outcome
            }
            Command::Search { query, emotion } => {
                self.controller
                    .set_input(ElementId::SearchInput, &query.join(" "))
                    .await;
                let outcome = with_spinner(
                    ElementId::SearchBtn.busy_label(),
                    self.controller.search_with_emotion(emotion.as_deref()),
                )
                .await;
                self.print(&[ElementId::SearchResults]).await;
                outcome
            }
            Command::Catalog => {
                let outcome =
                    with_spinner("Loading products...", self.controller.load_catalog()).await;
                self.print(&[ElementId::ProductsList]).await;
                outcome
            }
            Command::View { id } => {
                let outcome =
                    with_spinner("Loading product...", self.controller.view_product(&id)).await;
                self.print(&[ElementId::ModalTitle, ElementId::ModalBody])
                    .await;
                // The terminal has no modal to dismiss.
                self.controller.close_modal().await;
                outcome
            }
            Command::Like { id } => self.controller.like_product(&id).await,
            Command::Cart { id } => self.controller.add_to_cart(&id).await,
            Command::Identity => {
                print_identity(self.controller.user_id());
                FlowOutcome::Completed
            }
        };

        print_alerts(&self.controller.take_alerts().await);
        self.write_page().await?;
        Ok(outcome)
    }

    /// Lets background tracking calls reach the backend before the process exits.
    pub async fn finish(&self) {
        self.controller.wait_for_tracking().await;
    }

    async fn print(&self, ids: &[ElementId]) {
        let page = self.controller.page().await;
        for &id in ids {
            print_container(&page, id);
        }
    }

    async fn write_page(&self) -> Result<()> {
        if let Some(path) = &self.page_out {
            let html = self.controller.render_page().await?;
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write page snapshot to {}", path.display()))?;
            debug!("Page snapshot written to {}", path.display());
        }
        Ok(())
    }

    /// Reads commands from stdin until `exit`, `quit` or end of input.
    pub async fn run_interactive(&self) -> Result<FlowOutcome> {
        info!("Starting interactive session for {}", self.controller.user_id());
        println!("Mood shop session for {}.", self.controller.user_id().bold());
        println!("Commands: mood, search, catalog, view, like, cart, identity. Type 'exit' or 'quit' to end the session.");
        println!();

        let mut last = FlowOutcome::Completed;
        loop {
            print!("{} ", ">".green().bold());
            io::stdout().flush().context("Failed to flush stdout")?;

            let mut input = String::new();
            let read = io::stdin()
                .read_line(&mut input)
                .context("Failed to read input")?;
            if read == 0 {
                break;
            }

            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                println!("Exiting session.");
                break;
            }

            match InteractiveLine::parse_line(input) {
                Ok(command) => last = self.run_command(command).await?,
                Err(e) => print_error(e.to_string().trim()),
            }
        }

        Ok(last)
    }
}

/// Shows a spinner with `message` while `flow` runs.
async fn with_spinner<F: Future<Output = FlowOutcome>>(message: &str, flow: F) -> FlowOutcome {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = flow.await;
    spinner.finish_and_clear();
    outcome
}
