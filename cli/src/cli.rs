use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal client for the mood shop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read commands line by line, sharing one session
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    /// Base URL of the backend API, e.g. http://127.0.0.1:5000/api
    #[arg(long)]
    pub api_url: Option<String>,

    /// File holding the persisted user id
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Write a full page snapshot to this file after each command
    #[arg(long)]
    pub page_out: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Describe how you feel and get recommendations
    Mood {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Search products, optionally tagged with an emotion
    Search {
        #[arg(required = true)]
        query: Vec<String>,
        /// Emotion context to send along with the query
        #[arg(long)]
        emotion: Option<String>,
    },
    /// List every product
    Catalog,
    /// Show a product with similar products
    View { id: String },
    /// Like a product
    Like { id: String },
    /// Add a product to the cart
    Cart { id: String },
    /// Print the persisted user id
    Identity,
}

/// One line of interactive input, parsed with the same grammar as the command line.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct InteractiveLine {
    #[command(subcommand)]
    pub command: Command,
}

impl InteractiveLine {
    pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|l| l.command)
    }
}
