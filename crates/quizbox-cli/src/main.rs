//! quizbox CLI — the user-facing command-line interface.

use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizbox", version, about = "Multiple-choice and true/false quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz in the terminal
    Play {
        /// Player name (default: from config, then "Guest")
        #[arg(long)]
        name: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the web front end's static assets
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        bind: Option<IpAddr>,

        /// Directory of static assets (default: ./public)
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the built-in questions
    List {
        /// Mark the correct option of each question
        #[arg(long)]
        answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizbox=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { name, config, json } => commands::play::execute(name, config, json),
        Commands::Serve {
            port,
            bind,
            assets,
            config,
        } => commands::serve::execute(port, bind, assets, config).await,
        Commands::List { answers, config } => commands::list::execute(config, answers),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
