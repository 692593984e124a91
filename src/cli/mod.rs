pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "latecomer")]
#[command(about = "Late Comer CLI - record and review late arrivals from the terminal")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "LATECOMER_API_URL",
        default_value = DEFAULT_SERVER,
        help = "Base URL of the Late Comer API"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check that the API is up")]
    Health,

    #[command(about = "Log in and print the session token")]
    Login(commands::login::LoginArgs),

    #[command(about = "List or record late entries")]
    Entries {
        #[command(subcommand)]
        cmd: commands::entries::EntryCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::Health => commands::health::handle(&client, output_format).await,
        Commands::Login(args) => commands::login::handle(&client, args, output_format).await,
        Commands::Entries { cmd } => commands::entries::handle(&client, cmd, output_format).await,
    }
}
