use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_entries, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum EntryCommands {
    #[command(about = "List all late entries")]
    List,

    #[command(about = "Record a late arrival")]
    Add(AddEntryArgs),
}

/// Flags double as the request body; field names match the API's.
#[derive(Debug, Args, Serialize)]
pub struct AddEntryArgs {
    #[arg(long, help = "Student name")]
    pub name: String,
    #[arg(long, help = "Roll number")]
    pub roll_no: String,
    #[arg(long, help = "Department")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
    #[arg(long, help = "Year of study")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[arg(long = "class", help = "Class or section")]
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[arg(long, help = "Mode of transport")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[arg(long, help = "Reason for arriving late")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[arg(long, help = "Staff member recording the entry")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<String>,
}

pub async fn handle(client: &ApiClient, cmd: EntryCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        EntryCommands::List => {
            let entries = client.list_entries().await?;
            output_entries(output_format, &entries)
        }
        EntryCommands::Add(args) => {
            let reply = client.add_entry(&args).await?;
            output_success(output_format, &reply.message, None)
        }
    }
}
