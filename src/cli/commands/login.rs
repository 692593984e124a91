use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(help = "Username")]
    pub username: String,
    #[arg(long, env = "LATECOMER_PASSWORD", help = "Password (prompts on stdin if not provided; the prompt echoes input)")]
    pub password: Option<String>,
}

pub async fn handle(client: &ApiClient, args: LoginArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let session = client.login(&args.username, &password).await?;

    output_success(
        output_format,
        &format!("Logged in as {} ({})", session.username, session.role),
        Some(json!({
            "username": session.username,
            "role": session.role,
            "token": session.token,
        })),
    )?;

    if output_format == OutputFormat::Text {
        println!("Token: {}", session.token);
    }
    Ok(())
}

/// Reads a line from stdin. Input is echoed.
fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
