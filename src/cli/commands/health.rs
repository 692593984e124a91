use crate::cli::client::ApiClient;
use crate::cli::utils::{output_json, output_success};
use crate::cli::OutputFormat;

pub async fn handle(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let health = client.health().await?;

    match output_format {
        OutputFormat::Json => output_json(&health),
        OutputFormat::Text => {
            let status = health["status"].as_str().unwrap_or("unknown");
            output_success(output_format, &format!("API is {}", status), None)
        }
    }
}
