use athos_client::cli::{render_error, run, Cli};
use athos_client::config::get_configuration;
use athos_client::AppState;
use athos_core::observability::{init_tracing, shutdown_tracing};
use clap::Parser;
use dotenvy::dotenv;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let cli = Cli::parse();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "athos",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    )?;

    let state = AppState::from_settings(&configuration)
        .map_err(|e| anyhow::anyhow!("Failed to build API client: {}", e))?;

    tracing::debug!(
        base_url = %state.api.base_url(),
        timezone = %state.api.timezone(),
        "Client configured"
    );

    let outcome = run(cli.command, &state).await;
    shutdown_tracing();

    match outcome {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output.body)?);
            if let Some(request_id) = output.request_id {
                eprintln!("request id: {}", request_id);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
