use anyhow::Context;
use clap::Parser;

use stockbook_api::app::{build_app, build_services};
use stockbook_api::cli::{Cli, Command};
use stockbook_api::export::export_site;
use stockbook_infra::AppConfig;
use stockbook_inventory::record_ids;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.action();

    match command {
        Command::Serve { .. } => stockbook_observability::init(),
        _ => stockbook_observability::init_pretty(),
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = build_services(&config, cli.fixture.as_deref())?;

    match command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            tracing::info!("listening on {}", listener.local_addr()?);

            axum::serve(listener, build_app(services)).await?;
        }
        Command::Ids => {
            let records = services.load_records().await?;
            for id in record_ids(&records) {
                println!("{id}");
            }
        }
        Command::Export { out } => {
            let report = export_site(&services, &out, chrono::Utc::now().date_naive()).await?;
            if !report.skipped.is_empty() {
                tracing::warn!(skipped = ?report.skipped, "some records were not exported");
            }
        }
    }

    Ok(())
}
