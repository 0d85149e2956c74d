use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod player;
mod retry_strategy;
mod session;

use config::Config;
use session::Croupier;

#[tokio::main]
async fn main() -> Result<()> {
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "json".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "croupier=info,roulette=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        service = "croupier",
        version = env!("CARGO_PKG_VERSION"),
        log_format = if use_json { "json" } else { "text" },
        "Starting croupier"
    );

    let config = Config::load()?;
    tracing::info!(
        pocket_count = config.table.pocket_count,
        seeded = config.table.seed.is_some(),
        rounds = config.croupier.rounds,
        player_count = config.croupier.player_count,
        bets_per_player = config.croupier.bets_per_player,
        "Configuration loaded"
    );

    if let Some(port) = config.metrics_port {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .context("Failed to install Prometheus exporter")?;
        tracing::info!(%addr, "Metrics exporter listening");
    }

    let json_summary = config.croupier.json_summary;
    let mut croupier = Croupier::new(config)?;
    let summaries = croupier.run().await?;

    let total_staked: f64 = summaries.iter().map(|s| s.total_staked).sum();
    let total_paid: f64 = summaries.iter().map(|s| s.total_paid).sum();
    tracing::info!(
        rounds = summaries.len(),
        total_staked,
        total_paid,
        player_net = summaries.iter().map(|s| s.player_net()).sum::<f64>(),
        "Session complete"
    );

    if json_summary {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }

    Ok(())
}
