use std::env;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edutech_admin::cli::{self, Cli};
use edutech_admin::{ApiClient, AppConfig, AuthService};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    setup_tracing();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Impossible de charger la configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Impossible d'initialiser le client HTTP: {}", e);
            std::process::exit(1);
        }
    };
    let auth = AuthService::new(&config);

    if let Err(e) = cli::run(cli, &client, &auth).await {
        // Le message inline qu'affichaient les pages
        eprintln!("Error: {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

/// Configure le tracing pour le logging structuré
fn setup_tracing() {
    let log_level = env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".into())
        .parse()
        .unwrap_or(tracing::Level::WARN);

    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".into());

    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with(if log_format == "json" {
            Box::new(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            ) as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        } else {
            Box::new(tracing_subscriber::fmt::layer().compact().with_target(false))
                as Box<dyn tracing_subscriber::Layer<_> + Send + Sync>
        });

    subscriber.init();
}
