use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use moments_api::{app, AppState, NotificationSettings};
use moments_catalog::Catalog;
use moments_core::{AdminGate, Notifier, RequestRepository};
use moments_store::{
    app_config::Config, DbClient, InMemoryRequestRepository, NoopNotifier, PgRequestRepository,
    ResendNotifier,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "moments_api=debug,moments_store=info,tower_http=debug,axum::rejection=trace";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Moments API on port {}", config.server.port);

    // Storage
    let requests: Arc<dyn RequestRepository> = match &config.database.url {
        Some(url) => {
            let db = DbClient::new(url).await.context("Failed to connect to Postgres")?;
            if config.database.run_migrations {
                db.migrate().await.context("Failed to run migrations")?;
            }
            Arc::new(PgRequestRepository::new(db.pool))
        }
        None => {
            tracing::warn!("No database.url configured, booking requests are kept in memory only");
            Arc::new(InMemoryRequestRepository::new())
        }
    };

    // Email
    let notifier: Arc<dyn Notifier> = match &config.notification.api_key {
        Some(key) => Arc::new(
            ResendNotifier::new(&config.notification.base_url, key)
                .context("Failed to build email client")?,
        ),
        None => Arc::new(NoopNotifier),
    };
    if config.notification.recipient.is_none() {
        tracing::info!("No notification.recipient configured, booking emails are disabled");
    }

    let admin = AdminGate::new(config.admin.password.clone());
    if !admin.is_configured() {
        tracing::warn!("No admin password configured, admin endpoints will answer 500");
    }

    let app_state = AppState {
        requests,
        notifier,
        notification: NotificationSettings {
            recipient: config.notification.recipient.clone(),
            from: config.notification.from.clone(),
        },
        admin,
        catalog: Arc::new(Catalog::default()),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
