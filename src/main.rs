//! Chit fund tracking service entry point.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chitfund::adapters::http::{api_router, AccountAppState, PlanAppState};
use chitfund::adapters::postgres::{
    PostgresAccountRepository, PostgresAuditLog, PostgresPaymentLedger, PostgresPlanRepository,
};
use chitfund::application::handlers::account::AccountLockRegistry;
use chitfund::config::AppConfig;
use chitfund::ports::EventPublisher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = ?config.server.environment, "starting chitfund service");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let accounts = Arc::new(PostgresAccountRepository::new(pool.clone()));
    let plans = Arc::new(PostgresPlanRepository::new(pool.clone()));
    let ledger = Arc::new(PostgresPaymentLedger::new(pool.clone()));
    let event_publisher: Arc<dyn EventPublisher> = Arc::new(PostgresAuditLog::new(pool.clone()));

    let account_state = AccountAppState {
        accounts,
        plans: plans.clone(),
        ledger,
        event_publisher,
        locks: Arc::new(AccountLockRegistry::new()),
    };
    let plan_state = PlanAppState { plans };

    let app = api_router(account_state, plan_state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr();
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
