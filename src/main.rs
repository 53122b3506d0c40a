use anyhow::Result;
use craftstore::application::{
    ApplicationServices, ServiceDependencies,
    ports::{ClockPort, SlugGeneratorPort, TokenVerifierPort},
};
use craftstore::config::AppConfig;
use craftstore::domain::{
    category::CategoryRepository,
    enquiry::EnquiryRepository,
    product::{ProductReadRepository, ProductWriteRepository, services::EnquiryLinkBuilder},
    validation::InputValidator,
};
use craftstore::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresEnquiryRepository, PostgresProductReadRepository,
        PostgresProductWriteRepository,
    },
    security::StaticTokenVerifier,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use craftstore::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let product_write_repo: Arc<dyn ProductWriteRepository> =
        Arc::new(PostgresProductWriteRepository::new(pool.clone()));
    let product_read_repo: Arc<dyn ProductReadRepository> =
        Arc::new(PostgresProductReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let enquiry_repo: Arc<dyn EnquiryRepository> =
        Arc::new(PostgresEnquiryRepository::new(pool.clone()));

    let token_verifier: Arc<TokenVerifierPort> =
        Arc::new(StaticTokenVerifier::new(config.admin_api_token()));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        product_write_repo,
        product_read_repo,
        category_repo,
        enquiry_repo,
        token_verifier,
        clock,
        slugger,
        validator: InputValidator::new(config.validation_limits()),
        enquiry_links: EnquiryLinkBuilder::new(config.whatsapp_phone()),
    }));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
