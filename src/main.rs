use anyhow::Result;
use notes_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use notes_core::config::AppConfig;
use notes_core::domain::{
    note::{NoteReadRepository, NoteWriteRepository},
    user::UserRepository,
};
use notes_core::infrastructure::{
    database,
    repositories::{
        PostgresNoteReadRepository, PostgresNoteWriteRepository, PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, redis_session_store::RedisSessionRevocationStore,
        session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use notes_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
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
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let note_write_repo: Arc<dyn NoteWriteRepository> =
        Arc::new(PostgresNoteWriteRepository::new(pool.clone()));
    let note_read_repo: Arc<dyn NoteReadRepository> =
        Arc::new(PostgresNoteReadRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let session_store: Arc<dyn SessionRevocationStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session revocation store");
            Arc::new(RedisSessionRevocationStore::from_url(url, config.token_ttl())?)
        }
        None => {
            tracing::warn!("REDIS_URL not set, revoked sessions are kept in memory");
            Arc::new(InMemorySessionRevocationStore::new())
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        note_write_repo,
        note_read_repo,
        password_hasher,
        token_manager,
        session_store,
        clock,
        slugger,
    ));

    let app = build_router_with_options(
        HttpState { services },
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
            Ok(mut stream) => {
                stream.recv().await;
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
