use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;

use moodmate_api::{config::Config, rate_limit, router, store, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodmate_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    let addr = config.listen_addr();
    let session_idle = Duration::from_secs(config.chat_session_idle_secs);

    let state = AppState::new(config);

    // Purges stale per-IP counters every 5 min
    rate_limit::spawn_cleanup_worker(state.chat_limiter.clone());
    rate_limit::spawn_cleanup_worker(state.mood_limiter.clone());
    store::spawn_session_sweeper(state.chats.clone(), session_idle);

    let app = router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    // Client IP is needed by the chat rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
