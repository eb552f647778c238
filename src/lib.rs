use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod services;
pub mod store;

use config::Config;
use rate_limit::RateLimitState;
use store::{ChatSessionStore, MoodStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub moods: MoodStore,
    pub chats: ChatSessionStore,
    pub chat_limiter: RateLimitState,
    pub mood_limiter: RateLimitState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let chat_limiter =
            RateLimitState::new(config.chat_rate_limit_max, config.chat_rate_limit_window_secs);
        let mood_limiter =
            RateLimitState::new(config.mood_rate_limit_max, config.mood_rate_limit_window_secs);
        Self {
            moods: MoodStore::with_max_entries(config.mood_max_entries_per_user),
            chats: ChatSessionStore::new(),
            chat_limiter,
            mood_limiter,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let chat_routes = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/chat/sessions", post(handlers::chat::create_session))
        .route(
            "/api/chat/sessions/:id/messages",
            post(handlers::chat::post_message),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_chat,
        ));

    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Sentiment & mood log
        .route("/api/analyze", post(handlers::moods::analyze))
        .route(
            "/api/users/:user_id/moods",
            post(handlers::moods::log_mood)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    rate_limit::rate_limit_moods,
                ))
                .get(handlers::moods::list_moods),
        )
        // Insights
        .route(
            "/api/users/:user_id/summary",
            get(handlers::insights::user_summary),
        )
        .route(
            "/api/users/:user_id/insights",
            get(handlers::insights::user_insights),
        )
        .route(
            "/api/insights/summary",
            post(handlers::insights::summarize_records),
        )
        .route(
            "/api/insights/narrate",
            post(handlers::insights::narrate_records),
        )
        // Chat transcripts
        .route("/api/chat/sessions/:id", get(handlers::chat::get_session))
        // Resources
        .route("/api/tips", get(handlers::resources::get_tips))
        .route("/api/emergency", get(handlers::resources::get_emergency))
        // Admin
        .route("/api/admin/clients", get(handlers::admin::list_clients))
        .merge(chat_routes);

    Router::new()
        .merge(routes)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
