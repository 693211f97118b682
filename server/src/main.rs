mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let relay = services::formspree::FormspreeClient::new(&config.formspree).expect("form relay client init failed");
    tracing::info!(endpoint = relay.endpoint(), "form relay configured");

    let rate_limiter = rate_limit::RateLimiter::new(config.rate_limit);
    let state = state::AppState::new(relay, rate_limiter);

    let app = routes::leptos_app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "cashcue listening");
    axum::serve(listener, app).await.expect("server failed");
}
