mod config;
mod routes;
mod state;

use leptos::config::get_configuration;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    tracing::info!(
        backend = %config.backend_url,
        timeout_secs = config.proxy_timeout_secs,
        max_body_bytes = config.max_body_bytes,
        "api proxy configured"
    );
    let state = state::AppState::new(config).expect("http client init failed");

    let conf = get_configuration(None).expect("leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let app = routes::app(state, conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");
    tracing::info!(%addr, "jobboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
