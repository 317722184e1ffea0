use crate::config::Config;
use crate::startup::AppState;
use crate::votes::{cast_vote, index};
use axum::{
    Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

mod config;
mod db;
mod error;
mod startup;
mod votes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "INFO");
        }
    }
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Invalid environment configuration");

    // Pool creation and schema bootstrap must both finish before the
    // listener opens; a failure here is fatal.
    let app_state = AppState::new(&config)
        .await
        .expect("Unable to initialize database");

    // build our application with a route
    let app = Router::new()
        .route("/", get(index).post(cast_vote))
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .fallback(handler_404);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Unable to spawn tcp listener");

    axum::serve(listener, app).await.unwrap();
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
