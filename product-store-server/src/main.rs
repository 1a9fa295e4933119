use axum::routing::get;
use axum::Router;
use clap::{Parser, ValueHint};
use log::LevelFilter;
use reqwest::Url;
use std::num::NonZeroU16;
use tokio::signal;
use tower_http::trace::TraceLayer;

mod client;
mod routes;
mod store;

use client::SelfClient;
use routes::AppState;
use store::ProductStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .filter(Some("tower_http"), LevelFilter::Debug)
        .filter(Some("product_store_server"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let CliArgs {
        host,
        port,
        self_url,
    } = CliArgs::parse();

    log::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_version = product_store_api::api::VERSION;
        "Initializing server"
    );

    let listener = tokio::net::TcpListener::bind((host.as_str(), port.get())).await?;
    let local_addr = listener.local_addr()?;
    log::info!(
        addr:display = local_addr;
        "listening to TCP"
    );

    let client = match self_url {
        Some(url) => SelfClient::new(url),
        None => SelfClient::for_local_addr(local_addr)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
    };
    log::info!(base:display = client.base(); "forwarding routes call back to");

    let store = ProductStore::seeded();
    log::info!(count = store.len(); "seeded products");

    let state = AppState {
        store: store.into_shared(),
        client,
    };
    let router = Router::new()
        .merge(routes::routes(state))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http());

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[derive(Parser)]
struct CliArgs {
    /// The host address for the product store server.
    #[arg(
        long,
        value_name = "URI",
        value_hint = ValueHint::Hostname,
        default_value = "0.0.0.0",
        env = "PRODUCT_STORE_HOST",
    )]
    host: String,
    /// The host port for the product store server.
    #[arg(
        short,
        long,
        value_name = "PORT",
        value_hint = ValueHint::Other,
        default_value = "5000",
        env = "PRODUCT_STORE_PORT",
    )]
    port: NonZeroU16,
    /// The url the forwarding routes send their requests to.
    ///
    /// Defaults to the bound address, with `0.0.0.0` replaced by loopback.
    #[arg(
        long,
        value_name = "URL",
        value_hint = ValueHint::Url,
        env = "PRODUCT_STORE_SELF_URL",
    )]
    self_url: Option<Url>,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT (ctrl+c) handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("received SIGINT (ctrl+c), shutting down"),
        () = terminate => log::info!("received SIGTERM, shutting down"),
    }
}
