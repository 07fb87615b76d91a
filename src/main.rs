use std::net::SocketAddr;

use orderledger::{AppState, config, routes, store};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let state = AppState {
        store: store::for_variant(settings.variant),
        settings: settings.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((
        settings.host.parse::<std::net::IpAddr>().unwrap(),
        settings.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!("listening on http://{}", addr);
    tracing::info!("store: {}", settings.variant.banner());

    axum::serve(listener, app).await.unwrap();
}
