mod api;
mod chunk;
mod config;
mod grid;
mod registry;
mod sampler;
mod sweep;

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use grid::EntityGrid;
use registry::ActorRegistry;

#[tokio::main]
async fn main() {
    let config = Arc::new(config::load());
    let registry = Arc::new(RwLock::new(ActorRegistry::default()));
    let grid = Arc::new(RwLock::new(EntityGrid::new()));

    sweep::spawn_sweeps(registry.clone(), grid.clone(), config.clone());

    let app = api::app(registry, grid);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    println!("[Waypost] Listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
