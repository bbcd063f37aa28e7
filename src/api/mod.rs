mod router;
mod routes_tracking;
mod routes_world;
mod state;
mod types;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};

use crate::chunk;
use crate::grid::{EntityGrid, EntityKind};
use crate::registry::{ActorRegistry, Position};
use crate::sampler::EntityPoint;

use router::build_router;
use routes_tracking::*;
use routes_world::*;
use state::*;
use types::*;

/// The transport adapter: routes wired to shared registry/grid handles.
/// The caller owns the handles; the sweeps mutate through their own clones.
pub fn app(registry: Arc<RwLock<ActorRegistry>>, grid: Arc<RwLock<EntityGrid>>) -> Router {
    build_router(AppState { registry, grid })
}
