use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::chunk;
use crate::config::ServerConfig;
use crate::grid::{EntityGrid, EntityKind};
use crate::registry::ActorRegistry;

/// Start the two background sweeps. They share no ordering; each one takes
/// the lock it needs for a single pass and skips the iteration if the lock
/// is poisoned.
pub fn spawn_sweeps(
    registry: Arc<RwLock<ActorRegistry>>,
    grid: Arc<RwLock<EntityGrid>>,
    config: Arc<ServerConfig>,
) {
    let evict_registry = registry.clone();
    let expiry = Duration::from_millis(config.expiry_ms);
    let evict_interval = Duration::from_millis(config.evict_interval_ms);
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(evict_interval);
        loop {
            tick.tick().await;
            if let Ok(mut registry) = evict_registry.write() {
                registry.evict_expired(Instant::now(), expiry);
            }
        }
    });

    let gen_interval = Duration::from_millis(config.gen_interval_ms);
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(gen_interval);
        loop {
            tick.tick().await;
            let positions = match registry.read() {
                Ok(registry) => registry.positions(),
                Err(_) => continue,
            };
            let active = chunk::active_chunks(positions, config.chunk_size, config.active_radius);
            if let Ok(mut grid) = grid.write() {
                for key in active {
                    for kind in EntityKind::ALL {
                        grid.ensure_populated(key, kind, config.params(kind), config.chunk_size);
                    }
                }
            }
        }
    });
}
