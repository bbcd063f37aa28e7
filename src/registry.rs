use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy)]
struct Actor {
    pos: Position,
    last_seen: Instant,
}

/// Live actors keyed by client identity. Entries only exist while the
/// client keeps updating; the eviction sweep removes the rest.
#[derive(Default)]
pub struct ActorRegistry {
    actors: HashMap<String, Actor>,
}

impl ActorRegistry {
    /// Insert or fully replace an actor's position and freshness stamp.
    pub fn upsert(&mut self, id: String, pos: Position, now: Instant) {
        self.actors.insert(
            id,
            Actor {
                pos,
                last_seen: now,
            },
        );
    }

    /// Point-in-time copy of every live position, without freshness stamps.
    pub fn snapshot(&self) -> HashMap<String, Position> {
        self.actors
            .iter()
            .map(|(id, actor)| (id.clone(), actor.pos))
            .collect()
    }

    /// The (x, z) pairs the generation sweep resolves into active chunks.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.actors
            .values()
            .map(|actor| (actor.pos.x, actor.pos.z))
            .collect()
    }

    /// Drop every actor not seen for longer than `expiry`. An actor exactly
    /// at the threshold stays.
    pub fn evict_expired(&mut self, now: Instant, expiry: Duration) {
        self.actors
            .retain(|_, actor| now.saturating_duration_since(actor.last_seen) <= expiry);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64, z: f64) -> Position {
        Position { x, y, z }
    }

    #[test]
    fn upsert_overwrites_whole_position() {
        let mut registry = ActorRegistry::default();
        let t0 = Instant::now();
        registry.upsert("p1".to_string(), pos(1.0, 2.0, 3.0), t0);
        registry.upsert("p1".to_string(), pos(4.0, 5.0, 6.0), t0);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot["p1"], pos(4.0, 5.0, 6.0));
    }

    #[test]
    fn snapshot_holds_every_live_actor() {
        let mut registry = ActorRegistry::default();
        let t0 = Instant::now();
        registry.upsert("p1".to_string(), pos(1.0, 0.0, 1.0), t0);
        registry.upsert("p2".to_string(), pos(2.0, 0.0, 2.0), t0);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["p2"], pos(2.0, 0.0, 2.0));
    }

    #[test]
    fn eviction_removes_only_stale_actors() {
        let mut registry = ActorRegistry::default();
        let t0 = Instant::now();
        let expiry = Duration::from_millis(5000);
        registry.upsert("stale".to_string(), pos(0.0, 0.0, 0.0), t0);
        registry.upsert(
            "fresh".to_string(),
            pos(1.0, 0.0, 1.0),
            t0 + Duration::from_millis(3000),
        );
        registry.evict_expired(t0 + Duration::from_millis(5001), expiry);
        let snapshot = registry.snapshot();
        assert!(!snapshot.contains_key("stale"));
        assert!(snapshot.contains_key("fresh"));
    }

    #[test]
    fn actor_exactly_at_threshold_survives() {
        let mut registry = ActorRegistry::default();
        let t0 = Instant::now();
        let expiry = Duration::from_millis(5000);
        registry.upsert("p1".to_string(), pos(0.0, 0.0, 0.0), t0);
        registry.evict_expired(t0 + expiry, expiry);
        assert!(registry.snapshot().contains_key("p1"));
    }

    #[test]
    fn fresh_update_resets_the_clock() {
        let mut registry = ActorRegistry::default();
        let t0 = Instant::now();
        let expiry = Duration::from_millis(5000);
        registry.upsert("p1".to_string(), pos(0.0, 0.0, 0.0), t0);
        registry.upsert(
            "p1".to_string(),
            pos(9.0, 0.0, 9.0),
            t0 + Duration::from_millis(4000),
        );
        registry.evict_expired(t0 + Duration::from_millis(6000), expiry);
        assert_eq!(registry.snapshot()["p1"], pos(9.0, 0.0, 9.0));
    }
}
