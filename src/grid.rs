use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::chunk::ChunkKey;
use crate::config::SpawnParams;
use crate::sampler::{sample_points, EntityPoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Container,
    Coin,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Container, EntityKind::Coin];
}

type ChunkMap = HashMap<ChunkKey, Vec<EntityPoint>>;

/// Procedural world entities, one chunk map per kind. A chunk is generated
/// the first time it turns active and the result is kept verbatim for the
/// life of the process, so revisiting clients always see the same layout.
pub struct EntityGrid {
    kinds: HashMap<EntityKind, ChunkMap>,
    rng: SmallRng,
}

impl EntityGrid {
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            kinds: HashMap::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate and store `kind` entities for `key` unless the slot already
    /// exists. First write wins; an existing chunk is never touched again.
    pub fn ensure_populated(
        &mut self,
        key: ChunkKey,
        kind: EntityKind,
        params: &SpawnParams,
        chunk_size: f64,
    ) {
        if self
            .kinds
            .get(&kind)
            .is_some_and(|chunks| chunks.contains_key(&key))
        {
            return;
        }
        let points = sample_points(
            &mut self.rng,
            key.0 as f64 * chunk_size,
            key.1 as f64 * chunk_size,
            chunk_size,
            params.count,
            params.min_distance,
            params.y,
            params.max_tries,
        );
        self.kinds.entry(kind).or_default().insert(key, points);
    }

    /// Point-in-time copy of every generated chunk for one kind.
    pub fn snapshot(&self, kind: EntityKind) -> ChunkMap {
        self.kinds.get(&kind).cloned().unwrap_or_default()
    }
}
