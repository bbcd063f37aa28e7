use std::collections::HashSet;

pub type ChunkKey = (i32, i32);

/// Home chunk of a world-space (x, z) coordinate. Floor semantics: a point
/// sitting exactly on `cx * chunk_size` belongs to chunk `cx`.
pub fn chunk_at(x: f64, z: f64, chunk_size: f64) -> ChunkKey {
    (
        (x / chunk_size).floor() as i32,
        (z / chunk_size).floor() as i32,
    )
}

/// Wire form of a chunk key, used as the JSON object key.
pub fn key_label(key: ChunkKey) -> String {
    format!("{},{}", key.0, key.1)
}

/// Every chunk within `radius` (grid distance, inclusive) of any of the
/// given positions. This only decides what gets populated; chunks falling
/// out of the set are never torn down.
pub fn active_chunks<I>(positions: I, chunk_size: f64, radius: i32) -> HashSet<ChunkKey>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut out = HashSet::new();
    for (x, z) in positions {
        let (cx, cz) = chunk_at(x, z, chunk_size);
        for dz in -radius..=radius {
            for dx in -radius..=radius {
                out.insert((cx + dx, cz + dz));
            }
        }
    }
    out
}
