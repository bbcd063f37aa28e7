use rand::Rng;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct EntityPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Draw up to `count` points inside one chunk, rejecting candidates closer
/// than `min_distance` (on the x-z plane) to a point already accepted in
/// this call. Best-effort: gives up after `max_tries` total draws, so the
/// result may be shorter than `count`. Spacing holds only among the
/// returned points, not against neighboring chunks or other kinds.
pub fn sample_points<R: Rng>(
    rng: &mut R,
    origin_x: f64,
    origin_z: f64,
    chunk_size: f64,
    count: usize,
    min_distance: f64,
    y: f64,
    max_tries: u32,
) -> Vec<EntityPoint> {
    let mut points: Vec<EntityPoint> = Vec::with_capacity(count);
    let min_sq = min_distance * min_distance;
    let mut tries = 0u32;
    while points.len() < count && tries < max_tries {
        tries += 1;
        let x = rng.gen_range(origin_x..origin_x + chunk_size);
        let z = rng.gen_range(origin_z..origin_z + chunk_size);
        let too_close = points.iter().any(|p| {
            let dx = p.x - x;
            let dz = p.z - z;
            dx * dx + dz * dz < min_sq
        });
        if !too_close {
            points.push(EntityPoint { x, y, z });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn dist(a: &EntityPoint, b: &EntityPoint) -> f64 {
        let dx = a.x - b.x;
        let dz = a.z - b.z;
        (dx * dx + dz * dz).sqrt()
    }

    #[test]
    fn accepted_points_respect_min_distance() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let points = sample_points(&mut rng, 0.0, 0.0, 16.0, 5, 3.0, 0.5, 50);
            for i in 0..points.len() {
                for j in (i + 1)..points.len() {
                    assert!(
                        dist(&points[i], &points[j]) >= 3.0,
                        "seed {} produced points closer than 3.0",
                        seed
                    );
                }
            }
        }
    }

    #[test]
    fn points_stay_inside_the_chunk() {
        let mut rng = SmallRng::seed_from_u64(7);
        let points = sample_points(&mut rng, -32.0, 16.0, 16.0, 8, 0.0, 1.0, 64);
        assert_eq!(points.len(), 8);
        for p in &points {
            assert!(p.x >= -32.0 && p.x < -16.0);
            assert!(p.z >= 16.0 && p.z < 32.0);
            assert_eq!(p.y, 1.0);
        }
    }

    #[test]
    fn never_returns_more_than_count() {
        let mut rng = SmallRng::seed_from_u64(11);
        let points = sample_points(&mut rng, 0.0, 0.0, 16.0, 3, 0.0, 0.5, 1000);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn impossible_spacing_returns_fewer_points() {
        // a 4-unit chunk cannot hold ten points 100 apart
        let mut rng = SmallRng::seed_from_u64(3);
        let points = sample_points(&mut rng, 0.0, 0.0, 4.0, 10, 100.0, 0.5, 200);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn zero_tries_yields_nothing() {
        let mut rng = SmallRng::seed_from_u64(1);
        let points = sample_points(&mut rng, 0.0, 0.0, 16.0, 4, 1.0, 0.5, 0);
        assert!(points.is_empty());
    }
}
