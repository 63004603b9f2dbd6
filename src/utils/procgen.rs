//! Procedural placement of flowers in a garden.

use bevy::prelude::*;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::resources::GardenConfig;

/// Candidates tried per flower before settling for a crowded spot.
const MAX_PLACEMENT_ATTEMPTS: usize = 30;

/// Scatters `config.flower_count` points uniformly over a disc of
/// `config.radius` around the origin.
///
/// Each point is re-rolled up to [`MAX_PLACEMENT_ATTEMPTS`] times to keep it
/// at least `config.min_spacing` from earlier points; a garden too dense for
/// that still gets every flower, just closer together. The same seed always
/// yields the same layout.
pub fn scatter_positions(config: &GardenConfig) -> Vec<Vec2> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Vec2> = Vec::with_capacity(config.flower_count);
    let min_spacing_sq = config.min_spacing * config.min_spacing;

    for _ in 0..config.flower_count {
        let mut candidate = random_in_disc(&mut rng, config.radius);
        for _ in 1..MAX_PLACEMENT_ATTEMPTS {
            let crowded = positions
                .iter()
                .any(|p| p.distance_squared(candidate) < min_spacing_sq);
            if !crowded {
                break;
            }
            candidate = random_in_disc(&mut rng, config.radius);
        }
        positions.push(candidate);
    }

    positions
}

fn random_in_disc(rng: &mut impl Rng, radius: f32) -> Vec2 {
    // sqrt keeps the density uniform over the area
    let r = radius * rng.gen::<f32>().sqrt();
    let theta = rng.gen::<f32>() * TAU;
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(flower_count: usize, seed: u64) -> GardenConfig {
        GardenConfig {
            flower_count,
            seed,
            radius: 400.0,
            min_spacing: 20.0,
            ..default()
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        assert_eq!(scatter_positions(&config(10, 3)), scatter_positions(&config(10, 3)));
        assert_ne!(scatter_positions(&config(10, 3)), scatter_positions(&config(10, 4)));
    }

    #[test]
    fn test_scatter_stays_in_radius() {
        let positions = scatter_positions(&config(50, 11));
        assert_eq!(positions.len(), 50);
        assert!(positions.iter().all(|p| p.length() <= 400.0 + 1e-3));
    }

    #[test]
    fn test_sparse_garden_respects_spacing() {
        let positions = scatter_positions(&config(5, 1));
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) >= 20.0);
            }
        }
    }

    #[test]
    fn test_overcrowded_garden_still_plants_everything() {
        let crowded = GardenConfig {
            flower_count: 20,
            radius: 10.0,
            min_spacing: 100.0,
            ..default()
        };
        assert_eq!(scatter_positions(&crowded).len(), 20);
    }

    #[test]
    fn test_zero_radius_plants_at_origin() {
        let config = GardenConfig {
            flower_count: 3,
            radius: 0.0,
            ..default()
        };
        assert!(scatter_positions(&config).iter().all(|p| *p == Vec2::ZERO));
    }
}
