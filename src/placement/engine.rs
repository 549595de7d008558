//! Randomized placement with repulsion
//!
//! Each circle gets up to `max_placement_attempts` candidates. A candidate that
//! hits already placed circles produces a nudge vector pointing away from the
//! centroid of everything it hit, so the next candidate drifts toward open
//! space. After `max_nudge_attempts` nudges in a row the search restarts from
//! a uniform random point. Worst case is O(count² · attempts), fine for the
//! counts the page accepts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::{Area, PlacementConfig, Rgb, derive_color};
use crate::error::PlacementError;

/// A placed circle. Radius is shared and lives in `PlacementConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    pub color: Rgb,
}

/// Deterministic RNG for reproducible layouts
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// `place` with a fresh `Pcg32` seeded from `seed`
pub fn place_seeded(
    count: usize,
    area: &Area,
    config: &PlacementConfig,
    seed: u64,
) -> Result<Vec<Circle>, PlacementError> {
    place(count, area, config, &mut seeded_rng(seed))
}

/// Place `count` mutually non-overlapping circles inside `area`.
///
/// All or nothing: either every circle is placed or an error is returned.
pub fn place<R: Rng + ?Sized>(
    count: usize,
    area: &Area,
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Vec<Circle>, PlacementError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    area.validate()?;
    config.validate()?;

    if !area.fits(config.radius) {
        log::warn!(
            "Surface {}x{} too small for radius {}",
            area.width,
            area.height,
            config.radius
        );
        return Err(PlacementError::Infeasible {
            placed: 0,
            requested: count,
        });
    }

    let mut circles: Vec<Circle> = Vec::new();
    for index in 0..count {
        let Some((pos, attempts)) = find_spot(&circles, area, config, rng, |_, _| {}) else {
            log::warn!(
                "Gave up on circle {} of {} after {} attempts",
                index + 1,
                count,
                config.max_placement_attempts
            );
            return Err(PlacementError::Infeasible {
                placed: index,
                requested: count,
            });
        };

        log::debug!("Circle {} placed at {} after {} attempts", index, pos, attempts);
        circles.push(Circle {
            pos,
            color: derive_color(pos, area),
        });
    }

    Ok(circles)
}

/// How a candidate center was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Draw {
    /// Fresh uniform point in the inset rectangle
    Uniform,
    /// Previous candidate plus the nudge vector
    Nudged,
}

/// Search for a free center. Returns the center and the attempts used, or
/// `None` once the budget is spent. `on_candidate` sees every candidate.
fn find_spot<R, F>(
    placed: &[Circle],
    area: &Area,
    config: &PlacementConfig,
    rng: &mut R,
    mut on_candidate: F,
) -> Option<(Vec2, u32)>
where
    R: Rng + ?Sized,
    F: FnMut(Draw, Vec2),
{
    let radius = config.radius;
    let min_distance = config.min_distance();

    let mut candidate = Vec2::ZERO;
    let mut nudge: Option<Vec2> = None;
    let mut nudges = 0;

    for attempt in 1..=config.max_placement_attempts {
        let (draw, next) = match nudge {
            Some(step) if nudges < config.max_nudge_attempts => {
                nudges += 1;
                (Draw::Nudged, area.resample_outside(candidate + step, radius, rng))
            }
            _ => {
                nudges = 0;
                (Draw::Uniform, area.sample_inset(radius, rng))
            }
        };
        candidate = next;
        on_candidate(draw, candidate);

        let Some(centroid) = collision_centroid(placed, candidate, min_distance) else {
            return Some((candidate, attempt));
        };
        nudge = nudge_vector(candidate, centroid, config, rng);
    }

    None
}

/// Mean center of every placed circle within `min_distance` of `candidate`,
/// or `None` if nothing collides
fn collision_centroid(placed: &[Circle], candidate: Vec2, min_distance: f32) -> Option<Vec2> {
    let (sum, hits) = placed
        .iter()
        .filter(|c| c.pos.distance(candidate) <= min_distance)
        .fold((Vec2::ZERO, 0u32), |(sum, n), c| (sum + c.pos, n + 1));

    (hits > 0).then(|| sum / hits as f32)
}

/// Step away from `centroid`, a diameter plus a random overshoot.
///
/// `None` when the candidate sits exactly on the centroid (no direction);
/// the caller then resamples uniformly.
fn nudge_vector<R: Rng + ?Sized>(
    candidate: Vec2,
    centroid: Vec2,
    config: &PlacementConfig,
    rng: &mut R,
) -> Option<Vec2> {
    let away = (candidate - centroid).try_normalize()?;
    let length = config.nudge_base() + rng.random::<f32>() * config.nudge_variance;
    Some(away * length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_valid_layout(circles: &[Circle], area: &Area, config: &PlacementConfig) {
        let min = config.min_distance();
        for (i, a) in circles.iter().enumerate() {
            assert!(
                area.inset_contains(a.pos, config.radius),
                "circle {i} at {} out of bounds",
                a.pos
            );
            for b in &circles[i + 1..] {
                let d = a.pos.distance(b.pos);
                assert!(d >= min, "{} and {} only {d} apart", a.pos, b.pos);
            }
        }
    }

    fn circle_at(x: f32, y: f32) -> Circle {
        Circle {
            pos: Vec2::new(x, y),
            color: Rgb::new(200, 155, 155),
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let config = PlacementConfig::default();
        let circles = place_seeded(0, &Area::new(500.0, 500.0), &config, 1).unwrap();
        assert!(circles.is_empty());

        // Even on a surface too small for a single circle
        let circles = place_seeded(0, &Area::new(10.0, 10.0), &config, 1).unwrap();
        assert!(circles.is_empty());
    }

    #[test]
    fn test_single_circle_in_bounds() {
        let config = PlacementConfig::default();
        let area = Area::new(500.0, 500.0);
        for seed in 0..50 {
            let circles = place_seeded(1, &area, &config, seed).unwrap();
            assert_eq!(circles.len(), 1);
            let p = circles[0].pos;
            assert!((20.0..=480.0).contains(&p.x));
            assert!((20.0..=480.0).contains(&p.y));
        }
    }

    #[test]
    fn test_eighty_on_default_surface_all_or_nothing() {
        let config = PlacementConfig::default();
        let area = Area::new(500.0, 500.0);
        for seed in 0..5 {
            match place_seeded(80, &area, &config, seed) {
                Ok(circles) => {
                    assert_eq!(circles.len(), 80);
                    assert_valid_layout(&circles, &area, &config);
                }
                Err(PlacementError::Infeasible { placed, requested }) => {
                    assert!(placed < 80);
                    assert_eq!(requested, 80);
                }
                Err(other) => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_overfull_surface_fails_within_budget() {
        let config = PlacementConfig::default();
        // Inset is 60x60: only a handful of 45px-spaced centers fit
        let result = place_seeded(80, &Area::new(100.0, 100.0), &config, 42);
        match result {
            Err(PlacementError::Infeasible { placed, requested }) => {
                assert!(placed >= 1 && placed < 10);
                assert_eq!(requested, 80);
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_surface_smaller_than_circle() {
        let config = PlacementConfig::default();
        let result = place_seeded(1, &Area::new(30.0, 500.0), &config, 0);
        assert_eq!(
            result,
            Err(PlacementError::Infeasible {
                placed: 0,
                requested: 1
            })
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let config = PlacementConfig::default();
        assert!(matches!(
            place_seeded(3, &Area::new(-5.0, 500.0), &config, 0),
            Err(PlacementError::InvalidArea { .. })
        ));

        let bad = PlacementConfig {
            max_placement_attempts: 0,
            ..config
        };
        assert!(matches!(
            place_seeded(3, &Area::new(500.0, 500.0), &bad, 0),
            Err(PlacementError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = PlacementConfig::default();
        let area = Area::new(640.0, 480.0);
        let a = place_seeded(30, &area, &config, 99).unwrap();
        let b = place_seeded(30, &area, &config, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_colors_follow_positions() {
        let config = PlacementConfig::default();
        let area = Area::new(500.0, 500.0);
        for c in place_seeded(20, &area, &config, 5).unwrap() {
            assert_eq!(c.color, derive_color(c.pos, &area));
        }
    }

    #[test]
    fn test_dense_packing_with_nudges_stays_valid() {
        // Small surface with a generous budget forces long nudge chains
        let config = PlacementConfig {
            max_placement_attempts: 5000,
            ..PlacementConfig::default()
        };
        let area = Area::new(260.0, 260.0);
        for seed in 0..10 {
            if let Ok(circles) = place_seeded(16, &area, &config, seed) {
                assert_eq!(circles.len(), 16);
                assert_valid_layout(&circles, &area, &config);
            }
        }
    }

    /// Record how every candidate of one `find_spot` call was drawn
    fn trace_search(
        placed: &[Circle],
        area: &Area,
        config: &PlacementConfig,
        seed: u64,
    ) -> (Option<(Vec2, u32)>, Vec<(Draw, Vec2)>) {
        let mut draws = Vec::new();
        let mut rng = seeded_rng(seed);
        let found = find_spot(placed, area, config, &mut rng, |draw, pos| draws.push((draw, pos)));
        (found, draws)
    }

    /// 3x3 grid 30px apart over the 100x100 inset: every candidate collides
    fn blocked_surface() -> (Area, Vec<Circle>) {
        let mut placed = Vec::new();
        for y in [20.0, 50.0, 80.0] {
            for x in [20.0, 50.0, 80.0] {
                placed.push(circle_at(x, y));
            }
        }
        (Area::new(100.0, 100.0), placed)
    }

    #[test]
    fn test_budget_is_exact_candidate_count() {
        let (area, placed) = blocked_surface();
        for budget in [1, 2, 3, 25] {
            let config = PlacementConfig {
                max_placement_attempts: budget,
                ..PlacementConfig::default()
            };
            let (found, draws) = trace_search(&placed, &area, &config, 8);
            assert_eq!(found, None);
            assert_eq!(draws.len(), budget as usize);
            assert_eq!(draws[0].0, Draw::Uniform);
        }
    }

    #[test]
    fn test_resample_after_nudge_limit() {
        let (area, placed) = blocked_surface();
        let config = PlacementConfig {
            max_placement_attempts: 25,
            max_nudge_attempts: 10,
            ..PlacementConfig::default()
        };
        let (_, draws) = trace_search(&placed, &area, &config, 21);

        // U, 10 x N, U, 10 x N, U, 2 x N
        let kinds: Vec<Draw> = draws.iter().map(|(d, _)| *d).collect();
        let uniform_at: Vec<usize> = kinds
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == Draw::Uniform)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(uniform_at, vec![0, 11, 22]);

        for (_, pos) in &draws {
            assert!(area.inset_contains(*pos, config.radius), "{pos} outside inset");
        }
    }

    #[test]
    fn test_zero_nudge_limit_always_resamples() {
        let (area, placed) = blocked_surface();
        let config = PlacementConfig {
            max_placement_attempts: 6,
            max_nudge_attempts: 0,
            ..PlacementConfig::default()
        };
        let (_, draws) = trace_search(&placed, &area, &config, 4);
        assert!(draws.iter().all(|(d, _)| *d == Draw::Uniform));
    }

    #[test]
    fn test_degenerate_nudge_falls_back_to_resample() {
        // Inset is the single point (20, 20), already taken: every candidate
        // lands on the centroid, so no nudge direction exists
        let area = Area::new(40.0, 40.0);
        let placed = [circle_at(20.0, 20.0)];
        let config = PlacementConfig {
            max_placement_attempts: 5,
            ..PlacementConfig::default()
        };
        let (found, draws) = trace_search(&placed, &area, &config, 2);
        assert_eq!(found, None);
        assert_eq!(draws.len(), 5);
        assert!(
            draws
                .iter()
                .all(|(d, pos)| *d == Draw::Uniform && *pos == Vec2::new(20.0, 20.0))
        );
    }

    #[test]
    fn test_first_free_candidate_accepted() {
        let area = Area::new(500.0, 500.0);
        let config = PlacementConfig::default();
        let (found, draws) = trace_search(&[], &area, &config, 13);
        let (pos, attempts) = found.unwrap();
        assert_eq!(attempts, 1);
        assert_eq!(draws, vec![(Draw::Uniform, pos)]);
    }

    #[test]
    fn test_huge_count_reports_infeasible() {
        let config = PlacementConfig {
            max_placement_attempts: 3,
            ..PlacementConfig::default()
        };
        let result = place_seeded(usize::MAX, &Area::new(100.0, 100.0), &config, 0);
        assert!(matches!(
            result,
            Err(PlacementError::Infeasible {
                requested: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_collision_centroid() {
        let placed = [circle_at(100.0, 100.0), circle_at(200.0, 100.0)];

        // Touching exactly at min distance still collides
        assert_eq!(
            collision_centroid(&placed, Vec2::new(145.0, 100.0), 45.0),
            Some(Vec2::new(100.0, 100.0))
        );
        assert_eq!(
            collision_centroid(&placed, Vec2::new(150.0, 100.0), 60.0),
            Some(Vec2::new(150.0, 100.0))
        );
        assert_eq!(
            collision_centroid(&placed, Vec2::new(150.0, 300.0), 45.0),
            None
        );
    }

    #[test]
    fn test_nudge_points_away_from_centroid() {
        let config = PlacementConfig::default();
        let mut rng = seeded_rng(11);
        for _ in 0..100 {
            let step = nudge_vector(
                Vec2::new(110.0, 100.0),
                Vec2::new(100.0, 100.0),
                &config,
                &mut rng,
            )
            .unwrap();
            assert!(step.x > 0.0);
            assert!(step.y.abs() < 1e-4);
            assert!(step.length() >= 40.0 - 1e-3);
            assert!(step.length() <= 80.0 + 1e-3);
        }
    }

    #[test]
    fn test_nudge_degenerate_when_on_centroid() {
        let config = PlacementConfig::default();
        let mut rng = seeded_rng(0);
        let p = Vec2::new(150.0, 100.0);
        assert_eq!(nudge_vector(p, p, &config, &mut rng), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_successful_layouts_are_valid(
            seed in any::<u64>(),
            count in 0usize..30,
            width in 120.0f32..800.0,
            height in 120.0f32..800.0,
        ) {
            let config = PlacementConfig::default();
            let area = Area::new(width, height);
            match place_seeded(count, &area, &config, seed) {
                Ok(circles) => {
                    prop_assert_eq!(circles.len(), count);
                    assert_valid_layout(&circles, &area, &config);
                }
                Err(PlacementError::Infeasible { placed, requested }) => {
                    prop_assert!(placed < requested);
                    prop_assert_eq!(requested, count);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
