//! Tests for gs-swarm.

use gs_core::{Cell, SwarmConfig};
use gs_grid::SiteField;

use crate::{Swarm, SwarmBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(grid_size: u32, drone_count: u32, max_move: u32) -> SwarmConfig {
    SwarmConfig {
        grid_size,
        site_count: 1,
        drone_count,
        max_move,
        seed: 42,
    }
}

/// Swarm on an injected field with injected starting cells.
fn scripted(
    grid_size: u32,
    sites:     &[Cell],
    drones:    &[Cell],
    max_move:  u32,
) -> Swarm {
    let field = SiteField::from_cells(grid_size, sites.iter().copied()).unwrap();
    SwarmBuilder::new(config(grid_size, drones.len() as u32, max_move))
        .field(field)
        .positions(drones.to_vec())
        .build()
        .unwrap()
}

// ── Policy ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use gs_core::{Cell, DroneId, DroneRng, Torus};
    use gs_grid::{KnowledgeMap, SiteField};

    use crate::{MoveOutcome, StepDraw, decide};

    fn draw(d_row: u32, d_col: u32, u: f64) -> StepDraw {
        StepDraw { d_row, d_col, u }
    }

    #[test]
    fn acceptance_decays_exponentially() {
        assert_eq!(draw(0, 0, 0.0).acceptance(), 1.0);
        assert!((draw(1, 0, 0.0).acceptance() - (-1.0f64).exp()).abs() < 1e-15);
        assert!((draw(1, 3, 0.0).acceptance() - (-3.0f64).exp()).abs() < 1e-15);
        assert_eq!(draw(2, 5, 0.0).magnitude(), 5);
    }

    #[test]
    fn zero_step_always_accepted() {
        // u is drawn from [0, 1), so it is always below exp(0) = 1.
        assert!(draw(0, 0, 0.999_999).is_accepted());
    }

    #[test]
    fn sample_stays_in_range() {
        let mut rng = DroneRng::new(3, DroneId(0));
        for _ in 0..2_000 {
            let d = StepDraw::sample(&mut rng, 4);
            assert!(d.d_row <= 4 && d.d_col <= 4);
            assert!((0.0..1.0).contains(&d.u));
        }
    }

    #[test]
    fn sample_with_zero_bound_is_zero_step() {
        let mut rng = DroneRng::new(3, DroneId(1));
        for _ in 0..100 {
            let d = StepDraw::sample(&mut rng, 0);
            assert_eq!((d.d_row, d.d_col), (0, 0));
            assert!(d.is_accepted());
        }
    }

    fn setup(sites: &[Cell], claims: &[Cell]) -> (SiteField, KnowledgeMap, DroneRng) {
        let field = SiteField::from_cells(10, sites.iter().copied()).unwrap();
        let knowledge = KnowledgeMap::tally(Torus::new(10), claims);
        (field, knowledge, DroneRng::new(0, DroneId(0)))
    }

    #[test]
    fn rejected_when_u_too_large() {
        let (field, knowledge, mut rng) = setup(&[Cell::new(6, 6)], &[]);
        // exp(-2) ≈ 0.135
        let out = decide(Cell::new(4, 4), &draw(2, 1, 0.2), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Rejected);
        assert_eq!(out.destination(), None);
    }

    #[test]
    fn direct_onto_site() {
        let (field, knowledge, mut rng) = setup(&[Cell::new(6, 5)], &[]);
        let out = decide(Cell::new(4, 4), &draw(2, 1, 0.0), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Direct(Cell::new(6, 5)));
    }

    #[test]
    fn direct_wraps_around_edges() {
        let (field, knowledge, mut rng) = setup(&[Cell::new(0, 1)], &[]);
        let out = decide(Cell::new(9, 9), &draw(1, 2, 0.0), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Direct(Cell::new(0, 1)));
    }

    #[test]
    fn recruited_to_known_cell_in_window() {
        // Tentative (5, 5) is not a site; (6, 6) is known and inside ±1.
        let (field, knowledge, mut rng) = setup(&[Cell::new(0, 0)], &[Cell::new(6, 6)]);
        let out = decide(Cell::new(4, 4), &draw(1, 1, 0.0), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Recruited(Cell::new(6, 6)));
    }

    #[test]
    fn recruitment_ignores_cells_outside_window() {
        // (7, 5) is two rows below the tentative cell but the row half-extent is 0.
        let (field, knowledge, mut rng) = setup(&[Cell::new(0, 0)], &[Cell::new(7, 5)]);
        let out = decide(Cell::new(5, 3), &draw(0, 2, 0.0), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Stranded);
    }

    #[test]
    fn stranded_when_window_has_no_known_cell() {
        // Zero step onto a non-site cell nobody claims.
        let (field, knowledge, mut rng) = setup(&[Cell::new(0, 0)], &[]);
        let out = decide(Cell::new(3, 3), &draw(0, 0, 0.5), &field, &knowledge, &mut rng, &mut vec![]);
        assert_eq!(out, MoveOutcome::Stranded);
        assert_eq!(out.destination(), None);
    }

    #[test]
    fn recruitment_pick_is_uniform() {
        let claims = [Cell::new(4, 4), Cell::new(6, 6)];
        let (field, knowledge, mut rng) = setup(&[Cell::new(0, 0)], &claims);
        let mut scratch = Vec::new();
        let mut hits = [0u32; 2];
        for _ in 0..4_000 {
            match decide(Cell::new(4, 4), &draw(1, 1, 0.0), &field, &knowledge, &mut rng, &mut scratch) {
                MoveOutcome::Recruited(c) if c == claims[0] => hits[0] += 1,
                MoveOutcome::Recruited(c) if c == claims[1] => hits[1] += 1,
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert!(hits[0] > 1_700 && hits[1] > 1_700, "hits = {hits:?}");
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use gs_core::{Cell, CoreError, SwarmConfig};
    use gs_grid::{GridError, SiteField};

    use super::config;
    use crate::{Swarm, SwarmBuilder, SwarmError};

    #[test]
    fn initial_drones_sit_on_sites() {
        let cfg = SwarmConfig::default();
        let swarm = Swarm::initialize(&cfg).unwrap();
        assert_eq!(swarm.drone_count(), 100);
        assert_eq!(swarm.drones_on_sites(), 100);
        assert_eq!(swarm.knowledge().total_claims(), 100);
        swarm.check_invariants().unwrap();
    }

    #[test]
    fn zero_sampled_sites_is_configuration_error() {
        let cfg = SwarmConfig { site_count: 0, ..SwarmConfig::default() };
        let err = Swarm::initialize(&cfg).err().unwrap();
        assert!(matches!(err, SwarmError::Core(CoreError::NoSites { grid_size: 40, site_count: 0 })));
    }

    #[test]
    fn empty_injected_field_is_configuration_error() {
        let field = SiteField::from_cells(10, Vec::<Cell>::new()).unwrap();
        let err = SwarmBuilder::new(config(10, 1, 0))
            .field(field)
            .positions(vec![Cell::new(0, 0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SwarmError::Core(CoreError::NoSites { .. })));
    }

    #[test]
    fn invalid_parameters_rejected_before_sampling() {
        let cfg = SwarmConfig { drone_count: 0, ..SwarmConfig::default() };
        assert!(matches!(Swarm::initialize(&cfg), Err(SwarmError::Core(CoreError::Config(_)))));
        let cfg = SwarmConfig { grid_size: 0, ..SwarmConfig::default() };
        assert!(matches!(Swarm::initialize(&cfg), Err(SwarmError::Core(CoreError::Config(_)))));
    }

    #[test]
    fn field_size_mismatch() {
        let field = SiteField::from_cells(8, [Cell::new(1, 1)]).unwrap();
        let err = SwarmBuilder::new(config(10, 1, 0)).field(field).build().err().unwrap();
        assert!(matches!(err, SwarmError::GridSizeMismatch { expected: 10, got: 8 }));
    }

    #[test]
    fn position_count_mismatch() {
        let field = SiteField::from_cells(10, [Cell::new(1, 1)]).unwrap();
        let err = SwarmBuilder::new(config(10, 3, 0))
            .field(field)
            .positions(vec![Cell::new(1, 1); 2])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SwarmError::DroneCountMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn out_of_bounds_position_rejected() {
        let field = SiteField::from_cells(10, [Cell::new(1, 1)]).unwrap();
        let err = SwarmBuilder::new(config(10, 1, 0))
            .field(field)
            .positions(vec![Cell::new(10, 0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SwarmError::Grid(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn same_seed_same_initial_state() {
        let cfg = SwarmConfig { seed: 11, ..SwarmConfig::default() };
        let a = Swarm::initialize(&cfg).unwrap();
        let b = Swarm::initialize(&cfg).unwrap();
        assert_eq!(a.field().sites(), b.field().sites());
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn drones_stacked_on_one_cell_are_all_counted() {
        let swarm = super::scripted(10, &[Cell::new(2, 2)], &[Cell::new(2, 2); 4], 1);
        assert_eq!(swarm.knowledge().count(Cell::new(2, 2)), 4);
        assert_eq!(swarm.knowledge().known_cells(), 1);
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use gs_core::{Cell, DroneId, DroneRng, SwarmConfig};

    use super::scripted;
    use crate::{InvariantViolation, Swarm, StepDraw, decide};

    #[test]
    fn single_drone_on_single_site_never_leaves() {
        let site = Cell::new(5, 5);
        let mut swarm = scripted(10, &[site], &[site], 0);
        for _ in 0..1_000 {
            let stats = swarm.advance_all();
            assert_eq!(stats.direct, 1);
            assert_eq!(stats.mean_speed, 0.0);
            assert_eq!(swarm.positions(), &[site]);
            assert_eq!(swarm.knowledge().count(site), 1);
        }
    }

    #[test]
    fn isolated_sites_keep_drones_within_one_step() {
        // Windows never reach the other site, so recruitment can only
        // return a drone to its own cell.
        let sites = [Cell::new(1, 1), Cell::new(6, 6)];
        let mut swarm = scripted(10, &sites, &sites, 1);
        let torus = swarm.torus();
        for _ in 0..200 {
            let before = swarm.positions().to_vec();
            swarm.advance_all();
            for (b, a) in before.iter().zip(swarm.positions()) {
                assert!(torus.chebyshev(*b, *a) <= 1, "{b} -> {a}");
            }
        }
        swarm.check_invariants().unwrap();
    }

    #[test]
    fn same_seed_same_trajectory() {
        let cfg = SwarmConfig { seed: 1234, ..SwarmConfig::default() };
        let mut a = Swarm::initialize(&cfg).unwrap();
        let mut b = Swarm::initialize(&cfg).unwrap();
        for _ in 0..100 {
            let sa = a.advance_all();
            let sb = b.advance_all();
            assert_eq!(sa, sb);
        }
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.knowledge(), b.knowledge());
    }

    #[test]
    fn bookkeeping_holds_every_tick() {
        let cfg = SwarmConfig { grid_size: 30, site_count: 60, drone_count: 80, max_move: 4, seed: 8 };
        let mut swarm = Swarm::initialize(&cfg).unwrap();
        for _ in 0..500 {
            let stats = swarm.advance_all();
            assert_eq!(stats.drones(), 80);
            swarm.check_invariants().unwrap();
            assert_eq!(swarm.knowledge().total_claims(), 80);
        }
    }

    #[test]
    fn displacement_bounded_by_twice_max_move() {
        let cfg = SwarmConfig { grid_size: 50, site_count: 100, drone_count: 60, max_move: 3, seed: 77 };
        let mut swarm = Swarm::initialize(&cfg).unwrap();
        let torus = swarm.torus();
        for _ in 0..300 {
            let before = swarm.positions().to_vec();
            swarm.advance_all();
            for (b, a) in before.iter().zip(swarm.positions()) {
                assert!(torus.chebyshev(*b, *a) <= 6);
            }
        }
    }

    #[test]
    fn tick_equals_sequential_replay() {
        // Replays one tick drone by drone against a private copy of the
        // knowledge map, letting each drone see the updates of the ones
        // before it.  The swarm must land in exactly the same state.
        let cfg = SwarmConfig { grid_size: 12, site_count: 20, drone_count: 30, max_move: 3, seed: 5 };
        let mut swarm = Swarm::initialize(&cfg).unwrap();

        let field = swarm.shared_field();
        let mut positions = swarm.positions().to_vec();
        let mut knowledge = swarm.knowledge().clone();
        let mut rngs: Vec<DroneRng> = (0..30).map(|i| DroneRng::new(cfg.seed, DroneId(i))).collect();
        let mut scratch = Vec::new();

        for (i, rng) in rngs.iter_mut().enumerate() {
            let draw = StepDraw::sample(rng, cfg.max_move);
            let out = decide(positions[i], &draw, &field, &knowledge, rng, &mut scratch);
            if let Some(dest) = out.destination() {
                knowledge.increment(dest);
                knowledge.decrement(positions[i]);
                positions[i] = dest;
            }
        }

        swarm.advance_all();
        assert_eq!(swarm.positions(), positions.as_slice());
        assert_eq!(swarm.knowledge(), &knowledge);
    }

    #[test]
    fn mean_speed_matches_positions() {
        let cfg = SwarmConfig { grid_size: 20, site_count: 80, drone_count: 25, max_move: 2, seed: 3 };
        let mut swarm = Swarm::initialize(&cfg).unwrap();
        let torus = swarm.torus();
        for _ in 0..50 {
            let before = swarm.positions().to_vec();
            let stats = swarm.advance_all();
            let expected: f64 = before
                .iter()
                .zip(swarm.positions())
                .map(|(b, a)| torus.euclidean(*b, *a))
                .sum::<f64>()
                / 25.0;
            assert!((stats.mean_speed - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn check_invariants_reports_mismatch() {
        let mut swarm = scripted(10, &[Cell::new(1, 1)], &[Cell::new(1, 1)], 0);
        swarm.knowledge.increment(Cell::new(3, 3));
        assert_eq!(
            swarm.check_invariants(),
            Err(InvariantViolation::CountMismatch { cell: Cell::new(3, 3), claimed: 1, occupants: 0 }),
        );
    }

    #[test]
    fn check_invariants_reports_out_of_bounds() {
        let mut swarm = scripted(10, &[Cell::new(1, 1)], &[Cell::new(1, 1)], 0);
        swarm.store.positions[0] = Cell::new(0, 10);
        assert!(matches!(
            swarm.check_invariants(),
            Err(InvariantViolation::OutOfBounds { drone: DroneId(0), .. }),
        ));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use gs_core::{CoreError, SwarmConfig};
    use proptest::prelude::*;

    use crate::{Swarm, SwarmError};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn claims_track_positions(
            grid_size in 2u32..16,
            drone_count in 1u32..40,
            max_move in 0u32..6,
            density in 0.05f64..0.9,
            seed in any::<u64>(),
            ticks in 1usize..25,
        ) {
            let cfg = SwarmConfig { grid_size, site_count: 0, drone_count, max_move, seed }
                .with_density(density);
            let mut swarm = match Swarm::initialize(&cfg) {
                Ok(s) => s,
                Err(SwarmError::Core(CoreError::NoSites { .. })) => return Ok(()),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            };
            let torus = swarm.torus();
            for _ in 0..ticks {
                let before = swarm.positions().to_vec();
                let stats = swarm.advance_all();
                prop_assert_eq!(stats.drones(), drone_count);
                prop_assert!(swarm.check_invariants().is_ok());
                for (b, a) in before.iter().zip(swarm.positions()) {
                    prop_assert!(torus.chebyshev(*b, *a) <= 2 * max_move);
                }
            }
        }
    }
}
