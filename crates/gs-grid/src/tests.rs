//! Unit tests for gs-grid.

#[cfg(test)]
mod field_tests {
    use gs_core::{Cell, SimRng};

    use crate::{GridError, SiteField};

    #[test]
    fn observed_density_converges_to_rho() {
        // 200 independent 50x50 fields → 500 K Bernoulli draws.
        // Std-dev of the pooled fraction is ~0.0006, so 0.005 is very loose.
        let rho = 0.13;
        let mut rng = SimRng::new(7);
        let mut sites = 0usize;
        let mut cells = 0usize;
        for _ in 0..200 {
            let field = SiteField::generate(50, rho, &mut rng);
            sites += field.site_count();
            cells += 50 * 50;
        }
        let observed = sites as f64 / cells as f64;
        assert!((observed - rho).abs() < 0.005, "observed {observed}");
    }

    #[test]
    fn zero_density_is_empty() {
        let mut rng = SimRng::new(1);
        let field = SiteField::generate(20, 0.0, &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.density(), 0.0);
        assert!(!field.has_site(Cell::new(3, 3)));
    }

    #[test]
    fn full_density_marks_every_cell() {
        let mut rng = SimRng::new(1);
        let field = SiteField::generate(6, 1.0, &mut rng);
        assert_eq!(field.site_count(), 36);
        assert_eq!(field.density(), 1.0);
    }

    #[test]
    fn same_seed_same_field() {
        let a = SiteField::generate(30, 0.2, &mut SimRng::new(99));
        let b = SiteField::generate(30, 0.2, &mut SimRng::new(99));
        assert_eq!(a.sites(), b.sites());
    }

    #[test]
    fn sites_list_matches_mask() {
        let field = SiteField::generate(25, 0.3, &mut SimRng::new(3));
        let torus = field.torus();
        let from_mask: Vec<Cell> = torus.cells().filter(|&c| field.has_site(c)).collect();
        assert_eq!(field.sites(), from_mask.as_slice());
    }

    #[test]
    fn from_cells_exact_and_deduplicated() {
        let field = SiteField::from_cells(
            10,
            [Cell::new(5, 5), Cell::new(1, 2), Cell::new(5, 5)],
        )
        .unwrap();
        assert_eq!(field.site_count(), 2);
        assert_eq!(field.sites(), &[Cell::new(1, 2), Cell::new(5, 5)]);
        assert!(field.has_site(Cell::new(5, 5)));
        assert!(!field.has_site(Cell::new(5, 6)));
    }

    #[test]
    fn from_cells_rejects_out_of_bounds() {
        let err = SiteField::from_cells(4, [Cell::new(0, 4)]).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { size: 4, .. }));
    }

    #[test]
    #[should_panic]
    fn has_site_out_of_range_panics() {
        let field = SiteField::from_cells(10, [Cell::new(0, 0)]).unwrap();
        // (0, 12) would alias (1, 2) in a flat index, so it must be rejected.
        let _ = field.has_site(Cell::new(0, 12));
    }
}

#[cfg(test)]
mod knowledge_tests {
    use gs_core::{Cell, Torus};

    use crate::KnowledgeMap;

    fn map(n: u32) -> KnowledgeMap {
        KnowledgeMap::new(Torus::new(n))
    }

    #[test]
    fn increment_decrement() {
        let mut k = map(5);
        let c = Cell::new(2, 3);
        assert!(!k.is_known(c));
        k.increment(c);
        k.increment(c);
        assert_eq!(k.count(c), 2);
        assert!(k.is_known(c));
        k.decrement(c);
        assert_eq!(k.count(c), 1);
        k.decrement(c);
        assert!(!k.is_known(c));
        assert_eq!(k.total_claims(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "underflow")]
    fn decrement_below_zero_panics_in_debug() {
        let mut k = map(5);
        k.decrement(Cell::new(0, 0));
    }

    #[test]
    fn tally_accumulates() {
        let cells = [Cell::new(1, 1), Cell::new(1, 1), Cell::new(0, 4)];
        let k = KnowledgeMap::tally(Torus::new(5), &cells);
        assert_eq!(k.count(Cell::new(1, 1)), 2);
        assert_eq!(k.count(Cell::new(0, 4)), 1);
        assert_eq!(k.known_cells(), 2);
        assert_eq!(k.total_claims(), 3);
    }

    #[test]
    fn window_single_cell() {
        let mut k = map(10);
        let c = Cell::new(4, 4);
        assert!(k.candidates_in_window(c, 0, 0).is_empty());
        k.increment(c);
        assert_eq!(k.candidates_in_window(c, 0, 0), vec![c]);
    }

    #[test]
    fn window_wraps_both_axes() {
        let mut k = map(10);
        k.increment(Cell::new(9, 9));
        k.increment(Cell::new(1, 0));
        k.increment(Cell::new(5, 5)); // outside
        let got = k.candidates_in_window(Cell::new(0, 0), 1, 1);
        assert_eq!(got, vec![Cell::new(9, 9), Cell::new(1, 0)]);
    }

    #[test]
    fn window_respects_separate_half_extents() {
        let mut k = map(10);
        k.increment(Cell::new(5, 7)); // 2 columns right
        k.increment(Cell::new(7, 5)); // 2 rows down
        let got = k.candidates_in_window(Cell::new(5, 5), 0, 2);
        assert_eq!(got, vec![Cell::new(5, 7)]);
        let got = k.candidates_in_window(Cell::new(5, 5), 2, 0);
        assert_eq!(got, vec![Cell::new(7, 5)]);
    }

    #[test]
    fn oversized_window_visits_each_cell_once() {
        let mut k = map(3);
        k.increment(Cell::new(0, 0));
        k.increment(Cell::new(2, 1));
        let got = k.candidates_in_window(Cell::new(1, 1), 5, 5);
        assert_eq!(got.len(), 2);
        let mut sorted = got.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn collect_into_clears_buffer() {
        let mut k = map(4);
        k.increment(Cell::new(0, 0));
        let mut buf = vec![Cell::new(3, 3); 5];
        k.collect_candidates_into(Cell::new(0, 0), 0, 0, &mut buf);
        assert_eq!(buf, vec![Cell::new(0, 0)]);
    }
}
