use munkres::{
    AssignmentError, AssignmentSolver, BruteForce, Cost, CostMatrix, Munkres, MunkresState,
    Padding, Phase, ShortestAugmentingPath,
};
use nalgebra::DMatrix;
use proptest::prelude::*;

fn square(max_n: usize, range: std::ops::Range<i64>) -> impl Strategy<Value = DMatrix<i64>> {
    (1..=max_n).prop_flat_map(move |n| {
        prop::collection::vec(range.clone(), n * n)
            .prop_map(move |values| DMatrix::from_row_slice(n, n, &values))
    })
}

fn rectangular(max: usize) -> impl Strategy<Value = DMatrix<i64>> {
    (1..=max, 1..=max).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0i64..50, rows * cols)
            .prop_map(move |values| DMatrix::from_row_slice(rows, cols, &values))
    })
}

fn engines() -> Vec<Box<dyn AssignmentSolver<i64>>> {
    signed_engines()
}

fn signed_engines<T>() -> Vec<Box<dyn AssignmentSolver<T>>>
where
    T: Cost + num_traits::Signed + num_traits::Bounded + 'static,
{
    vec![
        Box::new(Munkres::default()),
        Box::new(ShortestAugmentingPath::default()),
    ]
}

fn extreme_i8() -> impl Strategy<Value = i8> + Clone {
    prop_oneof![i8::MIN..i8::MIN + 8, -8i8..8, i8::MAX - 8..=i8::MAX]
}

fn extreme_u8() -> impl Strategy<Value = u8> + Clone {
    prop_oneof![0u8..8, u8::MAX - 8..=u8::MAX]
}

fn extreme_i64() -> impl Strategy<Value = i64> + Clone {
    prop_oneof![i64::MIN..i64::MIN + 100, -50i64..50, i64::MAX - 100..=i64::MAX]
}

fn grid<T: Cost>(
    max: usize,
    values: impl Strategy<Value = T> + Clone,
) -> impl Strategy<Value = DMatrix<T>> {
    (1..=max, 1..=max).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(values.clone(), rows * cols)
            .prop_map(move |entries| DMatrix::from_row_slice(rows, cols, &entries))
    })
}

/// Either the solve is refused for lack of headroom, or its cost matches the
/// exhaustive optimum computed in a wider type.
fn refused_or_optimal<T: Cost>(
    engine: &dyn AssignmentSolver<T>,
    costs: &DMatrix<T>,
    widen: impl Fn(T) -> i128,
) -> Result<(), TestCaseError> {
    let wide = costs.map(&widen);
    let best = BruteForce::default().solve_matrix(&wide).unwrap().total_cost(&wide);

    let (rows, cols) = costs.shape();
    let found = CostMatrix::from_matrix(costs, Padding::Derived)
        .and_then(|normalized| engine.solve_normalized(&normalized));
    match found {
        Ok(assignment) => {
            let total: i128 = assignment.pairs().map(|a| widen(costs[a])).sum();
            prop_assert_eq!(total, best, "engine {}", engine.name());
        }
        Err(err) => {
            prop_assert!(
                matches!(err, AssignmentError::OverflowRisk { .. }),
                "engine {} on {}x{}: {}",
                engine.name(),
                rows,
                cols,
                err
            );
        }
    }
    Ok(())
}

fn optimum(costs: &DMatrix<i64>) -> i64 {
    let assignment = BruteForce::default().solve_matrix(costs).unwrap();
    assignment.total_cost(costs)
}

fn solve_with(engine: &dyn AssignmentSolver<i64>, costs: &DMatrix<i64>) -> munkres::Assignment {
    let normalized = CostMatrix::from_matrix(costs, Padding::Derived).unwrap();
    engine.solve_normalized(&normalized).unwrap()
}

proptest! {
    #[test]
    fn every_row_and_column_used_once(costs in square(8, 0..1000)) {
        let n = costs.nrows();
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &costs);
            prop_assert_eq!(assignment.len(), n);

            let mask = assignment.to_mask();
            for i in 0..n {
                prop_assert_eq!(mask.row(i).iter().map(|&v| v as usize).sum::<usize>(), 1);
                prop_assert_eq!(mask.column(i).iter().map(|&v| v as usize).sum::<usize>(), 1);
            }
        }
    }

    #[test]
    fn matches_exhaustive_search(costs in square(6, 0..20)) {
        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &costs);
            prop_assert_eq!(assignment.total_cost(&costs), best, "engine {}", engine.name());
        }
    }

    #[test]
    fn negative_costs_are_solved(costs in square(5, -30..30)) {
        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &costs);
            prop_assert_eq!(assignment.total_cost(&costs), best);
        }
    }

    #[test]
    fn shifting_a_row_keeps_the_optimum(
        costs in square(6, 0..40),
        row_seed in any::<prop::sample::Index>(),
        shift in 1i64..100,
    ) {
        let row = row_seed.index(costs.nrows());
        let mut shifted = costs.clone();
        shifted.row_mut(row).iter_mut().for_each(|v| *v += shift);

        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &shifted);
            prop_assert_eq!(assignment.total_cost(&costs), best);
        }
    }

    #[test]
    fn shifting_a_column_keeps_the_optimum(
        costs in square(6, 0..40),
        col_seed in any::<prop::sample::Index>(),
        shift in 1i64..100,
    ) {
        let col = col_seed.index(costs.ncols());
        let mut shifted = costs.clone();
        shifted.column_mut(col).iter_mut().for_each(|v| *v += shift);

        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &shifted);
            prop_assert_eq!(assignment.total_cost(&costs), best);
        }
    }

    #[test]
    fn rectangular_matches_exhaustive_search(costs in rectangular(5)) {
        let (rows, cols) = costs.shape();
        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &costs);
            prop_assert_eq!(assignment.shape(), (rows, cols));
            prop_assert_eq!(assignment.len(), rows.min(cols));
            prop_assert_eq!(assignment.total_cost(&costs), best);
        }
    }

    #[test]
    fn entries_stay_non_negative_and_augmentations_bounded(costs in square(7, -50..50)) {
        let n = costs.nrows();
        let normalized = CostMatrix::from_matrix(&costs, Padding::Derived).unwrap();
        let mut state = MunkresState::new(&normalized);
        while !state.is_done() {
            let completed = state.phase();
            state.step().unwrap();
            if matches!(completed, Phase::Reduce | Phase::UpdateDual) {
                prop_assert!(state.costs().iter().all(|&v| v >= 0));
            }
        }
        prop_assert!(state.statistics().augmentations <= n as u64);
        prop_assert!(state.statistics().dual_updates <= (n * n) as u64);
        prop_assert_eq!(state.mask().star_count(), n);
    }

    #[test]
    fn float_costs_match_exhaustive_search(
        values in (1usize..=6).prop_flat_map(|n| prop::collection::vec(0.0f64..1.0, n * n))
    ) {
        let n = (values.len() as f64).sqrt().round() as usize;
        let costs = DMatrix::from_row_slice(n, n, &values);
        let best = BruteForce::default().solve_matrix(&costs).unwrap().total_cost(&costs);
        let found = Munkres::default().solve_matrix(&costs).unwrap().total_cost(&costs);
        prop_assert!((found - best).abs() < 1e-9);

        let found = ShortestAugmentingPath::default().solve_matrix(&costs).unwrap().total_cost(&costs);
        prop_assert!((found - best).abs() < 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn larger_instances_match_exhaustive_search(
        costs in (7usize..=9).prop_flat_map(|n| {
            prop::collection::vec(0i64..50, n * n)
                .prop_map(move |values| DMatrix::from_row_slice(n, n, &values))
        })
    ) {
        let best = optimum(&costs);
        for engine in engines() {
            let assignment = solve_with(engine.as_ref(), &costs);
            prop_assert_eq!(assignment.total_cost(&costs), best, "engine {}", engine.name());
        }
    }
}

proptest! {
    #[test]
    fn extreme_i8_costs_never_panic(costs in grid(4, extreme_i8())) {
        for engine in signed_engines::<i8>() {
            refused_or_optimal(engine.as_ref(), &costs, i128::from)?;
        }
    }

    #[test]
    fn extreme_u8_costs_never_panic(costs in grid(4, extreme_u8())) {
        refused_or_optimal(&Munkres::<u8>::default(), &costs, i128::from)?;
    }

    #[test]
    fn extreme_i64_costs_never_panic(costs in grid(4, extreme_i64())) {
        for engine in signed_engines::<i64>() {
            refused_or_optimal(engine.as_ref(), &costs, i128::from)?;
        }
    }

    #[test]
    fn narrow_ranges_in_narrow_types_are_solved(
        costs in (1usize..=4).prop_flat_map(|n| {
            prop::collection::vec(-10i8..10, n * n)
                .prop_map(move |values| DMatrix::from_row_slice(n, n, &values))
        })
    ) {
        let wide = costs.map(i64::from);
        let best = optimum(&wide);
        for engine in signed_engines::<i8>() {
            let assignment = CostMatrix::from_matrix(&costs, Padding::Derived)
                .and_then(|normalized| engine.solve_normalized(&normalized))
                .unwrap();
            let total: i64 = assignment.pairs().map(|a| i64::from(costs[a])).sum();
            prop_assert_eq!(total, best, "engine {}", engine.name());
        }
    }
}

#[test]
fn reported_overflows_stay_errors() {
    let wide_i8 = DMatrix::from_row_slice(2, 2, &[-100i8, 100, 100, -100]);
    for engine in signed_engines::<i8>() {
        let normalized = CostMatrix::from_matrix(&wide_i8, Padding::Derived);
        assert_eq!(
            normalized.and_then(|n| engine.solve_normalized(&n)),
            Err(AssignmentError::OverflowRisk { rows: 2, cols: 2 })
        );
    }

    #[rustfmt::skip]
    let near_the_edges = DMatrix::from_row_slice(5, 5, &[
        249u8,   0, 250, 250,   4,
          4,   255,   7,   0, 253,
          4,     3, 253,   1,   6,
        255,   254,   5, 253,   0,
        248,   252,   7,   0, 251,
    ]);
    assert_eq!(
        munkres::solve(&near_the_edges),
        Err(AssignmentError::OverflowRisk { rows: 5, cols: 5 })
    );

    let extremes = DMatrix::from_row_slice(2, 2, &[i64::MIN, i64::MAX, 0, 0]);
    for engine in engines() {
        let normalized = CostMatrix::from_matrix(&extremes, Padding::Derived);
        assert_eq!(
            normalized.and_then(|n| engine.solve_normalized(&n)),
            Err(AssignmentError::OverflowRisk { rows: 2, cols: 2 })
        );
    }
}

#[test]
fn documented_examples() {
    let zero = [[2, 1, 0], [0, 0, 3], [3, 0, 2]];
    let assignment = munkres::solve_rows(&zero).unwrap();
    assert_eq!(
        assignment.pairs().collect::<Vec<_>>(),
        vec![(0, 2), (1, 0), (2, 1)]
    );

    let five = DMatrix::from_row_slice(3, 3, &[4, 1, 3, 2, 0, 5, 3, 2, 2]);
    for engine in engines() {
        let assignment = solve_with(engine.as_ref(), &five);
        assert_eq!(assignment.total_cost(&five), 5);
    }
}

#[test]
fn unsigned_costs_with_munkres() {
    let costs = DMatrix::from_row_slice(3, 4, &[9u16, 2, 7, 8, 6, 4, 3, 7, 5, 8, 1, 8]);
    let assignment = munkres::solve(&costs).unwrap();
    assert_eq!(assignment.total_cost(&costs), 2 + 6 + 1);
}
