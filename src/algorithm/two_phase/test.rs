use approx::assert_relative_eq;
use num_traits::Zero;
use proptest::prelude::*;
use relp_num::{RationalBig, RB};

use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::{phase_one, primal, solve};
use crate::algorithm::two_phase::initial_basis::find_identity_columns;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, LargestCoefficient};
use crate::data::linear_program::standard_form::StandardForm;
use crate::report::{Checkpoint, Event, Observer};
use crate::report::test::{Recorded, Recorder};
use crate::tests::{problem_1, problem_2};

#[test]
fn direct() {
    let problem = problem_1::standard_form();
    let mut recorder = Recorder::default();
    let solution = solve::<_, LargestCoefficient, _>(&problem, &mut recorder).unwrap();

    assert_relative_eq!(solution.x[..], problem_1::optimal_x()[..], epsilon = 1e-9);
    assert_relative_eq!(solution.objective_value, problem_1::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-9);
    assert_relative_eq!(problem.objective_value(&solution.x), problem_1::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-9);
    assert_eq!(solution.nr_pivots, 2);
    assert_eq!(recorder.pivots(), vec![(1, 0), (2, 2)]);
    assert_eq!(solution.basis, vec![3, 0, 2]);

    assert_eq!(recorder.events[0], Recorded::ProblemDefined);
    assert_eq!(recorder.events[1], Recorded::BasisSearchResult(vec![Some(3), Some(4), Some(5)]));
    assert_eq!(recorder.checkpoints(), vec![
        Checkpoint::Initial,
        Checkpoint::AfterPivot,
        Checkpoint::AfterPivot,
    ]);
    assert!(matches!(recorder.events.last(), Some(Recorded::Solved(_))));
}

#[test]
fn unbounded() {
    let problem = problem_2::standard_form();
    assert_eq!(problem.solve(), Err(SolveError::Unbounded { column: 0 }));
}

#[test]
fn unbounded_events() {
    let problem = StandardForm::from_rows(
        vec![vec![1f64, -2f64, 1f64, 0f64], vec![-1f64, 1f64, 0f64, 1f64]],
        vec![4f64, 3f64],
        vec![-1f64, -3f64],
    ).unwrap();
    let mut recorder = Recorder::default();
    let result = solve::<_, LargestCoefficient, _>(&problem, &mut recorder);

    assert_eq!(result, Err(SolveError::Unbounded { column: 0 }));
    assert_eq!(recorder.pivots(), vec![(1, 1)]);
    assert_eq!(
        recorder.events.last(),
        Some(&Recorded::Failed(SolveError::Unbounded { column: 0 }.to_string())),
    );
}

#[test]
fn two_phases() {
    let problem = StandardForm::from_rows(
        vec![vec![RB!(1), RB!(1)], vec![RB!(1), RB!(-1)]],
        vec![RB!(2), RB!(0)],
        vec![RB!(1), RB!(2)],
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x, vec![RB!(1), RB!(1)]);
    assert_eq!(solution.objective_value, RB!(3));
    assert_eq!(solution.nr_pivots, 2);
}

#[test]
fn mixed_basis() {
    let problem = StandardForm::from_rows(
        vec![vec![1f64, 1f64, 1f64], vec![1f64, -1f64, 0f64]],
        vec![4f64, 1f64],
        vec![-1f64, -2f64],
    ).unwrap();
    let mut recorder = Recorder::default();
    let solution = solve::<_, LargestCoefficient, _>(&problem, &mut recorder).unwrap();

    assert_eq!(recorder.events[1], Recorded::BasisSearchResult(vec![Some(2), None]));
    assert_eq!(recorder.pivots(), vec![(1, 0), (0, 1)]);
    assert_eq!(solution.x, vec![2.5f64, 1.5f64, 0f64]);
    assert_eq!(solution.objective_value, -5.5f64);
    assert_eq!(solution.basis, vec![1, 0]);
    assert_eq!(recorder.checkpoints(), vec![
        Checkpoint::PhaseOneStart,
        Checkpoint::ArtificialCostEliminated,
        Checkpoint::PhaseOneReady,
        Checkpoint::AfterPivot,
        Checkpoint::PhaseOneDone,
        Checkpoint::PhaseTwoStart,
        Checkpoint::BasisCostEliminated,
        Checkpoint::BasisCostEliminated,
        Checkpoint::PhaseTwoReady,
        Checkpoint::AfterPivot,
    ]);
}

#[test]
fn infeasible() {
    let problem = StandardForm::from_rows(
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![1f64, 2f64],
        vec![1f64, 1f64],
    ).unwrap();
    let mut recorder = Recorder::default();

    assert_eq!(solve::<_, LargestCoefficient, _>(&problem, &mut recorder), Err(SolveError::Infeasible));
    assert!(!recorder.events.iter().any(|event| matches!(event, Recorded::Solved(_))));
}

#[test]
fn redundant_row() {
    let problem = StandardForm::from_rows(
        vec![vec![RB!(1), RB!(1)], vec![RB!(2), RB!(2)]],
        vec![RB!(1), RB!(2)],
        vec![RB!(-1)],
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x, vec![RB!(1), RB!(0)]);
    assert_eq!(solution.objective_value, RB!(-1));
    assert_eq!(solution.basis, vec![0]);
}

#[test]
fn redundant_row_events() {
    let problem = StandardForm::from_rows(
        vec![vec![1f64, 1f64], vec![2f64, 2f64]],
        vec![1f64, 2f64],
        vec![-1f64],
    ).unwrap();
    let mut recorder = Recorder::default();
    solve::<_, LargestCoefficient, _>(&problem, &mut recorder).unwrap();

    assert!(recorder.events.contains(&Recorded::RowsRemoved(vec![0])));
}

#[test]
fn exact() {
    let problem = StandardForm::from_rows(
        vec![
            vec![RB!(4), RB!(7, 2), RB!(5, 2), RB!(1), RB!(0), RB!(0)],
            vec![RB!(2, 5), RB!(1, 2), RB!(1, 10), RB!(0), RB!(1), RB!(0)],
            vec![RB!(12), RB!(12), RB!(6), RB!(0), RB!(0), RB!(1)],
        ],
        vec![RB!(1500), RB!(70), RB!(3000)],
        vec![RB!(-10), RB!(-15, 2), RB!(-5)],
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x, vec![RB!(100), RB!(0), RB!(300), RB!(350), RB!(0), RB!(0)]);
    assert_eq!(solution.objective_value, RB!(-2500));
    assert_eq!(problem.objective_value(&solution.x), solution.objective_value);
}

#[test]
fn other_rule() {
    let problem = problem_1::standard_form();
    let solution = solve::<_, FirstProfitable, _>(&problem, &mut ()).unwrap();

    assert_relative_eq!(solution.objective_value, problem_1::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-9);
}

#[test]
fn idempotent() {
    let problem = problem_2::standard_form();
    let copy = problem.clone();
    assert_eq!(problem.solve(), problem.solve());
    assert_eq!(problem, copy);

    let problem = problem_1::standard_form();
    assert_eq!(problem.solve(), problem.solve());
}

#[test]
fn optimal_tableau_unchanged() {
    let mut tableau = problem_1::tableau_form();
    primal::<_, _, LargestCoefficient, _>(&mut tableau, &mut ()).unwrap();
    let optimal = tableau.clone();

    let mut recorder = Recorder::default();
    assert_eq!(primal::<_, _, LargestCoefficient, _>(&mut tableau, &mut recorder), Ok(0));
    assert_eq!(tableau, optimal);
    assert!(recorder.events.is_empty());
}

#[test]
fn removed_row_not_implied() {
    let problem = StandardForm::from_rows(
        vec![
            vec![RB!(0), RB!(-1), RB!(0)],
            vec![RB!(-2), RB!(-2), RB!(2)],
            vec![RB!(1), RB!(0), RB!(2)],
        ],
        vec![RB!(0), RB!(1), RB!(2)],
        vec![RB!(0), RB!(-1)],
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x, vec![RB!(0), RB!(1, 2), RB!(1)]);
    assert_eq!(solution.objective_value, RB!(-1, 2));
    assert_eq!(solution.basis, vec![2, 1]);
    // The removed row 0 reads -x_1 = 0
    assert_ne!(-solution.x[1].clone(), problem.b()[0]);
}

/// Collects the rows that phase one removed.
#[derive(Default)]
struct RemovedRows(Vec<usize>);

impl Observer<RationalBig> for RemovedRows {
    fn notify(&mut self, event: Event<'_, RationalBig>) {
        if let Event::RowsRemoved(rows) = event {
            self.0.extend_from_slice(rows);
        }
    }
}

/// Problems with at most three rows, two more columns than rows and small integer entries.
fn small_problem() -> impl Strategy<Value = StandardForm<RationalBig>> {
    (1usize..=3)
        .prop_flat_map(|m| (Just(m), 1..=m + 2))
        .prop_flat_map(|(m, n)| (
            prop::collection::vec(prop::collection::vec(-2i32..=2, n), m),
            prop::collection::vec(0i32..=2, m),
            prop::collection::vec(-2i32..=2, n),
        ))
        .prop_map(|(a, b, c)| {
            let exact = |values: Vec<i32>| values.into_iter().map(|v| RB!(v)).collect::<Vec<_>>();
            StandardForm::from_rows(a.into_iter().map(exact).collect(), exact(b), exact(c)).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn pivots_keep_basis_clean(
        problem in small_problem(),
        pivots in prop::collection::vec((0usize..3, 0usize..8), 1..8),
    ) {
        let initial_basis = find_identity_columns(problem.constraints());
        let mut tableau = phase_one::build(&problem, &initial_basis, &mut ());
        prop_assert!(tableau.is_in_basic_feasible_solution_state());

        for (row, column) in pivots {
            let row = row % tableau.nr_rows();
            let column = column % tableau.nr_columns();
            if tableau.is_in_basis(column) || tableau.matrix().get_value(row, column).is_zero() {
                continue;
            }

            tableau.bring_into_basis(column, row);
            prop_assert!(tableau.is_in_basic_feasible_solution_state());
        }
    }

    #[test]
    fn solutions_are_feasible(problem in small_problem()) {
        let mut removed = RemovedRows::default();
        match solve::<_, LargestCoefficient, _>(&problem, &mut removed) {
            Ok(solution) => {
                prop_assert!(solution.x.iter().all(|value| value >= &RationalBig::zero()));
                prop_assert_eq!(&problem.objective_value(&solution.x), &solution.objective_value);

                for row in (0..problem.nr_constraints()).filter(|row| !removed.0.contains(row)) {
                    let lhs = (0..problem.nr_variables())
                        .map(|j| problem.constraints().get_value(row, j).clone() * solution.x[j].clone())
                        .fold(RationalBig::zero(), |total, term| total + term);
                    prop_assert_eq!(&lhs, &problem.b()[row]);
                }
            },
            Err(error) => prop_assert!(
                matches!(error, SolveError::Infeasible | SolveError::Unbounded { .. }),
                "unexpected error: {}", error,
            ),
        }
    }
}
