use approx::assert_relative_eq;

use relp_tableau::algorithm::error::{InvalidInput, SolveError};
use relp_tableau::algorithm::two_phase::solve;
use relp_tableau::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, LargestCoefficient};
use relp_tableau::io::error::ImportError;
use relp_tableau::io::import;
use relp_tableau::report::text::TextReport;
use relp_tableau::report::Verbosity;

use crate::textbook::get_test_file_path;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn production() {
    init();
    let problem = import(&get_test_file_path("production")).unwrap();
    let solution = problem.solve().unwrap();

    assert_relative_eq!(solution.x[..], [100f64, 0f64, 300f64, 350f64, 0f64, 0f64][..], epsilon = 1e-9);
    assert_relative_eq!(solution.objective_value, -2500f64, epsilon = 1e-9);
    assert_eq!(solution.nr_pivots, 2);
}

#[test]
fn production_first_profitable() {
    init();
    let problem = import(&get_test_file_path("production")).unwrap();
    let solution = solve::<_, FirstProfitable, _>(&problem, &mut ()).unwrap();

    assert_relative_eq!(solution.objective_value, -2500f64, epsilon = 1e-9);
}

#[test]
fn unbounded() {
    init();
    let problem = import(&get_test_file_path("unbounded")).unwrap();

    assert_eq!(problem.solve(), Err(SolveError::Unbounded { column: 0 }));
}

#[test]
fn infeasible() {
    init();
    let problem = import(&get_test_file_path("infeasible")).unwrap();

    assert_eq!(problem.solve(), Err(SolveError::Infeasible));
}

#[test]
fn redundant() {
    init();
    let problem = import(&get_test_file_path("redundant")).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x, vec![1f64, 0f64]);
    assert_eq!(solution.objective_value, -1f64);
    assert_eq!(solution.basis.len(), 1);
}

#[test]
fn mixed() {
    init();
    let problem = import(&get_test_file_path("mixed")).unwrap();
    let mut report = TextReport::new(Vec::new(), Verbosity::Full);
    let solution = solve::<_, LargestCoefficient, _>(&problem, &mut report).unwrap();

    assert_eq!(solution.x, vec![2.5f64, 1.5f64, 0f64]);
    assert_eq!(solution.objective_value, -5.5f64);
    assert_eq!(solution.nr_pivots, 2);

    let output = String::from_utf8(report.into_inner().unwrap()).unwrap();
    assert!(output.contains("Basis columns found per row: [2, -]\n"));
    assert!(output.contains("Pivot on row 1, column 0\n"));
    assert!(output.contains("Pivot on row 0, column 1\n"));
}

#[test]
fn negative_rhs() {
    init();
    let result = import(&get_test_file_path("negative_rhs"));

    assert!(matches!(
        result,
        Err(ImportError::Problem(InvalidInput::NegativeRightHandSide { row: 1 })),
    ));
}
