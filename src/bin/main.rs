use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, ValueEnum};

use relp_tableau::algorithm::error::SolveError;
use relp_tableau::algorithm::two_phase::solve;
use relp_tableau::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, LargestCoefficient};
use relp_tableau::data::linear_program::solution::Solution;
use relp_tableau::data::linear_program::standard_form::StandardForm;
use relp_tableau::io::import;
use relp_tableau::report::{Observer, Verbosity};
use relp_tableau::report::latex::LatexReport;
use relp_tableau::report::text::TextReport;

/// Solve a linear program in standard form with the two-phase simplex method.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// JSON file containing the problem: `{ "a": [[..]], "b": [..], "c": [..] }`
    problem_file: PathBuf,
    /// Where to report the intermediate tableaus
    #[arg(long, value_enum, default_value_t = Output::Screen)]
    output: Output,
    /// File to write the report to, for the file and latex outputs
    #[arg(long)]
    path: Option<PathBuf>,
    /// How much of the intermediate steps to report
    #[arg(long, value_enum, default_value_t = Level::Minimal)]
    verbosity: Level,
    /// Rule for choosing the entering column
    #[arg(long, value_enum, default_value_t = Rule::LargestCoefficient)]
    rule: Rule,
}

#[derive(Copy, Clone, ValueEnum)]
enum Output {
    Screen,
    File,
    Latex,
}

#[derive(Copy, Clone, ValueEnum)]
enum Level {
    Minimal,
    Full,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    LargestCoefficient,
    FirstProfitable,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let problem = match import(&opts.problem_file) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        },
    };

    let verbosity = match opts.verbosity {
        Level::Minimal => Verbosity::Minimal,
        Level::Full => Verbosity::Full,
    };

    let (result, report) = match opts.output {
        Output::Screen => {
            let mut report = TextReport::new(io::stdout(), verbosity);
            let result = run(&problem, opts.rule, &mut report);
            (result, report.into_inner().map(drop))
        },
        Output::File => {
            let path = opts.path.unwrap_or_else(|| PathBuf::from("simplex.txt"));
            let mut report = TextReport::new(BufWriter::new(create(&path)), verbosity);
            let result = run(&problem, opts.rule, &mut report);
            (result, report.into_inner().map(drop))
        },
        Output::Latex => {
            let path = opts.path.unwrap_or_else(|| PathBuf::from("simplex.tex"));
            let mut report = LatexReport::new(BufWriter::new(create(&path)), verbosity);
            let result = run(&problem, opts.rule, &mut report);
            (result, report.finish().map(drop))
        },
    };

    if let Err(error) = report {
        eprintln!("Could not write the report: {error}");
    }

    match result {
        Ok(solution) => println!("Solution computed.\n{solution}"),
        Err(error) => {
            println!("{error}");
            exit(2);
        },
    }
}

fn run<O: Observer<f64>>(
    problem: &StandardForm<f64>,
    rule: Rule,
    observer: &mut O,
) -> Result<Solution<f64>, SolveError> {
    match rule {
        Rule::LargestCoefficient => solve::<_, LargestCoefficient, _>(problem, observer),
        Rule::FirstProfitable => solve::<_, FirstProfitable, _>(problem, observer),
    }
}

fn create(path: &Path) -> File {
    match File::create(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Could not create \"{}\": {error}", path.to_string_lossy());
            exit(1);
        },
    }
}
