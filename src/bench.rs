//! Timing harness: generates random formulas of increasing size, times each
//! solve, and writes the measurements out. The clock wraps the solve call
//! from outside; the solver itself does no timekeeping.

use crate::formula::Formula;
use crate::generate::random_formula;
use crate::solver::Solver;
use crate::SatResult;
use log::info;
use rand::Rng;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Problem sizes (variable counts) covered by the default sweep.
pub const DEFAULT_SIZES: &[usize] = &[5, 7, 11, 15, 19, 21, 23];
pub const DEFAULT_TRIALS_PER_SIZE: usize = 7;
pub const CLAUSES_PER_VARIABLE: usize = 4;
pub const LITERALS_PER_CLAUSE: usize = 3;

/// One timed solve of one random formula.
#[derive(Clone, Debug)]
pub struct TrialResult {
    pub num_variables: usize,
    pub elapsed_micros: u128,
    pub satisfiable: bool,
}

/// Solves the formula once and reports the verdict along with the wall-clock
/// time of the solve call, in microseconds.
pub fn time_solve(formula: Formula) -> (SatResult, u128) {
    let mut solver = Solver::new(formula);
    let start = Instant::now();
    let result = solver.solve();
    (result, start.elapsed().as_micros())
}

/// Runs the sweep: for each size, generates `trials_per_size` random formulas
/// with [`CLAUSES_PER_VARIABLE`] clauses per variable and
/// [`LITERALS_PER_CLAUSE`] literals per clause, and times each solve.
pub fn run_trials<R: Rng>(rng: &mut R, sizes: &[usize], trials_per_size: usize) -> Vec<TrialResult> {
    let mut results = Vec::with_capacity(sizes.len() * trials_per_size);
    for &num_variables in sizes {
        for trial in 0..trials_per_size {
            let formula = random_formula(
                rng,
                num_variables,
                num_variables * CLAUSES_PER_VARIABLE,
                LITERALS_PER_CLAUSE,
            );
            let (result, elapsed_micros) = time_solve(formula);
            let satisfiable = match result {
                SatResult::Satisfiable(_) => true,
                SatResult::Unsatisfiable => false,
            };
            info!(
                "size {} trial {}: {} in {}us",
                num_variables,
                trial,
                if satisfiable { "sat" } else { "unsat" },
                elapsed_micros
            );
            results.push(TrialResult {
                num_variables,
                elapsed_micros,
                satisfiable,
            });
        }
    }
    results
}

/// Writes one line per trial, e.g.
/// `Problem Size: 5, Execution Time: 123 microseconds, Result: Satisfiable`.
pub fn write_results<W: Write>(writer: &mut W, results: &[TrialResult]) -> io::Result<()> {
    for result in results {
        writeln!(
            writer,
            "Problem Size: {}, Execution Time: {} microseconds, Result: {}",
            result.num_variables,
            result.elapsed_micros,
            if result.satisfiable { "Satisfiable" } else { "Unsatisfiable" }
        )?;
    }
    Ok(())
}

/// Appends the rendered results to a file, creating it if needed, so that
/// successive runs accumulate into one data set.
pub fn append_results<P: AsRef<Path>>(path: P, results: &[TrialResult]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_results(&mut file, results)
}
