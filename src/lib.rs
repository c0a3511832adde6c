//! Exhaustive CNF satisfiability checking, plus the glue needed to benchmark
//! it: a DIMACS reader, a random formula generator, and a timing harness.
//!
//! A formula is a conjunction of clauses over variables numbered from 1; each
//! clause is a disjunction of signed literals. The solver tries every one of
//! the 2^N assignments in a fixed order, so solve time is exponential in the
//! variable count. That cost is the point: the benchmark measures how it
//! scales.

pub mod bench;
pub mod formula;
pub mod generate;
pub mod solver;

#[cfg(test)]
mod reference;

/// Verdict of a solve call.
///
/// `Satisfiable` carries the first satisfying assignment found in enumeration
/// order. `Unsatisfiable` carries nothing: the assignment buffer has wrapped
/// back to all-false by then and its contents mean nothing, so no caller gets
/// the chance to depend on them.
#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Assignment),
    Unsatisfiable,
}

pub use formula::{Clause, Formula, Literal, Variable};
pub use solver::{evaluate, Assignment, Solver};
