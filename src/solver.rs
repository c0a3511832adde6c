use crate::formula::{Formula, Literal, Variable};
use crate::SatResult;
use log::{debug, trace};
use std::fmt::{self, Formatter};

/// A total assignment of truth values to variables 1 through N.
///
/// Doubles as the enumeration counter: [`advance`](Assignment::advance) steps
/// it through all 2^N assignments, least-significant variable first. Slot 0
/// of the backing vector is unused so variable indices apply directly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn all_false(num_variables: usize) -> Self {
        Self {
            values: vec![false; num_variables + 1],
        }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len() - 1
    }

    pub fn value(&self, variable: &Variable) -> bool {
        self.values[variable.0]
    }

    /// Whether this assignment makes the given literal true: a positive
    /// literal of a true variable, or a negative literal of a false one.
    pub fn satisfies(&self, literal: &Literal) -> bool {
        self.value(literal.variable()) == literal.is_positive()
    }

    /// The values of variables 1..=N in index order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().skip(1).copied()
    }

    fn reset(&mut self) {
        for value in &mut self.values {
            *value = false;
        }
    }

    /// Steps to the next assignment by flipping the bit for variable 1 and
    /// rippling the carry upward: while a flipped bit lands on false, the
    /// next variable's bit flips too. Returns false once the carry falls off
    /// the top, which is when the counter has wrapped back to all-false and
    /// every assignment has been visited.
    fn advance(&mut self) -> bool {
        for value in &mut self.values[1..] {
            *value = !*value;
            if *value {
                return true;
            }
        }
        false
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for (index, value) in self.values.iter().enumerate().skip(1) {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            if *value {
                write!(f, "{}", index)?;
            } else {
                write!(f, "-{}", index)?;
            }
        }
        Ok(())
    }
}

/// Whether `assignment` satisfies every clause of `formula`.
///
/// Each clause check stops at its first true literal; the formula check stops
/// at its first failed clause. An empty clause fails under every assignment.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> bool {
    'clauses: for clause in formula.clauses() {
        for literal in clause.literals() {
            if assignment.satisfies(literal) {
                // this clause is satisfied, on to the next one
                continue 'clauses;
            }
        }
        // no literal satisfied this clause, so the assignment fails
        return false;
    }
    true
}

/// Decides satisfiability by brute force: every one of the 2^N assignments
/// is a candidate, tested in ripple-carry counter order. No propagation, no
/// pruning, no heuristics.
pub struct Solver {
    formula: Formula,
    assignment: Assignment,
    candidates_tested: u64,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        let assignment = Assignment::all_false(formula.num_variables());
        Self {
            formula,
            assignment,
            candidates_tested: 0,
        }
    }

    /// Runs the enumeration. The all-false assignment is the first candidate
    /// tested, before any advance; the search stops at the first satisfying
    /// candidate and returns a clone of it as the witness. Each call starts
    /// over from all-false.
    pub fn solve(&mut self) -> SatResult {
        self.assignment.reset();
        self.candidates_tested = 0;
        debug!(
            "solving {} variables, {} clauses",
            self.formula.num_variables(),
            self.formula.num_clauses()
        );

        loop {
            self.candidates_tested += 1;
            if evaluate(&self.formula, &self.assignment) {
                trace!(
                    "witness {} after {} candidates",
                    self.assignment,
                    self.candidates_tested
                );
                return SatResult::Satisfiable(self.assignment.clone());
            }
            if !self.assignment.advance() {
                debug!("exhausted all {} candidates", self.candidates_tested);
                return SatResult::Unsatisfiable;
            }
        }
    }

    /// How many candidates the last [`solve`](Solver::solve) call tested.
    /// Exactly 2^N when the formula is unsatisfiable.
    pub fn candidates_tested(&self) -> u64 {
        self.candidates_tested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{formula_3sat_strategy, Clause};
    use crate::reference;
    use proptest::prelude::*;
    use test_env_log::test;

    fn clause(literals: &[i64]) -> Clause {
        Clause::new(literals.iter().map(|&l| {
            if l > 0 {
                Literal::Positive(Variable(l as usize))
            } else {
                Literal::Negative(Variable(-l as usize))
            }
        }))
    }

    fn formula(num_variables: usize, clauses: &[&[i64]]) -> Formula {
        Formula::new(num_variables, clauses.iter().map(|c| clause(c)))
            .expect("test formula is well formed")
    }

    #[test]
    fn first_candidates_follow_ripple_carry_order() {
        let mut a = Assignment::all_false(3);
        assert_eq!(a.values().collect::<Vec<_>>(), vec![false, false, false]);
        assert!(a.advance());
        assert_eq!(a.values().collect::<Vec<_>>(), vec![true, false, false]);
        assert!(a.advance());
        assert_eq!(a.values().collect::<Vec<_>>(), vec![false, true, false]);
        assert!(a.advance());
        assert_eq!(a.values().collect::<Vec<_>>(), vec![true, true, false]);
    }

    #[test]
    fn advance_wraps_to_all_false_after_full_cycle() {
        let mut a = Assignment::all_false(2);
        assert!(a.advance());
        assert!(a.advance());
        assert!(a.advance());
        assert!(!a.advance());
        assert_eq!(a, Assignment::all_false(2));
    }

    #[test]
    fn all_sign_combinations_unsat() {
        // Every assignment falsifies exactly one of the 8 clauses.
        let f = formula(
            3,
            &[
                &[-1, -2, -3],
                &[-1, -2, 3],
                &[-1, 2, -3],
                &[-1, 2, 3],
                &[1, -2, -3],
                &[1, -2, 3],
                &[1, 2, -3],
                &[1, 2, 3],
            ],
        );

        let mut solver = Solver::new(f);
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), 8);
    }

    #[test]
    fn five_clause_formula_unsat() {
        // Clause 1 forces x2 -> x1, clause 3 forbids x1 & x3, clause 2 forces
        // x2 | x3; both cases on x2 dead-end.
        let f = formula(
            3,
            &[&[1, -2, -2], &[2, 3, 3], &[-1, -3, -3], &[-1, -2, 3], &[1, 2, -3]],
        );

        let mut solver = Solver::new(f.clone());
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), 8);
        assert_eq!(reference::solve_by_bitmask(&f), None);
    }

    #[test]
    fn four_clause_formula_sat_with_first_witness() {
        // The five-clause formula above minus its last clause. (F,F,T) is the
        // first satisfying candidate in enumeration order, fifth overall.
        let f = formula(3, &[&[1, -2, -2], &[2, 3, 3], &[-1, -3, -3], &[-1, -2, 3]]);

        let mut solver = Solver::new(f.clone());
        match solver.solve() {
            SatResult::Satisfiable(witness) => {
                assert_eq!(witness.values().collect::<Vec<_>>(), vec![false, false, true]);
                assert!(evaluate(&f, &witness));
                assert!(reference::satisfies_by_mask(&f, reference::assignment_mask(&witness)));
            }
            SatResult::Unsatisfiable => panic!("expected a witness"),
        }
        assert_eq!(solver.candidates_tested(), 5);
    }

    #[test]
    fn empty_clause_unsat() {
        let f = formula(2, &[&[1, 2], &[]]);

        let mut solver = Solver::new(f);
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), 4);
    }

    #[test]
    fn no_variables_no_clauses_sat() {
        let f = Formula::new(0, vec![]).unwrap();

        let mut solver = Solver::new(f);
        match solver.solve() {
            SatResult::Satisfiable(witness) => assert_eq!(witness.num_variables(), 0),
            SatResult::Unsatisfiable => panic!("empty formula is vacuously satisfiable"),
        }
        assert_eq!(solver.candidates_tested(), 1);
    }

    #[test]
    fn no_variables_empty_clause_unsat() {
        let f = Formula::new(0, vec![Clause::new(vec![])]).unwrap();

        let mut solver = Solver::new(f);
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), 1);
    }

    #[test]
    fn unsat_visits_exactly_two_pow_n_candidates() {
        let f = formula(4, &[&[1], &[-1]]);

        let mut solver = Solver::new(f);
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), 16);
    }

    #[test]
    fn repeated_solves_are_deterministic() {
        let f = formula(3, &[&[1], &[-1]]);

        let mut solver = Solver::new(f);
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        let first_run = solver.candidates_tested();
        assert_eq!(solver.solve(), SatResult::Unsatisfiable);
        assert_eq!(solver.candidates_tested(), first_run);
        assert_eq!(first_run, 8);
    }

    proptest! {
        #[test]
        fn proptest_solve(f in formula_3sat_strategy()) {
            let expected = reference::solve_by_bitmask(&f);
            let mut solver = Solver::new(f.clone());
            match solver.solve() {
                SatResult::Satisfiable(witness) => {
                    prop_assert!(expected.is_some());
                    prop_assert!(evaluate(&f, &witness));
                    prop_assert!(reference::satisfies_by_mask(&f, reference::assignment_mask(&witness)));
                }
                SatResult::Unsatisfiable => {
                    prop_assert!(expected.is_none());
                    prop_assert_eq!(solver.candidates_tested(), 1u64 << f.num_variables());
                }
            }
        }
    }
}
