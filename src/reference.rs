use crate::formula::Formula;
use crate::solver::Assignment;

// Independent evaluator used to cross-check the solver in tests. Assignments
// are u32 bitmasks, bit x-1 holding the value of variable x, enumerated in
// plain integer order rather than the solver's ripple-carry order.

pub(crate) fn satisfies_by_mask(f: &Formula, mask: u32) -> bool {
    'clauses: for clause in f.clauses() {
        for literal in clause.literals() {
            let value = mask & (1 << (literal.idx() - 1)) != 0;
            if value == literal.is_positive() {
                // this clause is satisfied, let's go to the next one
                continue 'clauses;
            }
        }
        // if we got here, this clause was not satisfied, so this mask is bogus
        return false;
    }
    true
}

pub(crate) fn solve_by_bitmask(f: &Formula) -> Option<u32> {
    let num_variables = f.num_variables();
    assert!(num_variables <= 15); // just for safety

    (0..1u32 << num_variables).find(|&mask| satisfies_by_mask(f, mask))
}

pub(crate) fn assignment_mask(assignment: &Assignment) -> u32 {
    assignment
        .values()
        .enumerate()
        .fold(0, |mask, (i, value)| if value { mask | 1 << i } else { mask })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn bitmask_solve_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(2, vec![c1, c2]).unwrap();

        let mask = solve_by_bitmask(&f).expect("satisfiable");
        assert!(satisfies_by_mask(&f, mask));
        // x1 false, x2 true is the only model
        assert_eq!(mask, 0b10);
    }

    #[test]
    fn bitmask_solve_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(2, vec![c1, c2, c3]).unwrap();

        assert_eq!(solve_by_bitmask(&f), None);
    }

    #[test]
    fn empty_formula_has_empty_model() {
        let f = Formula::new(0, vec![]).unwrap();
        assert_eq!(solve_by_bitmask(&f), Some(0));
    }
}
