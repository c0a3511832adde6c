use crate::formula::{Clause, Formula, Literal, Variable};
use rand::Rng;

/// Builds a random CNF formula: `num_clauses` clauses of
/// `literals_per_clause` literals each, every literal's variable drawn
/// uniformly from `[1, num_variables]` and its sign chosen by a coin flip.
///
/// The generator is whatever the caller passes in; seeding a
/// [`rand::rngs::StdRng`] makes a run reproducible.
pub fn random_formula<R: Rng>(
    rng: &mut R,
    num_variables: usize,
    num_clauses: usize,
    literals_per_clause: usize,
) -> Formula {
    assert!(num_variables >= 1, "need at least one variable to draw from");

    Formula::new(
        num_variables,
        (0..num_clauses)
            .map(|_| {
                Clause::new(
                    (0..literals_per_clause)
                        .map(|_| {
                            let variable = Variable(rng.gen_range(1, num_variables + 1));
                            if rng.gen::<bool>() {
                                Literal::Positive(variable)
                            } else {
                                Literal::Negative(variable)
                            }
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>(),
    )
    .expect("generated literals stay in range")
}
