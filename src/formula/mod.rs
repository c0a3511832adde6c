pub mod dimacs;

use std::fmt::{self, Formatter};

/// A propositional variable, identified by its 1-based index. Index 0 is
/// never a valid variable.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

/// A disjunction of literals. Order and duplicates are preserved as given:
/// they don't change satisfiability, but evaluation walks the literals
/// exactly as written.
#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first = true;
        for literal in &self.literals {
            if first {
                first = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A conjunction of clauses over variables 1 through `num_variables`.
///
/// Construction checks every literal against the declared variable count and
/// rejects the formula otherwise, so evaluation never has to bounds-check.
#[derive(Clone, Debug)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(
        num_variables: usize,
        conjuncts: impl IntoIterator<Item = Clause>,
    ) -> Result<Self, FormulaError> {
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        for clause in &clauses {
            for literal in clause.literals() {
                let index = literal.idx();
                if index == 0 || index > num_variables {
                    return Err(FormulaError::LiteralOutOfRange {
                        index,
                        num_variables,
                    });
                }
            }
        }
        Ok(Self {
            num_variables,
            clauses,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for clause in &self.clauses {
            if first {
                first = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormulaError {
    LiteralOutOfRange {
        index: usize,
        num_variables: usize,
    },
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    (1usize..=10).prop_flat_map(|num_variables| {
        let literal = (1usize..=num_variables, any::<bool>()).prop_map(|(index, positive)| {
            if positive {
                Literal::Positive(Variable(index))
            } else {
                Literal::Negative(Variable(index))
            }
        });
        let clause = proptest::collection::vec(literal, 3).prop_map(|literals| Clause::new(literals));
        proptest::collection::vec(clause, 1..=20).prop_map(move |clauses| {
            Formula::new(num_variables, clauses).expect("strategy literals stay in range")
        })
    })
}
