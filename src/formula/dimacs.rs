use crate::formula::{Clause, Formula, FormulaError, Literal, Variable};
use std::io::{BufRead, BufReader, Read};

pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header: Option<(usize, usize)> = None;

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | None => continue,
            Some(&"p") => {
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let num_variables = line
                    .next()
                    .and_then(|c| usize::from_str_radix(c, 10).ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

                let num_clauses = line
                    .next()
                    .and_then(|c| usize::from_str_radix(c, 10).ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))?;

                header = Some((num_variables, num_clauses));
            }
            Some(_) => {
                let (_, num_clauses) = header
                    .ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

                let mut clause = vec![];
                for x in line {
                    match parse_literal(x)? {
                        Some(l) => clause.push(l),
                        None => break,
                    }
                }
                // A line holding only the 0 terminator is an empty clause.
                // It stays in the formula and makes it unsatisfiable.
                clauses.push(Clause::new(clause));

                if clauses.len() >= num_clauses {
                    break;
                }
            }
        }
    }

    let (num_variables, _) =
        header.ok_or_else(|| DimacsParseError::Format("missing 'p' line before clauses".into()))?;

    let formula = Formula::new(num_variables, clauses)?;
    Ok(formula)
}

fn parse_literal(s: &str) -> Result<Option<Literal>, DimacsParseError> {
    let l = isize::from_str_radix(s, 10).map_err(|_| DimacsParseError::Format("invalid literal".into()))?;
    if l > 0 {
        Ok(Some(Literal::Positive(Variable(l as usize))))
    } else if l < 0 {
        Ok(Some(Literal::Negative(Variable(-l as usize))))
    } else {
        Ok(None)
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
    Formula(FormulaError),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FormulaError> for DimacsParseError {
    fn from(e: FormulaError) -> Self {
        Self::Formula(e)
    }
}
