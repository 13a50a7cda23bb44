use std::str::FromStr;

use crate::{
    ast::Proposition, error::Error, evaluate::Assignment, parser::parse_proposition,
    variables::VariableSet,
};

/// Outcome of checking a problem. All three are ordinary results;
/// `Inconsistent` in particular reports that the premises can never hold
/// simultaneously, which makes the conclusion vacuously unfalsifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The conclusion holds under every assignment satisfying the premises.
    Verified,
    /// No assignment satisfies every premise at once.
    Inconsistent,
    /// The numerically smallest assignment satisfying the premises but not
    /// the conclusion.
    Counterexample(Assignment),
}

#[derive(Debug, Clone)]
pub struct LogicalConsequence {
    pub premises: Vec<Proposition>,
    pub conclusion: Proposition,
}

impl LogicalConsequence {
    /// Scans every assignment of the registered variables in ascending mask
    /// order, so the first counterexample found is also the smallest.
    pub fn check(&self, variables: &VariableSet) -> Verdict {
        let mut consistent = false;

        for assignment in Assignment::enumerate(variables.len()) {
            if !self
                .premises
                .iter()
                .all(|premise| premise.evaluate(assignment))
            {
                continue;
            }

            consistent = true;
            if !self.conclusion.evaluate(assignment) {
                return Verdict::Counterexample(assignment);
            }
        }

        if consistent {
            Verdict::Verified
        } else {
            Verdict::Inconsistent
        }
    }
}

/// A parsed problem file: the premises and conclusion together with the
/// variables they mention.
#[derive(Debug)]
pub struct Problem {
    pub consequence: LogicalConsequence,
    pub variables: VariableSet,
}

impl Problem {
    pub fn check(&self) -> Verdict {
        self.consequence.check(&self.variables)
    }
}

impl FromStr for Problem {
    type Err = Error;

    /// One proposition per line; the last is the conclusion, every earlier
    /// one a premise. `//` lines and blank lines are skipped.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut variables = VariableSet::new();
        let mut propositions = Vec::new();

        for (index, line) in source.lines().enumerate() {
            if line.starts_with("//") || line.trim().is_empty() {
                continue;
            }

            propositions.push(parse_proposition(line, index + 1, &mut variables)?);
        }

        let conclusion = propositions.pop().ok_or(Error::EmptyInput)?;

        Ok(Problem {
            consequence: LogicalConsequence {
                premises: propositions,
                conclusion,
            },
            variables,
        })
    }
}
