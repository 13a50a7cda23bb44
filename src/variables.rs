use std::fmt::{self, Display};

use indexmap::IndexSet;
use itertools::Itertools;

use crate::{ast::VariableId, error::Error, evaluate::Assignment};

/// Upper bound on distinct variable names; each one occupies one bit of an
/// [`Assignment`] mask.
pub const MAX_VARIABLES: usize = 32;

/// The variable names of a problem, in order of first appearance. A name's
/// position in the set is its permanent index.
#[derive(Debug, Default)]
pub struct VariableSet(IndexSet<String>);

impl VariableSet {
    pub fn new() -> Self {
        VariableSet::default()
    }

    /// Returns the index of `name`, registering it if it has not been seen
    /// before. Fails the moment a 33rd distinct name arrives: the
    /// assignment mask has no bit left for it, so the run cannot continue.
    pub fn resolve(&mut self, name: &str) -> Result<VariableId, Error> {
        if let Some(index) = self.0.get_index_of(name) {
            return Ok(VariableId(index));
        }

        if self.0.len() == MAX_VARIABLES {
            return Err(Error::TooManyVariables);
        }

        let (index, _) = self.0.insert_full(name.to_owned());
        Ok(VariableId(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The `(name, value)` pairs of `assignment`, in index order. This is
    /// the shape a counterexample report prints.
    pub fn bindings(&self, assignment: Assignment) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(move |(index, name)| (name.as_str(), assignment.value_of(VariableId(index))))
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
