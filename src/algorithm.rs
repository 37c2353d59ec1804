// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strum_macros::{EnumIter, IntoStaticStr};

/// The convex hull algorithms that appear in a timing table.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
pub enum Algorithm {
    #[strum(serialize = "jarvis")]
    Jarvis,
    #[strum(serialize = "graham")]
    Graham,
    #[strum(serialize = "chan")]
    Chan,
}

/// Number of `Algorithm` variants.
pub const ALGORITHMS: usize = 3;

impl Algorithm {
    /// Column stem, e.g. `jarvis`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Name of the timing column in the input table.
    pub fn column(self) -> String {
        format!("{}_time", self.name())
    }

    /// Display name with the first letter capitalized, e.g. `Jarvis`.
    pub fn label(self) -> String {
        let mut chars = self.name().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Algorithm::Jarvis => 0,
            Algorithm::Graham => 1,
            Algorithm::Chan => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names() {
        let names: Vec<&str> = Algorithm::iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["jarvis", "graham", "chan"]);
        assert_eq!(Algorithm::Graham.column(), "graham_time");
    }

    #[test]
    fn labels_are_capitalized() {
        let labels: Vec<String> = Algorithm::iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Jarvis", "Graham", "Chan"]);
    }

    #[test]
    fn indices_are_dense() {
        let indices: Vec<usize> = Algorithm::iter().map(|a| a.index()).collect();
        assert_eq!(indices, (0..ALGORITHMS).collect::<Vec<_>>());
    }
}
