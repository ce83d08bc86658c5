//! QA tests
//!

pub mod calculator;
pub mod history;

use self::{calculator::CALCULATOR_TESTS, history::HISTORY_TESTS};

use super::actions::ActionArray;

pub type SingleTest = (&'static str, ActionArray);

#[macro_export]
macro_rules! qa_test {
    ($s:expr,[ $( $actions:expr, )* ] ) => {
        (
            $s,
            &[   $( &($actions) as &dyn QaAction, )*    ]
        )
    };
}

pub const ALL_QA_TESTS: &[&[SingleTest]] = &[CALCULATOR_TESTS, HISTORY_TESTS];

pub fn test_count() -> usize {
    ALL_QA_TESTS.iter().map(|tests| tests.len()).sum()
}

pub fn all_tests() -> impl Iterator<Item = &'static SingleTest> {
    ALL_QA_TESTS.iter().flat_map(|tests| tests.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all_tests().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), test_count());
    }

    #[test]
    fn every_test_has_actions() {
        assert!(all_tests().all(|(_, actions)| !actions.is_empty()));
    }
}
