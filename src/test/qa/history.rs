use crate::{
    api::data::Operation,
    test::actions::{
        calculator::{AssertDisplay, SelectOperation, SetOperands, Submit},
        history::{AssertHistoryLoaded, AssertHistoryRow, LoadHistory},
        QaAction,
    },
};

use super::SingleTest;

use crate::qa_test;

pub const HISTORY_TESTS: &[SingleTest] = &[
    qa_test!("History: loading works", [LoadHistory, AssertHistoryLoaded,]),
    qa_test!(
        "History: calculation is stored to history",
        [
            SetOperands("7", "6"),
            SelectOperation(Operation::Multiply),
            Submit,
            AssertDisplay("Result: 42"),
            LoadHistory,
            AssertHistoryRow("7 × 6 = 42"),
        ]
    ),
];
