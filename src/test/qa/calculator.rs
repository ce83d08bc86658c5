use crate::{
    action_array,
    api::data::Operation,
    client::calculation::INVALID_INPUT_SUMMARY,
    test::actions::{
        calculator::{
            AssertDisplay, AssertDisplayStartsWith, AssertInvalidFields, SelectOperation,
            SetOperands, Submit,
        },
        ActionArray, QaAction, RunActions,
    },
};

use super::SingleTest;

use crate::qa_test;

const MULTIPLY_3_AND_5: ActionArray = action_array![
    SetOperands("3", "5"),
    SelectOperation(Operation::Multiply),
    Submit,
    AssertDisplay("Result: 15"),
];

pub const CALCULATOR_TESTS: &[SingleTest] = &[
    qa_test!(
        "Calculator: blank operands are rejected before any request",
        [
            SetOperands("", ""),
            Submit,
            AssertInvalidFields {
                first: true,
                second: true
            },
            AssertDisplay(INVALID_INPUT_SUMMARY),
        ]
    ),
    qa_test!(
        "Calculator: non-numeric first operand is marked",
        [
            SetOperands("abc", "5"),
            Submit,
            AssertInvalidFields {
                first: true,
                second: false
            },
        ]
    ),
    qa_test!("Calculator: multiply works", [RunActions(MULTIPLY_3_AND_5),]),
    qa_test!(
        "Calculator: every operation works",
        [
            SetOperands("8", "2"),
            SelectOperation(Operation::Add),
            Submit,
            AssertDisplay("Result: 10"),
            SelectOperation(Operation::Subtract),
            Submit,
            AssertDisplay("Result: 6"),
            SelectOperation(Operation::Multiply),
            Submit,
            AssertDisplay("Result: 16"),
            SelectOperation(Operation::Divide),
            Submit,
            AssertDisplay("Result: 4"),
        ]
    ),
    qa_test!(
        "Calculator: division by zero is reported by the service",
        [
            SetOperands("10", "0"),
            SelectOperation(Operation::Divide),
            Submit,
            AssertDisplayStartsWith("Error: "),
        ]
    ),
    qa_test!(
        "Calculator: changing operation keeps the result",
        [
            RunActions(MULTIPLY_3_AND_5),
            SelectOperation(Operation::Add),
            AssertDisplay("Result: 15"),
        ]
    ),
];
