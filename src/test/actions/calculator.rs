use async_trait::async_trait;
use error_stack::Result;

use crate::{
    api::data::Operation,
    client::validate::InvalidFields,
    test::{QaState, TestError},
};

use super::{qa_assert_eq, QaAction};

#[derive(Debug)]
pub struct SetOperands(pub &'static str, pub &'static str);

#[async_trait]
impl QaAction for SetOperands {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        state.calculator.set_first(self.0);
        state.calculator.set_second(self.1);
        Ok(())
    }
}

#[derive(Debug)]
pub struct SelectOperation(pub Operation);

#[async_trait]
impl QaAction for SelectOperation {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        state.calculator.select_operation(self.0);
        qa_assert_eq(state.calculator.operation(), self.0)
    }
}

/// Submit and wait for the response.
#[derive(Debug)]
pub struct Submit;

#[async_trait]
impl QaAction for Submit {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        state.calculator.submit().await;
        Ok(())
    }
}

#[derive(Debug)]
pub struct AssertDisplay(pub &'static str);

#[async_trait]
impl QaAction for AssertDisplay {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        qa_assert_eq(state.calculator.display().as_deref(), Some(self.0))
    }
}

#[derive(Debug)]
pub struct AssertDisplayStartsWith(pub &'static str);

#[async_trait]
impl QaAction for AssertDisplayStartsWith {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        let display = state.calculator.display();
        if display.as_deref().map_or(false, |text| text.starts_with(self.0)) {
            Ok(())
        } else {
            Err(TestError::AssertError(format!(
                "display: {:?}, expected prefix: {:?}",
                display, self.0
            ))
            .into())
        }
    }
}

#[derive(Debug)]
pub struct AssertInvalidFields {
    pub first: bool,
    pub second: bool,
}

#[async_trait]
impl QaAction for AssertInvalidFields {
    async fn execute_impl(&self, state: &mut QaState) -> Result<(), TestError> {
        qa_assert_eq(
            state.calculator.invalid_fields(),
            InvalidFields::new(self.first, self.second),
        )
    }
}
