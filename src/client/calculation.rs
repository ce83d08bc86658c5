//! Calculation controller
//!
//! Owns the operand text, the selected operation and the state of the latest
//! calculation request. Submitting is split into [CalculationController::begin_submit]
//! and [CalculationController::complete] so that the remote call can run
//! while the owner keeps handling input. Every started request gets a
//! [RequestToken] and only the response for the newest token is applied.

use std::sync::Arc;

use error_stack::Result;
use tracing::{debug, info};

use crate::api::{data::Operation, RemoteCalculator, RemoteError};

use super::validate::{validate, Field, InvalidFields, ValidationResult};

pub const INVALID_INPUT_SUMMARY: &str = "Please enter valid numbers in both fields";
pub const INVALID_FIELD_MESSAGE: &str = "Please enter a valid number";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success { result: f64 },
    Failure { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Result area text. Nothing is shown while idle or loading.
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Loading => None,
            Self::Success { result } => Some(format!("Result: {result}")),
            Self::Failure { message } => Some(format!("Error: {message}")),
        }
    }
}

/// Raw operand text. Never cleared by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandInput {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

pub enum SubmitOutcome {
    /// Operands did not validate. No request was made.
    Invalid(InvalidFields),
    Started(PendingCalculation),
}

/// Remote call for one submit. Does not borrow the controller.
pub struct PendingCalculation {
    token: RequestToken,
    a: f64,
    b: f64,
    operation: Operation,
    client: Arc<dyn RemoteCalculator>,
}

impl PendingCalculation {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub async fn run(self) -> CalculationResponse {
        let result = self.client.compute(self.a, self.b, self.operation).await;
        CalculationResponse {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct CalculationResponse {
    token: RequestToken,
    result: Result<f64, RemoteError>,
}

pub struct CalculationController {
    client: Arc<dyn RemoteCalculator>,
    input: OperandInput,
    operation: Operation,
    request: RequestState,
    invalid_fields: InvalidFields,
    latest_token: u64,
}

impl CalculationController {
    pub fn new(client: Arc<dyn RemoteCalculator>) -> Self {
        Self {
            client,
            input: OperandInput::default(),
            operation: Operation::default(),
            request: RequestState::Idle,
            invalid_fields: InvalidFields::default(),
            latest_token: 0,
        }
    }

    pub fn input(&self) -> &OperandInput {
        &self.input
    }

    pub fn set_first(&mut self, text: impl Into<String>) {
        self.input.first = text.into();
    }

    pub fn set_second(&mut self, text: impl Into<String>) {
        self.input.second = text.into();
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Request state is not touched.
    pub fn select_operation(&mut self, operation: Operation) {
        self.operation = operation;
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn invalid_fields(&self) -> InvalidFields {
        self.invalid_fields
    }

    /// Inline message for an operand field.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.invalid_fields
            .contains(field)
            .then_some(INVALID_FIELD_MESSAGE)
    }

    /// Result area text.
    pub fn display(&self) -> Option<String> {
        if self.invalid_fields.is_empty() {
            self.request.display()
        } else {
            Some(INVALID_INPUT_SUMMARY.to_string())
        }
    }

    /// Validate the current input and start a request if it is valid.
    ///
    /// Any earlier request still in flight is superseded in both cases.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        self.latest_token += 1;
        let token = RequestToken(self.latest_token);

        match validate(&self.input.first, &self.input.second) {
            ValidationResult::Invalid { fields } => {
                debug!("Invalid operands: {:?}", fields);
                self.invalid_fields = fields;
                self.request = RequestState::Idle;
                SubmitOutcome::Invalid(fields)
            }
            ValidationResult::Valid { a, b } => {
                self.invalid_fields = InvalidFields::default();
                self.request = RequestState::Loading;
                SubmitOutcome::Started(PendingCalculation {
                    token,
                    a,
                    b,
                    operation: self.operation,
                    client: self.client.clone(),
                })
            }
        }
    }

    /// Apply a finished request. Returns false if a newer submit has
    /// happened since the request started.
    pub fn complete(&mut self, response: CalculationResponse) -> bool {
        if response.token != RequestToken(self.latest_token) {
            info!("Discarding stale calculation response {:?}", response.token);
            return false;
        }

        self.request = match response.result {
            Ok(result) => RequestState::Success { result },
            Err(e) => {
                debug!("Calculation failed: {e:?}");
                RequestState::Failure {
                    message: e.current_context().message().to_string(),
                }
            }
        };
        true
    }

    /// Submit and wait for the response.
    pub async fn submit(&mut self) {
        if let SubmitOutcome::Started(pending) = self.begin_submit() {
            let response = pending.run().await;
            self.complete(response);
        }
    }
}
