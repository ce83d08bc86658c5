//! HTTP implementation of [RemoteCalculator]

use api_client::{
    apis::{calculator_api, configuration::Configuration, Error},
    manual_additions::ServiceErrorMessage,
    models::CalculateRequest,
};
use async_trait::async_trait;
use error_stack::{IntoReport, Result};
use reqwest::{Client, Url};
use tracing::{debug, info};

use super::{
    data::{HistoryEntry, Operation},
    RemoteCalculator, RemoteError,
};

pub const CALCULATION_ERROR_DEFAULT: &str = "Calculation error";
pub const HISTORY_ERROR_DEFAULT: &str = "Failed to fetch history";

#[derive(Debug, Clone)]
pub struct ApiClient {
    calculator: Configuration,
}

impl ApiClient {
    pub fn new(base_url: &Url) -> Self {
        let client = reqwest::Client::new();

        Self {
            calculator: Self::create_configuration(&client, base_url.as_str()),
        }
    }

    fn create_configuration(client: &Client, base_url: &str) -> Configuration {
        let path = base_url.trim_end_matches('/').to_string();
        Configuration {
            base_path: path,
            client: client.clone(),
            ..Configuration::default()
        }
    }

    pub fn print_to_log(&self) {
        info!("Calculator API base url: {}", self.calculator.base_path);
    }

    pub fn calculator(&self) -> &Configuration {
        &self.calculator
    }
}

#[async_trait]
impl RemoteCalculator for ApiClient {
    async fn compute(&self, a: f64, b: f64, operation: Operation) -> Result<f64, RemoteError> {
        debug!("POST /calculate a: {a}, b: {b}, operation: {operation}");

        let request = CalculateRequest::new(a, b, operation.into());
        calculator_api::post_calculate(&self.calculator, request)
            .await
            .map(|data| data.result)
            .map_err(|e| remote_error(e, CALCULATION_ERROR_DEFAULT))
            .into_report()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, RemoteError> {
        debug!("GET /history");

        calculator_api::get_history(&self.calculator)
            .await
            .map(|data| {
                data.history
                    .into_iter()
                    .map(HistoryEntry::from)
                    .collect::<Vec<_>>()
            })
            .map_err(|e| remote_error(e, HISTORY_ERROR_DEFAULT))
            .into_report()
    }
}

/// Non-success responses become [RemoteError::Service] with the message from
/// the response body or `default_message`. Everything else is a transport
/// error carrying the underlying message.
fn remote_error<T: ServiceErrorMessage>(e: Error<T>, default_message: &str) -> RemoteError {
    match e {
        Error::ResponseError(content) => {
            debug!("Calculator API status: {}", content.status);
            let message = content
                .service_error_message()
                .unwrap_or(default_message)
                .to_string();
            RemoteError::Service(message)
        }
        Error::Reqwest(e) => RemoteError::Transport(e.to_string()),
        Error::Serde(e) => RemoteError::Transport(e.to_string()),
        Error::Io(e) => RemoteError::Transport(e.to_string()),
    }
}
