use crate::apis::{configuration, ResponseContent};

/// Error message sent by the service in the `error` field of a non-success
/// response body.
pub trait ServiceErrorMessage {
    fn service_error_message(&self) -> Option<&str>;
}

impl ServiceErrorMessage for crate::apis::calculator_api::PostCalculateError {
    fn service_error_message(&self) -> Option<&str> {
        match self {
            Self::DefaultResponse(e) => e.error.as_deref(),
            Self::UnknownValue(_) => None,
        }
    }
}

impl ServiceErrorMessage for crate::apis::calculator_api::GetHistoryError {
    fn service_error_message(&self) -> Option<&str> {
        match self {
            Self::DefaultResponse(e) => e.error.as_deref(),
            Self::UnknownValue(_) => None,
        }
    }
}

impl<T: ServiceErrorMessage> ResponseContent<T> {
    pub fn service_error_message(&self) -> Option<&str> {
        self.entity
            .as_ref()
            .and_then(ServiceErrorMessage::service_error_message)
    }
}

/// Check that something answers HTTP requests at the configured base path.
/// Any HTTP response counts as available.
pub async fn api_available(configuration: &configuration::Configuration) -> Result<(), ()> {
    let local_var_configuration = configuration;

    let local_var_client = &local_var_configuration.client;

    let local_var_uri_str = format!("{}/history", local_var_configuration.base_path,);
    let mut local_var_req_builder =
        local_var_client.request(reqwest::Method::GET, local_var_uri_str.as_str());

    if let Some(ref local_var_user_agent) = local_var_configuration.user_agent {
        local_var_req_builder =
            local_var_req_builder.header(reqwest::header::USER_AGENT, local_var_user_agent.clone());
    }

    let local_var_req = local_var_req_builder.build().map_err(|_| ())?;
    let _ = local_var_client
        .execute(local_var_req)
        .await
        .map_err(|_| ())?;

    Ok(())
}

