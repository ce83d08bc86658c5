/*
 * calculator-service
 *
 * Calculator service API
 *
 * The version of the OpenAPI document: 0.1.0
 *
 * Generated by: https://openapi-generator.tech
 */

/// ErrorResponse : Body of every non-success response.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Body of every non-success response.
    pub fn new() -> ErrorResponse {
        ErrorResponse { error: None }
    }
}
