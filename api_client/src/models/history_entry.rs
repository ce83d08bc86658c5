/*
 * calculator-service
 *
 * Calculator service API
 *
 * The version of the OpenAPI document: 0.1.0
 *
 * Generated by: https://openapi-generator.tech
 */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 timestamp
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "operand1")]
    pub operand1: f64,
    #[serde(rename = "operand2")]
    pub operand2: f64,
    #[serde(rename = "operation")]
    pub operation: crate::models::Operation,
    #[serde(rename = "result")]
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(
        operand1: f64,
        operand2: f64,
        operation: crate::models::Operation,
        result: f64,
    ) -> HistoryEntry {
        HistoryEntry {
            created_at: None,
            operand1,
            operand2,
            operation,
            result,
        }
    }
}
