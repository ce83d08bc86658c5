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
pub struct CalculateRequest {
    #[serde(rename = "a")]
    pub a: f64,
    #[serde(rename = "b")]
    pub b: f64,
    #[serde(rename = "operation")]
    pub operation: crate::models::Operation,
}

impl CalculateRequest {
    pub fn new(a: f64, b: f64, operation: crate::models::Operation) -> CalculateRequest {
        CalculateRequest { a, b, operation }
    }
}
