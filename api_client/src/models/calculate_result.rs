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
pub struct CalculateResult {
    #[serde(rename = "result")]
    pub result: f64,
}

impl CalculateResult {
    pub fn new(result: f64) -> CalculateResult {
        CalculateResult { result }
    }
}
