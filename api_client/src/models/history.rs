/*
 * calculator-service
 *
 * Calculator service API
 *
 * The version of the OpenAPI document: 0.1.0
 *
 * Generated by: https://openapi-generator.tech
 */

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(rename = "history")]
    pub history: Vec<crate::models::HistoryEntry>,
}

impl History {
    pub fn new(history: Vec<crate::models::HistoryEntry>) -> History {
        History { history }
    }
}
