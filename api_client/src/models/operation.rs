/*
 * calculator-service
 *
 * Calculator service API
 *
 * The version of the OpenAPI document: 0.1.0
 *
 * Generated by: https://openapi-generator.tech
 */

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "subtract")]
    Subtract,
    #[serde(rename = "multiply")]
    Multiply,
    #[serde(rename = "divide")]
    Divide,
}

impl ToString for Operation {
    fn to_string(&self) -> String {
        match self {
            Self::Add => String::from("add"),
            Self::Subtract => String::from("subtract"),
            Self::Multiply => String::from("multiply"),
            Self::Divide => String::from("divide"),
        }
    }
}

impl Default for Operation {
    fn default() -> Operation {
        Self::Add
    }
}
