use std::{fmt, str::FromStr};

use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

/// Arithmetic operation applied to the two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Name used in requests and history entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Display glyph.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts operation names and the usual ASCII and Unicode symbols.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let operation = match value.trim().to_lowercase().as_str() {
            "add" | "+" => Self::Add,
            "subtract" | "-" | "−" => Self::Subtract,
            "multiply" | "*" | "x" | "×" => Self::Multiply,
            "divide" | "/" | "÷" => Self::Divide,
            _ => return Err(UnknownOperation(value.to_string())),
        };
        Ok(operation)
    }
}

impl From<Operation> for api_client::models::Operation {
    fn from(value: Operation) -> Self {
        match value {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
        }
    }
}

impl From<api_client::models::Operation> for Operation {
    fn from(value: api_client::models::Operation) -> Self {
        match value {
            api_client::models::Operation::Add => Self::Add,
            api_client::models::Operation::Subtract => Self::Subtract,
            api_client::models::Operation::Multiply => Self::Multiply,
            api_client::models::Operation::Divide => Self::Divide,
        }
    }
}

/// One stored calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub created_at: Option<OffsetDateTime>,
    pub operand1: f64,
    pub operand2: f64,
    pub operation: Operation,
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(operand1: f64, operand2: f64, operation: Operation, result: f64) -> Self {
        Self {
            created_at: None,
            operand1,
            operand2,
            operation,
            result,
        }
    }

    /// For example `5 + 3`.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            self.operand1,
            self.operation.symbol(),
            self.operand2
        )
    }
}

impl From<api_client::models::HistoryEntry> for HistoryEntry {
    fn from(value: api_client::models::HistoryEntry) -> Self {
        let mut entry = Self::new(
            value.operand1,
            value.operand2,
            value.operation.into(),
            value.result,
        );
        entry.created_at = value.created_at.as_deref().and_then(parse_timestamp);
        entry
    }
}

/// RFC 3339 or an ISO-8601 timestamp without offset, which is read as UTC.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    if let Ok(time) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(time);
    }

    let without_offset =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(value, without_offset)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
