//! Operand text validation

/// Operand input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    First,
    Second,
}

/// Set of operand fields which failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvalidFields {
    first: bool,
    second: bool,
}

impl InvalidFields {
    pub fn new(first: bool, second: bool) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::First => self.first,
            Field::Second => self.second,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.first && !self.second
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid { a: f64, b: f64 },
    Invalid { fields: InvalidFields },
}

/// Both fields are always checked, so every invalid field is reported.
pub fn validate(raw_a: &str, raw_b: &str) -> ValidationResult {
    match (parse_operand(raw_a), parse_operand(raw_b)) {
        (Some(a), Some(b)) => ValidationResult::Valid { a, b },
        (a, b) => ValidationResult::Invalid {
            fields: InvalidFields::new(a.is_none(), b.is_none()),
        },
    }
}

/// Trimmed text parsed as a finite number.
pub fn parse_operand(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
