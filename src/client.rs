//! Client side state: operand validation, calculation requests and the
//! calculation history.

pub mod calculation;
pub mod history;
pub mod validate;
