pub mod calculate_request;
pub use self::calculate_request::CalculateRequest;
pub mod calculate_result;
pub use self::calculate_result::CalculateResult;
pub mod error_response;
pub use self::error_response::ErrorResponse;
pub mod history;
pub use self::history::History;
pub mod history_entry;
pub use self::history_entry::HistoryEntry;
pub mod operation;
pub use self::operation::Operation;
