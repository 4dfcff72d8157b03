use serde::Serialize;

/// Outcome classification shared by both domain services.
///
/// VALIDATION_ERROR, NOT_FOUND and CONFLICT are expected, caller-fixable
/// results and are always returned as values; SYSTEM_ERROR covers
/// repository failures and anything else unanticipated. The transport
/// layer maps these to response codes without the services knowing about
/// HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    Success,
    ValidationError,
    NotFound,
    Conflict,
    SystemError,
}

impl OutcomeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            OutcomeStatus::Success => "SUCCESS",
            OutcomeStatus::ValidationError => "VALIDATION_ERROR",
            OutcomeStatus::NotFound => "NOT_FOUND",
            OutcomeStatus::Conflict => "CONFLICT",
            OutcomeStatus::SystemError => "SYSTEM_ERROR",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, OutcomeStatus::Success)
    }
}
