use serde::{Deserialize, Serialize};

use crate::outcome::OutcomeStatus;

/// Lifecycle status of an employee. Any state is reachable from any other;
/// there is no terminal-state concept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Suspended,
}

impl EmployeeStatus {
    /// Wire values accepted by status updates, in the order quoted in
    /// validation messages.
    pub const ALLOWED: [&'static str; 3] = ["ACTIVE", "INACTIVE", "SUSPENDED"];

    pub const fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
            EmployeeStatus::Suspended => "SUSPENDED",
        }
    }

    /// Case-insensitive parse of a candidate wire value.
    pub fn parse(candidate: &str) -> Option<Self> {
        match candidate.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Some(EmployeeStatus::Active),
            "INACTIVE" => Some(EmployeeStatus::Inactive),
            "SUSPENDED" => Some(EmployeeStatus::Suspended),
            _ => None,
        }
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        EmployeeStatus::Active
    }
}

/// Employee record as persisted. Field names are a compatibility surface
/// and serialize in camelCase; timestamps are RFC 3339 strings stamped by
/// the repository layer, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub cost_center_ref: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Employee {
    /// Builds a fresh, not-yet-persisted record from a registration
    /// request. Status and timestamps are left for the repository to stamp.
    pub fn from_request(request: &EmployeeRequest) -> Self {
        Self {
            employee_id: request.employee_id.clone(),
            name: request.name.clone(),
            email: request.email.clone(),
            department: request.department.clone(),
            cost_center_ref: request.cost_center_ref.clone(),
            status: EmployeeStatus::default(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub cost_center_ref: String,
}

/// Uniform service outcome. On SUCCESS the full profile is echoed back;
/// on any error only the status, the offending id (when known) and a
/// message are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOutcome {
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_status: Option<EmployeeStatus>,
}

impl EmployeeOutcome {
    pub fn success(employee: &Employee, message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            employee_id: Some(employee.employee_id.clone()),
            message: message.into(),
            name: Some(employee.name.clone()),
            email: Some(employee.email.clone()),
            department: Some(employee.department.clone()),
            cost_center_ref: Some(employee.cost_center_ref.clone()),
            employee_status: Some(employee.status),
        }
    }

    pub fn error(
        status: OutcomeStatus,
        employee_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::bare(status, employee_id, message)
    }

    /// Outcome carrying no profile fields, e.g. after a hard delete.
    pub fn bare(
        status: OutcomeStatus,
        employee_id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            employee_id,
            message: message.into(),
            name: None,
            email: None,
            department: None,
            cost_center_ref: None,
            employee_status: None,
        }
    }
}
