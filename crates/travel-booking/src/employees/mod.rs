//! Employee registration and lifecycle management.
//!
//! Employees are created once under an externally supplied, immutable
//! `employeeId`; duplicates are rejected by a service-level existence
//! check. Unlike bookings, the status lifecycle has no terminal states.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Employee, EmployeeOutcome, EmployeeRequest, EmployeeStatus};
pub use repository::EmployeeRepository;
pub use router::employee_router;
pub use service::EmployeeService;
