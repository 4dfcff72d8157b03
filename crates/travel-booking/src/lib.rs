//! Domain core for the corporate travel booking service.
//!
//! Employees register once and create bookings (flights, hotels); both
//! entities move through small status lifecycles. The interesting logic
//! lives in [`validation`] and the two domain services ([`bookings`],
//! [`employees`]); persistence sits behind per-entity repository traits
//! with interchangeable backends in [`storage`].

pub mod bookings;
pub mod config;
pub mod employees;
pub mod error;
pub mod outcome;
pub mod repository;
pub mod storage;
pub mod telemetry;
pub mod validation;
