//! Employees domain module (records and the owning roster).
//!
//! This crate contains the employee record and the in-memory roster that
//! owns record storage, implemented purely as deterministic domain logic
//! (no IO beyond caller-supplied display sinks, no storage backend).

pub mod employee;
pub mod roster;

pub use employee::{Employee, EmploymentStatus};
pub use roster::{FIRST_EMPLOYEE_NUMBER, Roster};
