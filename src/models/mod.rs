//! Core data models for the Workforce Registry.
//!
//! This module contains all the domain models used throughout the registry.

mod attendance;
mod document;
mod employee;
mod leave;
mod salary;

pub use attendance::AttendanceEntry;
pub use document::{DocumentSet, EducationLevel, EducationRecord};
pub use employee::{Employee, Profile, WorkStatus};
pub use leave::{LeaveBalances, LeaveRequest, LeaveStatus};
pub use salary::{SalaryBreakdown, SalaryRevision};
