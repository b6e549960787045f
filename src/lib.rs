//! Workforce Registry for HR employee tracking
//!
//! This crate provides the employee record model for an HR tracking system,
//! generation of human-readable employee identifiers, and an in-memory
//! registry that enforces identifier uniqueness while appending attendance,
//! leave, salary, and document history to employee records.

#![warn(missing_docs)]

pub mod config;
pub mod credential;
pub mod error;
pub mod ident;
pub mod models;
pub mod registry;
