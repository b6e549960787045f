//! Error types for the Workforce Registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing employee records.

use thiserror::Error;

/// The main error type for the Workforce Registry.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_registry::error::RegistryError;
///
/// let error = RegistryError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Shift label was not found in the policy shift catalog.
    #[error("Shift not found: {label}")]
    ShiftNotFound {
        /// The shift label that was not found.
        label: String,
    },

    /// A string did not have the shape of a minted employee identifier.
    #[error("Malformed employee id '{value}': {message}")]
    MalformedEmployeeId {
        /// The string that failed to parse.
        value: String,
        /// A description of what made the string malformed.
        message: String,
    },

    /// Minting kept colliding with identifiers already in the registry.
    #[error("Failed to allocate a unique employee id after {attempts} attempts")]
    IdAllocationFailed {
        /// How many mint attempts were made.
        attempts: u32,
    },

    /// An employee with this identifier already exists in the registry.
    #[error("Duplicate employee id: {id}")]
    DuplicateEmployee {
        /// The identifier that was already present.
        id: String,
    },

    /// No employee with this identifier exists in the registry.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// No leave request with this id exists on the employee record.
    #[error("Leave '{leave_id}' not found for employee {employee_id}")]
    LeaveNotFound {
        /// The employee whose record was searched.
        employee_id: String,
        /// The leave id that was looked up.
        leave_id: String,
    },

    /// A leave request could not be transitioned or contained bad data.
    #[error("Invalid leave '{leave_id}': {message}")]
    InvalidLeave {
        /// The id of the offending leave request.
        leave_id: String,
        /// A description of what made the operation invalid.
        message: String,
    },

    /// An employee profile field was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance operation was invalid for the employee's current log.
    #[error("Invalid attendance for employee {id}: {message}")]
    InvalidAttendance {
        /// The employee whose attendance log was being changed.
        id: String,
        /// A description of what made the operation invalid.
        message: String,
    },

    /// A salary component was invalid.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalary {
        /// The salary component that was invalid.
        field: String,
        /// A description of what made the component invalid.
        message: String,
    },

    /// A certificate blob exceeded the configured size limit.
    #[error("Certificate for {level} is {size_bytes} bytes, exceeding the limit of {limit_bytes} bytes")]
    OversizedCertificate {
        /// The education level the certificate was attached to.
        level: String,
        /// The size of the rejected blob in bytes.
        size_bytes: usize,
        /// The configured maximum size in bytes.
        limit_bytes: usize,
    },

    /// Password hashing or verification failed.
    #[error("Credential error: {message}")]
    CredentialError {
        /// A description of the credential failure.
        message: String,
    },
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;
