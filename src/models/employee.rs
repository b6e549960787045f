//! Employee model and related types.
//!
//! This module defines the [`Employee`] aggregate and its [`Profile`],
//! the root record type of the workforce registry.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};
use crate::ident::EmployeeId;

use super::{AttendanceEntry, DocumentSet, LeaveRequest, SalaryRevision};

/// Where an employee currently works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Working from a company office.
    InOffice,
    /// Working remotely.
    Remote,
}

/// Scalar identity and profile attributes of an employee.
///
/// Every field is optional at deserialization time: absent fields default to
/// empty strings or `None`. Validation is enforced at enrollment, not at the
/// type level, so partially filled profiles can be represented.
///
/// Credentials are stored as an Argon2 hash only; the plain-text password
/// never lands on the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// The employee's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Date the employee joined the company.
    pub date_of_joining: Option<NaiveDate>,
    /// Work location (city or site).
    pub location: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Current job title.
    pub job_title: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Most recent performance rating, if any.
    pub performance_rating: Option<Decimal>,
    /// Nationality.
    pub nationality: String,
    /// Gender, free-form as provided by the employee.
    pub gender: String,
    /// Religion, free-form as provided by the employee.
    pub religion: String,
    /// Reference to a stored profile photo.
    pub photo: Option<String>,
    /// Father's name.
    pub father_name: String,
    /// Name of the emergency contact person.
    pub emergency_contact_name: String,
    /// Emergency contact phone number.
    pub emergency_contact_number: String,
    /// Relation of the emergency contact to the employee.
    pub emergency_contact_relation: String,
    /// Whether the employee works in-office or remotely.
    pub work_status: Option<WorkStatus>,
    /// Argon2 hash of the employee's password, when credentials are set.
    pub password_hash: Option<String>,
}

impl Profile {
    /// Validates the profile fields that carry shape constraints.
    ///
    /// Empty fields pass: no field is required. Filled fields must be
    /// plausible:
    /// - `email` must contain a single `@` with text on both sides
    /// - `contact_number` may only contain digits and `+ - ( )` separators
    /// - `date_of_birth` must fall before `date_of_joining` when both are set
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_registry::models::Profile;
    ///
    /// let profile = Profile {
    ///     name: "Asha Verma".to_string(),
    ///     email: "asha.verma@example.com".to_string(),
    ///     ..Profile::default()
    /// };
    /// assert!(profile.validate().is_ok());
    /// ```
    pub fn validate(&self) -> RegistryResult<()> {
        if !self.email.is_empty() {
            let mut parts = self.email.splitn(2, '@');
            let local = parts.next().unwrap_or_default();
            let domain = parts.next();
            let plausible = !local.is_empty()
                && domain.is_some_and(|d| !d.is_empty() && !d.contains('@'));
            if !plausible {
                return Err(RegistryError::InvalidEmployee {
                    field: "email".to_string(),
                    message: format!("'{}' is not a plausible email address", self.email),
                });
            }
        }

        if !self.contact_number.is_empty() {
            let ok = self
                .contact_number
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
            if !ok {
                return Err(RegistryError::InvalidEmployee {
                    field: "contact_number".to_string(),
                    message: "may only contain digits and '+ - ( )' separators".to_string(),
                });
            }
        }

        if let (Some(dob), Some(doj)) = (self.date_of_birth, self.date_of_joining) {
            if dob >= doj {
                return Err(RegistryError::InvalidEmployee {
                    field: "date_of_birth".to_string(),
                    message: "must be before date of joining".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// An employee record: a profile plus its append-only history logs.
///
/// The identifier is assigned exactly once, at creation, and cannot be
/// reassigned afterwards. The history logs can only grow through the append
/// methods; existing entries are never rewritten from outside the crate.
/// Scalar profile fields stay freely overwritable.
///
/// # Example
///
/// ```
/// use workforce_registry::models::{Employee, Profile};
///
/// let employee = Employee::new(Profile {
///     name: "Asha Verma".to_string(),
///     email: "asha.verma@example.com".to_string(),
///     ..Profile::default()
/// });
/// assert!(employee.id().as_str().starts_with("TG"));
/// assert!(employee.attendance().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    /// Scalar identity and profile attributes.
    pub profile: Profile,
    #[serde(default)]
    attendance: Vec<AttendanceEntry>,
    #[serde(default)]
    leaves: Vec<LeaveRequest>,
    #[serde(default)]
    salary_history: Vec<SalaryRevision>,
    #[serde(default)]
    documents: Vec<DocumentSet>,
}

impl Employee {
    /// Creates a record with a freshly minted identifier and empty logs.
    pub fn new(profile: Profile) -> Self {
        Self::with_id(EmployeeId::mint(), profile)
    }

    /// Creates a record under a known identifier.
    ///
    /// Used when the caller controls minting, e.g. to retry on collision or
    /// to backfill a record with an identifier minted earlier.
    pub fn with_id(id: EmployeeId, profile: Profile) -> Self {
        Self {
            id,
            profile,
            attendance: Vec::new(),
            leaves: Vec::new(),
            salary_history: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Returns the employee's identifier.
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Returns the attendance log, oldest entry first.
    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    /// Returns the leave log, oldest request first.
    pub fn leaves(&self) -> &[LeaveRequest] {
        &self.leaves
    }

    /// Returns the salary history, in insertion order.
    pub fn salary_history(&self) -> &[SalaryRevision] {
        &self.salary_history
    }

    /// Returns the attached document sets, in insertion order.
    pub fn documents(&self) -> &[DocumentSet] {
        &self.documents
    }

    /// Appends an attendance entry to the log.
    pub fn record_attendance(&mut self, entry: AttendanceEntry) {
        self.attendance.push(entry);
    }

    /// Completes the most recent open attendance entry at the given instant.
    ///
    /// Returns `false` when no open entry exists.
    pub fn clock_out_at(&mut self, at: DateTime<Utc>) -> bool {
        match self.attendance.iter_mut().rev().find(|e| e.is_open()) {
            Some(entry) => {
                entry.clock_out_at(at);
                true
            }
            None => false,
        }
    }

    /// Appends a leave request to the log.
    pub fn submit_leave(&mut self, leave: LeaveRequest) {
        self.leaves.push(leave);
    }

    /// Looks up a leave request by its id.
    pub fn leave(&self, leave_id: Uuid) -> Option<&LeaveRequest> {
        self.leaves.iter().find(|l| l.leave_id == leave_id)
    }

    pub(crate) fn leave_mut(&mut self, leave_id: Uuid) -> Option<&mut LeaveRequest> {
        self.leaves.iter_mut().find(|l| l.leave_id == leave_id)
    }

    /// Appends a salary revision to the history.
    pub fn record_salary_revision(&mut self, revision: SalaryRevision) {
        self.salary_history.push(revision);
    }

    /// Returns the salary revision with the latest effective date.
    pub fn latest_salary(&self) -> Option<&SalaryRevision> {
        self.salary_history.iter().max_by_key(|r| r.effective_date)
    }

    /// Appends a document set to the record.
    pub fn attach_documents(&mut self, documents: DocumentSet) {
        self.documents.push(documents);
    }
}
