//! The in-memory employee registry.
//!
//! This module provides the [`Registry`] type, the operations layer over
//! employee records: enrollment with identifier allocation, attendance and
//! leave tracking, salary history, and document intake. The registry
//! enforces identifier uniqueness; everything it stores follows the
//! append-only lifecycle of the record model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PolicyLoader;
use crate::credential;
use crate::error::{RegistryError, RegistryResult};
use crate::ident::EmployeeId;
use crate::models::{
    AttendanceEntry, DocumentSet, Employee, LeaveRequest, Profile, SalaryRevision, WorkStatus,
};

/// How many times enrollment re-mints an identifier before giving up.
///
/// The 32-bit suffix space makes same-day collisions unlikely but possible;
/// a handful of retries is enough to make allocation failure practically
/// unreachable.
const MAX_MINT_ATTEMPTS: u32 = 5;

/// An in-memory store of employee records keyed by identifier.
///
/// The registry is a plain owned structure: mutators take `&mut self` and it
/// holds no interior shared state, so callers that need cross-thread access
/// wrap it themselves.
///
/// # Example
///
/// ```no_run
/// use workforce_registry::config::PolicyLoader;
/// use workforce_registry::models::Profile;
/// use workforce_registry::registry::Registry;
///
/// let policy = PolicyLoader::load("./config/hr").unwrap();
/// let mut registry = Registry::new(policy);
///
/// let id = registry
///     .enroll(
///         Profile {
///             name: "Asha Verma".to_string(),
///             email: "asha.verma@example.com".to_string(),
///             ..Profile::default()
///         },
///         None,
///     )
///     .unwrap();
/// registry.record_attendance(&id, "day").unwrap();
/// ```
#[derive(Debug)]
pub struct Registry {
    policy: PolicyLoader,
    employees: HashMap<EmployeeId, Employee>,
}

impl Registry {
    /// Creates an empty registry operating under the given policy.
    pub fn new(policy: PolicyLoader) -> Self {
        Self {
            policy,
            employees: HashMap::new(),
        }
    }

    /// Returns the policy the registry operates under.
    pub fn policy(&self) -> &PolicyLoader {
        &self.policy
    }

    /// Returns the number of enrolled employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true when no employee is enrolled.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterates over all enrolled employees in arbitrary order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Enrolls a new employee and returns the allocated identifier.
    ///
    /// Validates the profile, hashes the password when one is given, and
    /// allocates a fresh identifier, re-minting on the rare collision with
    /// an existing record.
    ///
    /// # Errors
    ///
    /// - `InvalidEmployee` when the profile fails validation
    /// - `CredentialError` when password hashing fails
    /// - `IdAllocationFailed` when minting keeps colliding
    pub fn enroll(&mut self, profile: Profile, password: Option<&str>) -> RegistryResult<EmployeeId> {
        profile.validate()?;

        let mut profile = profile;
        if let Some(plain) = password {
            profile.password_hash = Some(credential::hash_password(plain)?);
        }

        let id = self.allocate_id()?;
        info!(employee_id = %id, name = %profile.name, "Enrolling employee");
        self.employees
            .insert(id.clone(), Employee::with_id(id.clone(), profile));
        Ok(id)
    }

    /// Inserts a pre-built record, e.g. one deserialized from an export.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployee` when the record's identifier is already
    /// enrolled.
    pub fn insert(&mut self, employee: Employee) -> RegistryResult<()> {
        let id = employee.id().clone();
        if self.employees.contains_key(&id) {
            return Err(RegistryError::DuplicateEmployee { id: id.to_string() });
        }
        info!(employee_id = %id, "Inserting existing employee record");
        self.employees.insert(id, employee);
        Ok(())
    }

    fn allocate_id(&self) -> RegistryResult<EmployeeId> {
        for attempt in 1..=MAX_MINT_ATTEMPTS {
            let candidate = EmployeeId::mint();
            if !self.employees.contains_key(&candidate) {
                return Ok(candidate);
            }
            warn!(employee_id = %candidate, attempt, "Minted id collides with an existing record");
        }
        Err(RegistryError::IdAllocationFailed {
            attempts: MAX_MINT_ATTEMPTS,
        })
    }

    /// Looks up an employee record.
    pub fn employee(&self, id: &EmployeeId) -> RegistryResult<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| RegistryError::EmployeeNotFound { id: id.to_string() })
    }

    fn employee_mut(&mut self, id: &EmployeeId) -> RegistryResult<&mut Employee> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| RegistryError::EmployeeNotFound { id: id.to_string() })
    }

    /// Clocks an employee in for a rostered shift at the current instant.
    ///
    /// The shift is resolved from the policy catalog and snapshotted onto
    /// the new attendance entry.
    pub fn record_attendance(&mut self, id: &EmployeeId, shift_label: &str) -> RegistryResult<()> {
        self.record_attendance_at(id, shift_label, Utc::now())
    }

    /// Clocks an employee in at an explicit instant.
    pub fn record_attendance_at(
        &mut self,
        id: &EmployeeId,
        shift_label: &str,
        at: DateTime<Utc>,
    ) -> RegistryResult<()> {
        let shift = self.policy.get_shift(shift_label)?;
        let entry = AttendanceEntry::clock_in_at(
            at,
            shift_label.to_string(),
            shift.start_time,
            shift.end_time,
            shift.duration_hours,
        );

        let employee = self.employee_mut(id)?;
        info!(employee_id = %id, shift = shift_label, "Recording attendance");
        employee.record_attendance(entry);
        Ok(())
    }

    /// Clocks an employee out of their open attendance entry.
    pub fn clock_out(&mut self, id: &EmployeeId) -> RegistryResult<()> {
        self.clock_out_at(id, Utc::now())
    }

    /// Clocks an employee out at an explicit instant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAttendance` when no open entry exists.
    pub fn clock_out_at(&mut self, id: &EmployeeId, at: DateTime<Utc>) -> RegistryResult<()> {
        let employee = self.employee_mut(id)?;
        if employee.clock_out_at(at) {
            Ok(())
        } else {
            Err(RegistryError::InvalidAttendance {
                id: id.to_string(),
                message: "no open attendance entry to clock out of".to_string(),
            })
        }
    }

    /// Submits a leave request with balances seeded from the policy
    /// entitlements, returning the new leave id.
    pub fn request_leave(
        &mut self,
        id: &EmployeeId,
        reason: &str,
        short_leave: bool,
    ) -> RegistryResult<Uuid> {
        let balances = self.policy.starting_balances();
        let employee = self.employee_mut(id)?;

        let leave = LeaveRequest::submit(reason.to_string(), short_leave, balances);
        let leave_id = leave.leave_id;
        info!(employee_id = %id, %leave_id, short_leave, "Leave requested");
        employee.submit_leave(leave);
        Ok(leave_id)
    }

    /// Approves a pending leave request.
    pub fn approve_leave(
        &mut self,
        id: &EmployeeId,
        leave_id: Uuid,
        approver: &str,
    ) -> RegistryResult<()> {
        self.resolve_leave(id, leave_id, approver, true)
    }

    /// Rejects a pending leave request.
    pub fn reject_leave(
        &mut self,
        id: &EmployeeId,
        leave_id: Uuid,
        approver: &str,
    ) -> RegistryResult<()> {
        self.resolve_leave(id, leave_id, approver, false)
    }

    fn resolve_leave(
        &mut self,
        id: &EmployeeId,
        leave_id: Uuid,
        approver: &str,
        approve: bool,
    ) -> RegistryResult<()> {
        let employee = self.employee_mut(id)?;
        let leave =
            employee
                .leave_mut(leave_id)
                .ok_or_else(|| RegistryError::LeaveNotFound {
                    employee_id: id.to_string(),
                    leave_id: leave_id.to_string(),
                })?;

        if approve {
            leave.approve(approver)?;
        } else {
            leave.reject(approver)?;
        }
        info!(employee_id = %id, %leave_id, approve, "Leave resolved");
        Ok(())
    }

    /// Appends a salary revision to an employee's history.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSalary` when any component is negative.
    pub fn record_salary_revision(
        &mut self,
        id: &EmployeeId,
        revision: SalaryRevision,
    ) -> RegistryResult<()> {
        revision.salary.validate()?;

        let employee = self.employee_mut(id)?;
        info!(
            employee_id = %id,
            effective_date = %revision.effective_date,
            "Recording salary revision"
        );
        employee.record_salary_revision(revision);
        Ok(())
    }

    /// Appends a document set to an employee's record.
    ///
    /// # Errors
    ///
    /// Returns `OversizedCertificate` when any certificate blob exceeds the
    /// policy cap.
    pub fn attach_documents(&mut self, id: &EmployeeId, documents: DocumentSet) -> RegistryResult<()> {
        documents.validate_certificates(self.policy.max_certificate_bytes())?;

        let employee = self.employee_mut(id)?;
        info!(
            employee_id = %id,
            education_records = documents.education.len(),
            "Attaching documents"
        );
        employee.attach_documents(documents);
        Ok(())
    }

    /// Overwrites an employee's work status.
    pub fn set_work_status(&mut self, id: &EmployeeId, status: WorkStatus) -> RegistryResult<()> {
        let employee = self.employee_mut(id)?;
        employee.profile.work_status = Some(status);
        Ok(())
    }

    /// Verifies a password attempt against the employee's stored hash.
    ///
    /// Records without credentials reject every attempt.
    pub fn verify_credentials(&self, id: &EmployeeId, password: &str) -> RegistryResult<bool> {
        let employee = self.employee(id)?;
        match &employee.profile.password_hash {
            Some(hash) => credential::verify_password(password, hash),
            None => Ok(false),
        }
    }
}
