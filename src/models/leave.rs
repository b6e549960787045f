//! Leave request model and related types.
//!
//! This module defines the [`LeaveRequest`] struct, its [`LeaveStatus`]
//! lifecycle, and the [`LeaveBalances`] counters snapshotted on each
//! request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};

/// The lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

/// Remaining entitled leave days per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveBalances {
    /// Total remaining leave days across all categories.
    pub total: u32,
    /// Remaining sick leave days.
    pub sick: u32,
    /// Remaining uncategorized leave days.
    pub other: u32,
    /// Remaining personal leave days.
    pub personal: u32,
}

/// A single leave event in an employee's leave log.
///
/// Each request snapshots the balances at submission time, so the log doubles
/// as a balance history.
///
/// # Example
///
/// ```
/// use workforce_registry::models::{LeaveBalances, LeaveRequest, LeaveStatus};
///
/// let mut leave = LeaveRequest::submit(
///     "family function".to_string(),
///     true,
///     LeaveBalances { total: 24, sick: 8, other: 4, personal: 12 },
/// );
/// assert_eq!(leave.status, LeaveStatus::Pending);
///
/// leave.approve("TG2405143f9a21bc").unwrap();
/// assert!(leave.is_approved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier of this leave request.
    pub leave_id: Uuid,
    /// Who resolved the request, once it is no longer pending.
    #[serde(default)]
    pub approval: Option<String>,
    /// Whether this is a short leave (part of a day).
    pub short_leave: bool,
    /// The employee's stated reason for the leave.
    pub reason: String,
    /// Balance counters snapshotted at submission time.
    pub balances: LeaveBalances,
    /// Current lifecycle state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Creates a pending request with a fresh leave id.
    pub fn submit(reason: String, short_leave: bool, balances: LeaveBalances) -> Self {
        Self {
            leave_id: Uuid::new_v4(),
            approval: None,
            short_leave,
            reason,
            balances,
            status: LeaveStatus::Pending,
        }
    }

    /// Approves a pending request, recording who approved it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLeave` when the request was already resolved.
    pub fn approve(&mut self, approver: &str) -> RegistryResult<()> {
        self.resolve(LeaveStatus::Approved, approver)
    }

    /// Rejects a pending request, recording who rejected it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLeave` when the request was already resolved.
    pub fn reject(&mut self, approver: &str) -> RegistryResult<()> {
        self.resolve(LeaveStatus::Rejected, approver)
    }

    fn resolve(&mut self, status: LeaveStatus, approver: &str) -> RegistryResult<()> {
        if self.status != LeaveStatus::Pending {
            return Err(RegistryError::InvalidLeave {
                leave_id: self.leave_id.to_string(),
                message: format!("already resolved as {:?}", self.status),
            });
        }
        self.status = status;
        self.approval = Some(approver.to_string());
        Ok(())
    }

    /// Returns true while the request awaits a decision.
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Returns true once the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}
