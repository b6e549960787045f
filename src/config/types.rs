//! Configuration types for HR policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::LeaveBalances;

/// Metadata about the HR policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Leave day entitlements granted per year.
///
/// These seed the balance counters snapshotted on new leave requests.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LeaveEntitlements {
    /// Total entitled leave days across all categories.
    pub total: u32,
    /// Entitled sick leave days.
    pub sick: u32,
    /// Entitled personal leave days.
    pub personal: u32,
    /// Entitled uncategorized leave days.
    pub other: u32,
}

impl LeaveEntitlements {
    /// Converts the entitlements into starting balance counters.
    pub fn starting_balances(&self) -> LeaveBalances {
        LeaveBalances {
            total: self.total,
            sick: self.sick,
            other: self.other,
            personal: self.personal,
        }
    }
}

/// Rules for submitted documents.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DocumentRules {
    /// Maximum accepted size of a certificate blob, in bytes.
    pub max_certificate_bytes: usize,
}

/// A rostered shift in the company shift catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftDefinition {
    /// The human-readable name of the shift.
    pub name: String,
    /// The rostered start time.
    pub start_time: NaiveTime,
    /// The rostered end time.
    pub end_time: NaiveTime,
    /// The rostered duration in hours.
    pub duration_hours: Decimal,
}

/// Policy file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Leave entitlements.
    pub leave: LeaveEntitlements,
    /// Document rules.
    pub documents: DocumentRules,
}

/// Shift catalog file structure (`shifts.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// Map of shift label to shift definition.
    pub shifts: HashMap<String, ShiftDefinition>,
}

/// The complete HR policy assembled from its configuration files.
#[derive(Debug, Clone)]
pub struct HrPolicy {
    metadata: PolicyMetadata,
    leave: LeaveEntitlements,
    documents: DocumentRules,
    shifts: HashMap<String, ShiftDefinition>,
}

impl HrPolicy {
    /// Assembles a policy from its parsed parts.
    pub fn new(
        metadata: PolicyMetadata,
        leave: LeaveEntitlements,
        documents: DocumentRules,
        shifts: HashMap<String, ShiftDefinition>,
    ) -> Self {
        Self {
            metadata,
            leave,
            documents,
            shifts,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the leave entitlements.
    pub fn leave(&self) -> &LeaveEntitlements {
        &self.leave
    }

    /// Returns the document rules.
    pub fn documents(&self) -> &DocumentRules {
        &self.documents
    }

    /// Returns the shift catalog.
    pub fn shifts(&self) -> &HashMap<String, ShiftDefinition> {
        &self.shifts
    }
}
