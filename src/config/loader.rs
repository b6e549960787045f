//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading HR policy
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{RegistryError, RegistryResult};
use crate::models::LeaveBalances;

use super::types::{HrPolicy, PolicyFile, PolicyMetadata, ShiftDefinition, ShiftsFile};

/// Loads and provides access to HR policy configuration.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// provides methods to query leave entitlements, document rules, and the
/// shift catalog.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hr/
/// ├── policy.yaml  # Policy metadata, leave entitlements, document rules
/// └── shifts.yaml  # Shift catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_registry::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/hr").unwrap();
///
/// let shift = policy.get_shift("day").unwrap();
/// println!("Day shift runs {} hours", shift.duration_hours);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: HrPolicy,
}

impl PolicyLoader {
    /// Loads policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/hr")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let shifts_path = path.join("shifts.yaml");
        let shifts_file = Self::load_yaml::<ShiftsFile>(&shifts_path)?;

        let policy = HrPolicy::new(
            policy_file.policy,
            policy_file.leave,
            policy_file.documents,
            shifts_file.shifts,
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RegistryResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RegistryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RegistryError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying assembled policy.
    pub fn policy(&self) -> &HrPolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.policy.metadata()
    }

    /// Gets a shift definition by its catalog label.
    ///
    /// # Arguments
    ///
    /// * `label` - The shift label (e.g., "day", "night")
    ///
    /// # Returns
    ///
    /// Returns the shift definition if found, or `ShiftNotFound` error.
    pub fn get_shift(&self, label: &str) -> RegistryResult<&ShiftDefinition> {
        self.policy
            .shifts()
            .get(label)
            .ok_or_else(|| RegistryError::ShiftNotFound {
                label: label.to_string(),
            })
    }

    /// Returns the starting leave balances granted to a new request.
    pub fn starting_balances(&self) -> LeaveBalances {
        self.policy.leave().starting_balances()
    }

    /// Returns the maximum accepted certificate size in bytes.
    pub fn max_certificate_bytes(&self) -> usize {
        self.policy.documents().max_certificate_bytes
    }
}
