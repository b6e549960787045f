//! Configuration loading and management for the Workforce Registry.
//!
//! This module provides functionality to load HR policy from YAML files,
//! including leave entitlements, document rules, and the shift catalog.
//!
//! # Example
//!
//! ```no_run
//! use workforce_registry::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/hr").unwrap();
//! println!("Loaded policy: {}", policy.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    DocumentRules, HrPolicy, LeaveEntitlements, PolicyFile, PolicyMetadata, ShiftDefinition,
    ShiftsFile,
};
