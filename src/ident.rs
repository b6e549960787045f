//! Employee identifier generation and parsing.
//!
//! This module defines the [`EmployeeId`] type, the primary key of an
//! employee record. Identifiers are minted once at record creation and have
//! the fixed shape `TG` + `YYMMDD` (mint date) + the first 8 lowercase
//! hexadecimal characters of a random version-4 UUID.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};

/// The literal prefix carried by every employee identifier.
pub const EMPLOYEE_ID_PREFIX: &str = "TG";

/// The total length of an employee identifier: prefix + date + suffix.
pub const EMPLOYEE_ID_LEN: usize = 16;

const DATE_SEGMENT_LEN: usize = 6;
const SUFFIX_LEN: usize = 8;

/// A unique, sortable, human-readable employee identifier.
///
/// An identifier is assigned exactly once, when the employee record is
/// created, and is never reassigned. The inner string is not publicly
/// mutable.
///
/// The random suffix is only 32 bits wide, so the per-day collision space is
/// 2^32. Minting performs no collision checking of its own; the registry
/// guards inserts and re-mints on collision.
///
/// # Example
///
/// ```
/// use workforce_registry::ident::{EmployeeId, EMPLOYEE_ID_LEN, EMPLOYEE_ID_PREFIX};
///
/// let id = EmployeeId::mint();
/// assert_eq!(id.as_str().len(), EMPLOYEE_ID_LEN);
/// assert!(id.as_str().starts_with(EMPLOYEE_ID_PREFIX));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Mints a fresh identifier from the current UTC date and a random UUID.
    ///
    /// The date segment is wall-clock-dependent; the suffix comes from a
    /// freshly generated version-4 UUID. Two mints on the same day share the
    /// date segment but differ in the suffix with overwhelming probability.
    pub fn mint() -> Self {
        Self::mint_on(Utc::now().date_naive(), Uuid::new_v4())
    }

    /// Composes the identifier for a known date and UUID.
    ///
    /// The suffix is the first 8 hexadecimal characters of the UUID, i.e.
    /// its first 32 bits, prior to the first hyphen.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    /// use workforce_registry::ident::EmployeeId;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    /// let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    /// assert_eq!(EmployeeId::mint_on(date, uuid).as_str(), "TG250307550e8400");
    /// ```
    pub fn mint_on(date: NaiveDate, uuid: Uuid) -> Self {
        let hex = uuid.simple().to_string();
        Self(format!(
            "{}{}{}",
            EMPLOYEE_ID_PREFIX,
            date.format("%y%m%d"),
            &hex[..SUFFIX_LEN]
        ))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the date segment back to a calendar date.
    ///
    /// Returns `None` when the six digits do not name a real date (e.g.
    /// month 13). Two-digit years map to 2000-2068 for `00`-`68`.
    pub fn mint_date(&self) -> Option<NaiveDate> {
        let segment = &self.0[EMPLOYEE_ID_PREFIX.len()..EMPLOYEE_ID_PREFIX.len() + DATE_SEGMENT_LEN];
        NaiveDate::parse_from_str(segment, "%y%m%d").ok()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = RegistryError;

    /// Parses a string that must have exactly the minted shape.
    fn from_str(s: &str) -> RegistryResult<Self> {
        let malformed = |message: &str| RegistryError::MalformedEmployeeId {
            value: s.to_string(),
            message: message.to_string(),
        };

        if s.len() != EMPLOYEE_ID_LEN {
            return Err(malformed("must be exactly 16 characters"));
        }
        if !s.starts_with(EMPLOYEE_ID_PREFIX) {
            return Err(malformed("missing 'TG' prefix"));
        }

        let date_segment = &s[EMPLOYEE_ID_PREFIX.len()..EMPLOYEE_ID_PREFIX.len() + DATE_SEGMENT_LEN];
        if !date_segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("date segment must be 6 digits"));
        }

        let suffix = &s[EMPLOYEE_ID_LEN - SUFFIX_LEN..];
        if !suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(malformed("suffix must be 8 lowercase hex characters"));
        }

        Ok(Self(s.to_string()))
    }
}
