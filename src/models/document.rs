//! Education and identity document models.
//!
//! This module defines the [`DocumentSet`] struct, one entry per submitted
//! education/identity record set, keyed by [`EducationLevel`].

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// The education levels a record set can carry certificates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// High school.
    HighSchool,
    /// Intermediate / higher secondary.
    Intermediate,
    /// Bachelor's degree.
    Bachelors,
    /// Master's degree.
    Masters,
    /// Professional certification.
    Certification,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighSchool => "high_school",
            Self::Intermediate => "intermediate",
            Self::Bachelors => "bachelors",
            Self::Masters => "masters",
            Self::Certification => "certification",
        };
        f.write_str(name)
    }
}

/// One education record: institution, issuing board, score, and the scanned
/// certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    /// Name of the school, college, or issuing institution.
    pub institution: String,
    /// The board or university that issued the result.
    pub board: String,
    /// Percentage or score achieved, when known.
    #[serde(default)]
    pub percentage: Option<Decimal>,
    /// The scanned certificate as raw bytes.
    #[serde(default)]
    pub certificate: Vec<u8>,
}

/// A submitted set of education and identity documents.
///
/// # Example
///
/// ```
/// use workforce_registry::models::{DocumentSet, EducationLevel, EducationRecord};
///
/// let mut documents = DocumentSet::default();
/// documents.add_education(
///     EducationLevel::Bachelors,
///     EducationRecord {
///         institution: "Pune University".to_string(),
///         board: "SPPU".to_string(),
///         percentage: None,
///         certificate: vec![0x25, 0x50, 0x44, 0x46],
///     },
/// );
/// assert!(documents.education(EducationLevel::Bachelors).is_some());
/// assert!(documents.education(EducationLevel::Masters).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSet {
    /// Education records keyed by level.
    #[serde(default)]
    pub education: BTreeMap<EducationLevel, EducationRecord>,
    /// Passport number.
    #[serde(default)]
    pub passport_number: Option<String>,
    /// Driving license number.
    #[serde(default)]
    pub driving_license_number: Option<String>,
    /// National identity number.
    #[serde(default)]
    pub national_id_number: Option<String>,
}

impl DocumentSet {
    /// Stores an education record for a level, replacing any previous record
    /// at that level within this set.
    pub fn add_education(&mut self, level: EducationLevel, record: EducationRecord) {
        self.education.insert(level, record);
    }

    /// Looks up the education record for a level.
    pub fn education(&self, level: EducationLevel) -> Option<&EducationRecord> {
        self.education.get(&level)
    }

    /// Checks every certificate blob against the given size cap.
    pub fn validate_certificates(&self, max_bytes: usize) -> RegistryResult<()> {
        for (level, record) in &self.education {
            if record.certificate.len() > max_bytes {
                return Err(RegistryError::OversizedCertificate {
                    level: level.to_string(),
                    size_bytes: record.certificate.len(),
                    limit_bytes: max_bytes,
                });
            }
        }
        Ok(())
    }
}
