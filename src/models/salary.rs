//! Salary history models.
//!
//! This module defines the [`SalaryRevision`] struct, one entry per
//! pay-adjustment event, and its nested [`SalaryBreakdown`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// The component breakdown of a salary.
///
/// All amounts are monetary values in the company's payroll currency.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use workforce_registry::models::SalaryBreakdown;
///
/// let salary = SalaryBreakdown {
///     basic: Decimal::from_str("52000.00").unwrap(),
///     housing_allowance: Decimal::from_str("8000.00").unwrap(),
///     travel_allowance: Decimal::from_str("2400.00").unwrap(),
///     bonus: Decimal::from_str("5000.00").unwrap(),
///     tax_deduction: Decimal::from_str("9300.00").unwrap(),
///     deduction: Decimal::from_str("700.00").unwrap(),
/// };
/// assert_eq!(salary.gross(), Decimal::from_str("67400.00").unwrap());
/// assert_eq!(salary.net(), Decimal::from_str("57400.00").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic pay.
    pub basic: Decimal,
    /// Housing allowance.
    pub housing_allowance: Decimal,
    /// Travel allowance.
    pub travel_allowance: Decimal,
    /// Bonus for the period.
    pub bonus: Decimal,
    /// Tax withheld.
    pub tax_deduction: Decimal,
    /// Other deductions.
    pub deduction: Decimal,
}

impl SalaryBreakdown {
    /// Sums the earning components: basic pay plus allowances and bonus.
    pub fn gross(&self) -> Decimal {
        self.basic + self.housing_allowance + self.travel_allowance + self.bonus
    }

    /// Sums the deduction components.
    pub fn total_deductions(&self) -> Decimal {
        self.tax_deduction + self.deduction
    }

    /// Gross earnings minus all deductions.
    pub fn net(&self) -> Decimal {
        self.gross() - self.total_deductions()
    }

    /// Checks that no component is negative.
    pub fn validate(&self) -> RegistryResult<()> {
        let components = [
            ("basic", self.basic),
            ("housing_allowance", self.housing_allowance),
            ("travel_allowance", self.travel_allowance),
            ("bonus", self.bonus),
            ("tax_deduction", self.tax_deduction),
            ("deduction", self.deduction),
        ];
        for (field, amount) in components {
            if amount < Decimal::ZERO {
                return Err(RegistryError::InvalidSalary {
                    field: field.to_string(),
                    message: format!("amount {} must not be negative", amount),
                });
            }
        }
        Ok(())
    }
}

/// A single pay-adjustment event in an employee's salary history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRevision {
    /// The date this salary takes effect.
    pub effective_date: NaiveDate,
    /// The revised salary breakdown.
    pub salary: SalaryBreakdown,
    /// Bank account the salary is paid into, when on record.
    #[serde(default)]
    pub bank_account_number: Option<String>,
    /// IFSC code of the paying bank branch, when on record.
    #[serde(default)]
    pub ifsc_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn breakdown() -> SalaryBreakdown {
        SalaryBreakdown {
            basic: dec("52000.00"),
            housing_allowance: dec("8000.00"),
            travel_allowance: dec("2400.00"),
            bonus: dec("5000.00"),
            tax_deduction: dec("9300.00"),
            deduction: dec("700.00"),
        }
    }

    /// SAL-001: gross sums earnings only
    #[test]
    fn test_gross_sums_earnings() {
        assert_eq!(breakdown().gross(), dec("67400.00"));
    }

    /// SAL-002: net subtracts all deductions
    #[test]
    fn test_net_subtracts_deductions() {
        assert_eq!(breakdown().total_deductions(), dec("10000.00"));
        assert_eq!(breakdown().net(), dec("57400.00"));
    }

    /// SAL-003: zero breakdown is valid and nets to zero
    #[test]
    fn test_zero_breakdown() {
        let zero = SalaryBreakdown::default();
        assert!(zero.validate().is_ok());
        assert_eq!(zero.net(), Decimal::ZERO);
    }

    /// SAL-004: negative component is rejected with its field name
    #[test]
    fn test_negative_component_is_rejected() {
        let salary = SalaryBreakdown {
            bonus: dec("-1.00"),
            ..breakdown()
        };
        match salary.validate() {
            Err(RegistryError::InvalidSalary { field, .. }) => assert_eq!(field, "bonus"),
            other => panic!("Expected InvalidSalary, got {:?}", other),
        }
    }

    #[test]
    fn test_deductions_can_exceed_gross() {
        // Net may go negative; only the components themselves must not.
        let salary = SalaryBreakdown {
            basic: dec("100.00"),
            tax_deduction: dec("150.00"),
            ..SalaryBreakdown::default()
        };
        assert!(salary.validate().is_ok());
        assert_eq!(salary.net(), dec("-50.00"));
    }

    #[test]
    fn test_serde_round_trip() {
        let revision = SalaryRevision {
            effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            salary: breakdown(),
            bank_account_number: Some("002301567890".to_string()),
            ifsc_code: Some("HDFC0000456".to_string()),
        };
        let json = serde_json::to_string(&revision).unwrap();
        let back: SalaryRevision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, revision);
    }

    #[test]
    fn test_deserialize_without_bank_details_defaults_to_none() {
        let json = r#"{
            "effective_date": "2025-04-01",
            "salary": {
                "basic": "52000.00",
                "housing_allowance": "8000.00",
                "travel_allowance": "2400.00",
                "bonus": "5000.00",
                "tax_deduction": "9300.00",
                "deduction": "700.00"
            }
        }"#;
        let revision: SalaryRevision = serde_json::from_str(json).unwrap();
        assert_eq!(revision.salary.basic, dec("52000.00"));
        assert_eq!(
            revision.effective_date,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
        assert_eq!(revision.bank_account_number, None);
        assert_eq!(revision.ifsc_code, None);
    }
}
