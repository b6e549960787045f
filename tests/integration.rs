//! Comprehensive integration tests for the Workforce Registry.
//!
//! This test suite covers the full employee record lifecycle:
//! - Enrollment with identifier allocation and credential hashing
//! - Attendance tracking against the shift catalog
//! - Leave request lifecycle with policy-seeded balances
//! - Salary history
//! - Document intake with certificate size limits
//! - Record export/import round trips
//! - Error cases

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use workforce_registry::config::PolicyLoader;
use workforce_registry::error::RegistryError;
use workforce_registry::ident::EmployeeId;
use workforce_registry::models::{
    DocumentSet, EducationLevel, EducationRecord, Employee, LeaveStatus, Profile, SalaryBreakdown,
    SalaryRevision, WorkStatus,
};
use workforce_registry::registry::Registry;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_registry() -> Registry {
    let policy = PolicyLoader::load("./config/hr").expect("Failed to load policy");
    Registry::new(policy)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn profile(name: &str, email: &str) -> Profile {
    Profile {
        name: name.to_string(),
        email: email.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1991, 4, 2),
        date_of_joining: NaiveDate::from_ymd_opt(2022, 11, 14),
        location: "Pune".to_string(),
        contact_number: "+91 98200 12345".to_string(),
        job_title: "QA Engineer".to_string(),
        department: "Engineering".to_string(),
        nationality: "Indian".to_string(),
        ..Profile::default()
    }
}

fn bachelors_certificate(bytes: usize) -> DocumentSet {
    let mut documents = DocumentSet::default();
    documents.add_education(
        EducationLevel::Bachelors,
        EducationRecord {
            institution: "Pune University".to_string(),
            board: "SPPU".to_string(),
            percentage: Some(decimal("81.50")),
            certificate: vec![0x25; bytes],
        },
    );
    documents
}

// =============================================================================
// Identifier contract
// =============================================================================

#[test]
fn test_minted_identifier_matches_public_contract() {
    let id = EmployeeId::mint();
    let s = id.as_str();

    assert_eq!(s.len(), 16);
    assert!(s.starts_with("TG"));
    assert!(s[2..8].bytes().all(|b| b.is_ascii_digit()));
    assert!(
        s[8..]
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    );
}

#[test]
fn test_known_date_and_uuid_compose_documented_identifier() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();

    let id = EmployeeId::mint_on(date, uuid);
    assert_eq!(id.as_str(), "TG250307550e8400");
    assert_eq!(id.mint_date(), Some(date));
}

#[test]
fn test_identifier_survives_a_parse_round_trip() {
    let id = EmployeeId::mint();
    let parsed = EmployeeId::from_str(id.as_str()).unwrap();
    assert_eq!(parsed, id);
}

// =============================================================================
// Full record lifecycle
// =============================================================================

#[test]
fn test_full_employee_lifecycle() {
    let mut registry = create_test_registry();

    // Enroll with credentials.
    let id = registry
        .enroll(
            profile("Asha Verma", "asha.verma@example.com"),
            Some("correct horse battery"),
        )
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.verify_credentials(&id, "correct horse battery").unwrap());
    assert!(!registry.verify_credentials(&id, "wrong").unwrap());

    // A worked day shift.
    let clock_in = Utc.with_ymd_and_hms(2025, 3, 7, 8, 57, 0).unwrap();
    let clock_out = Utc.with_ymd_and_hms(2025, 3, 7, 17, 12, 0).unwrap();
    registry.record_attendance_at(&id, "day", clock_in).unwrap();
    registry.clock_out_at(&id, clock_out).unwrap();

    let employee = registry.employee(&id).unwrap();
    assert_eq!(employee.attendance().len(), 1);
    assert_eq!(
        employee.attendance()[0].worked_hours(),
        Some(decimal("8.25"))
    );

    // An overnight shift spanning midnight.
    let night_in = Utc.with_ymd_and_hms(2025, 3, 8, 22, 0, 0).unwrap();
    let night_out = Utc.with_ymd_and_hms(2025, 3, 9, 6, 0, 0).unwrap();
    registry.record_attendance_at(&id, "night", night_in).unwrap();
    registry.clock_out_at(&id, night_out).unwrap();
    assert_eq!(
        registry.employee(&id).unwrap().attendance()[1].worked_hours(),
        Some(decimal("8.0"))
    );

    // Leave request, seeded from policy, approved by a manager.
    let leave_id = registry.request_leave(&id, "family function", true).unwrap();
    registry
        .approve_leave(&id, leave_id, "TG2405143f9a21bc")
        .unwrap();
    let leave = registry.employee(&id).unwrap().leave(leave_id).unwrap();
    assert_eq!(leave.status, LeaveStatus::Approved);
    assert_eq!(leave.balances.total, 24);
    assert!(leave.short_leave);

    // Two salary revisions; the latest wins by effective date.
    registry
        .record_salary_revision(
            &id,
            SalaryRevision {
                effective_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                salary: SalaryBreakdown {
                    basic: decimal("48000.00"),
                    housing_allowance: decimal("7000.00"),
                    travel_allowance: decimal("2000.00"),
                    bonus: decimal("0.00"),
                    tax_deduction: decimal("8200.00"),
                    deduction: decimal("500.00"),
                },
                bank_account_number: None,
                ifsc_code: None,
            },
        )
        .unwrap();
    registry
        .record_salary_revision(
            &id,
            SalaryRevision {
                effective_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                salary: SalaryBreakdown {
                    basic: decimal("52000.00"),
                    housing_allowance: decimal("8000.00"),
                    travel_allowance: decimal("2400.00"),
                    bonus: decimal("5000.00"),
                    tax_deduction: decimal("9300.00"),
                    deduction: decimal("700.00"),
                },
                bank_account_number: Some("002301567890".to_string()),
                ifsc_code: Some("HDFC0000456".to_string()),
            },
        )
        .unwrap();

    let employee = registry.employee(&id).unwrap();
    assert_eq!(employee.salary_history().len(), 2);
    let latest = employee.latest_salary().unwrap();
    assert_eq!(
        latest.effective_date,
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    );
    assert_eq!(latest.salary.gross(), decimal("67400.00"));
    assert_eq!(latest.salary.net(), decimal("57400.00"));
    assert_eq!(latest.ifsc_code.as_deref(), Some("HDFC0000456"));

    // Documents within the certificate cap.
    let mut documents = bachelors_certificate(1024);
    documents.passport_number = Some("N1234567".to_string());
    documents.national_id_number = Some("4321 8765 2109".to_string());
    registry.attach_documents(&id, documents).unwrap();
    let employee = registry.employee(&id).unwrap();
    assert_eq!(employee.documents().len(), 1);
    assert!(
        employee.documents()[0]
            .education(EducationLevel::Bachelors)
            .is_some()
    );

    // Work status is a scalar overwrite.
    registry.set_work_status(&id, WorkStatus::Remote).unwrap();
    assert_eq!(
        registry.employee(&id).unwrap().profile.work_status,
        Some(WorkStatus::Remote)
    );
}

// =============================================================================
// Export / import round trip
// =============================================================================

#[test]
fn test_record_export_import_round_trip() {
    let mut registry = create_test_registry();
    let id = registry
        .enroll(profile("Ravi Nair", "ravi.nair@example.com"), None)
        .unwrap();
    registry
        .record_attendance_at(&id, "half_day", Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap())
        .unwrap();

    // Export the record, import it into a fresh registry.
    let exported = serde_json::to_string(registry.employee(&id).unwrap()).unwrap();
    let imported: Employee = serde_json::from_str(&exported).unwrap();

    let mut second = create_test_registry();
    second.insert(imported).unwrap();

    let employee = second.employee(&id).unwrap();
    assert_eq!(employee.id(), &id);
    assert_eq!(employee.profile.name, "Ravi Nair");
    assert_eq!(employee.attendance().len(), 1);

    // Importing the same record again hits the uniqueness constraint.
    let again: Employee = serde_json::from_str(&exported).unwrap();
    match second.insert(again) {
        Err(RegistryError::DuplicateEmployee { id: dup }) => {
            assert_eq!(dup, id.to_string());
        }
        other => panic!("Expected DuplicateEmployee, got {:?}", other),
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_unknown_employee_operations_fail() {
    let mut registry = create_test_registry();
    let ghost = EmployeeId::from_str("TG0000000000dead").unwrap();

    assert!(matches!(
        registry.employee(&ghost),
        Err(RegistryError::EmployeeNotFound { .. })
    ));
    assert!(matches!(
        registry.record_attendance(&ghost, "day"),
        Err(RegistryError::EmployeeNotFound { .. })
    ));
    assert!(matches!(
        registry.request_leave(&ghost, "fever", false),
        Err(RegistryError::EmployeeNotFound { .. })
    ));
}

#[test]
fn test_unknown_shift_label_fails_before_touching_the_record() {
    let mut registry = create_test_registry();
    let id = registry
        .enroll(profile("Meera Iyer", "meera.iyer@example.com"), None)
        .unwrap();

    assert!(matches!(
        registry.record_attendance(&id, "graveyard"),
        Err(RegistryError::ShiftNotFound { .. })
    ));
    assert!(registry.employee(&id).unwrap().attendance().is_empty());
}

#[test]
fn test_oversized_certificate_is_rejected_and_nothing_is_attached() {
    let mut registry = create_test_registry();
    let id = registry
        .enroll(profile("Meera Iyer", "meera.iyer@example.com"), None)
        .unwrap();
    let cap = registry.policy().max_certificate_bytes();

    let result = registry.attach_documents(&id, bachelors_certificate(cap + 1));
    match result {
        Err(RegistryError::OversizedCertificate {
            level,
            size_bytes,
            limit_bytes,
        }) => {
            assert_eq!(level, "bachelors");
            assert_eq!(size_bytes, cap + 1);
            assert_eq!(limit_bytes, cap);
        }
        other => panic!("Expected OversizedCertificate, got {:?}", other),
    }
    assert!(registry.employee(&id).unwrap().documents().is_empty());
}

#[test]
fn test_invalid_profile_is_rejected_at_enrollment() {
    let mut registry = create_test_registry();

    let bad_dates = Profile {
        date_of_birth: NaiveDate::from_ymd_opt(2023, 1, 1),
        date_of_joining: NaiveDate::from_ymd_opt(2022, 1, 1),
        ..profile("Backwards", "backwards@example.com")
    };
    assert!(matches!(
        registry.enroll(bad_dates, None),
        Err(RegistryError::InvalidEmployee { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_malformed_identifier_strings_do_not_parse() {
    for candidate in [
        "",
        "TG",
        "EMP-001",
        "tg250307550e8400",
        "TG250307550E8400",
        "TG25030_550e8400",
        "TG250307550e8400ff",
    ] {
        assert!(
            EmployeeId::from_str(candidate).is_err(),
            "expected '{}' to be rejected",
            candidate
        );
    }
}
