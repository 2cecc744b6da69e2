// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, validate_booking_fields, validate_required_field};

#[test]
fn test_validate_required_field_accepts_value() {
    assert!(validate_required_field("Name", "Alice").is_ok());
}

#[test]
fn test_validate_required_field_rejects_blank() {
    assert_eq!(
        validate_required_field("Name", "  "),
        Err(DomainError::EmptyField { field: "Name" })
    );
}

#[test]
fn test_validate_booking_fields_accepts_complete_request() {
    assert!(validate_booking_fields("Alice", "P1", "6A").is_ok());
}

#[test]
fn test_validate_booking_fields_rejects_empty_name() {
    assert_eq!(
        validate_booking_fields("", "P1", "6A"),
        Err(DomainError::EmptyField { field: "Name" })
    );
}

#[test]
fn test_validate_booking_fields_rejects_empty_passport() {
    assert_eq!(
        validate_booking_fields("Alice", "", "6A"),
        Err(DomainError::EmptyField { field: "Passport" })
    );
}

#[test]
fn test_validate_booking_fields_rejects_empty_seat() {
    assert_eq!(
        validate_booking_fields("Alice", "P1", ""),
        Err(DomainError::EmptyField { field: "Seat" })
    );
}

#[test]
fn test_validate_booking_fields_reports_first_empty_field() {
    assert_eq!(
        validate_booking_fields("", "", ""),
        Err(DomainError::EmptyField { field: "Name" })
    );
}
