// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_persistence, reserve_test_seat};
use crate::{ApiError, cancel, is_seat_reserved, list_bookings};

#[test]
fn test_cancel_removes_booking() {
    let mut persistence = create_test_persistence();
    let reservation = reserve_test_seat(&mut persistence, "6A");

    let response = cancel(&mut persistence, &reservation.booking_id).unwrap();

    assert_eq!(response.booking_id, reservation.booking_id);
    assert_eq!(response.seat, "6A");
    assert_eq!(response.removed, 1);
    assert!(!is_seat_reserved(&mut persistence, "6A").unwrap());
}

#[test]
fn test_cancel_twice_reports_not_found() {
    let mut persistence = create_test_persistence();
    let reservation = reserve_test_seat(&mut persistence, "6A");

    cancel(&mut persistence, &reservation.booking_id).unwrap();
    let result = cancel(&mut persistence, &reservation.booking_id);

    assert_eq!(
        result,
        Err(ApiError::BookingNotFound {
            booking_id: reservation.booking_id
        })
    );
}

#[test]
fn test_cancel_only_removes_matching_booking() {
    let mut persistence = create_test_persistence();
    let first = reserve_test_seat(&mut persistence, "1A");
    reserve_test_seat(&mut persistence, "2A");

    cancel(&mut persistence, &first.booking_id).unwrap();

    let bookings = list_bookings(&mut persistence).unwrap().bookings;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].seat, "2A");
}

#[test]
fn test_cancel_normalizes_booking_id() {
    let mut persistence = create_test_persistence();
    let reservation = reserve_test_seat(&mut persistence, "6A");
    let typed: String = format!("  {}  ", reservation.booking_id.to_lowercase());

    let response = cancel(&mut persistence, &typed).unwrap();

    assert_eq!(response.booking_id, reservation.booking_id);
}

#[test]
fn test_cancel_rejects_empty_booking_id() {
    let mut persistence = create_test_persistence();

    let result = cancel(&mut persistence, "   ");

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "Booking number"
    ));
}

#[test]
fn test_cancel_malformed_booking_id_reports_not_found() {
    let mut persistence = create_test_persistence();

    let result = cancel(&mut persistence, "abc");

    assert_eq!(
        result,
        Err(ApiError::BookingNotFound {
            booking_id: String::from("ABC")
        })
    );
}

#[test]
fn test_cancel_unknown_booking_id_reports_not_found() {
    let mut persistence = create_test_persistence();
    reserve_test_seat(&mut persistence, "6A");

    let result = cancel(&mut persistence, "ZZZZ9999");

    assert!(matches!(result, Err(ApiError::BookingNotFound { .. })));
    assert_eq!(list_bookings(&mut persistence).unwrap().bookings.len(), 1);
}
