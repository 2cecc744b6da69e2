// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Seat, SeatMap};

#[test]
fn test_default_seat_map_accepts_one_through_ten() {
    let seat_map: SeatMap = SeatMap::default();

    for row in 1..=10 {
        assert!(seat_map.is_valid_seat(&format!("{row}A")), "{row}A");
    }
}

#[test]
fn test_default_seat_map_rejects_malformed_seats() {
    let seat_map: SeatMap = SeatMap::default();

    assert!(!seat_map.is_valid_seat("16A"));
    assert!(!seat_map.is_valid_seat("11A"));
    assert!(!seat_map.is_valid_seat("0A"));
    assert!(!seat_map.is_valid_seat("01A"));
    assert!(!seat_map.is_valid_seat("A1"));
    assert!(!seat_map.is_valid_seat("1B"));
    assert!(!seat_map.is_valid_seat("1a"));
    assert!(!seat_map.is_valid_seat(" 1A"));
    assert!(!seat_map.is_valid_seat(""));
}

#[test]
fn test_seat_map_lists_seats_in_row_order() {
    let seat_map: SeatMap = SeatMap::default();
    let codes: Vec<String> = seat_map.seats().map(|seat| seat.code()).collect();

    assert_eq!(
        codes,
        vec!["1A", "2A", "3A", "4A", "5A", "6A", "7A", "8A", "9A", "10A"]
    );
    assert_eq!(seat_map.len(), 10);
    assert_eq!(seat_map.first().code(), "1A");
    assert_eq!(seat_map.last().code(), "10A");
}

#[test]
fn test_seat_map_seat_normalizes_input() {
    let seat_map: SeatMap = SeatMap::default();

    let seat: Seat = seat_map.seat("  6a ").unwrap();
    assert_eq!(seat, Seat::parse("6A").unwrap());
    assert_eq!(seat.code(), "6A");
}

#[test]
fn test_seat_map_seat_rejects_seat_outside_map() {
    let seat_map: SeatMap = SeatMap::default();

    let result: Result<Seat, DomainError> = seat_map.seat("12a");
    assert_eq!(
        result,
        Err(DomainError::InvalidSeat {
            seat: String::from("12A"),
            first: String::from("1A"),
            last: String::from("10A"),
        })
    );
}

#[test]
fn test_custom_seat_map() {
    let seat_map: SeatMap = SeatMap::new(3, 'C').unwrap();

    assert!(seat_map.is_valid_seat("3C"));
    assert!(!seat_map.is_valid_seat("4C"));
    assert!(!seat_map.is_valid_seat("1A"));
    assert_eq!(seat_map.len(), 3);
}

#[test]
fn test_seat_map_rejects_zero_rows() {
    assert!(matches!(
        SeatMap::new(0, 'A'),
        Err(DomainError::InvalidSeatMap(_))
    ));
}

#[test]
fn test_seat_map_rejects_lowercase_column() {
    assert!(matches!(
        SeatMap::new(10, 'a'),
        Err(DomainError::InvalidSeatMap(_))
    ));
}

#[test]
fn test_seat_parse_accepts_seats_outside_default_map() {
    let seat: Seat = Seat::parse("25F").unwrap();
    assert_eq!(seat.code(), "25F");
}

#[test]
fn test_seat_parse_rejects_malformed_codes() {
    for code in ["", "A", "1", "A1", "01A", "0A", "1a", "1AA", "-1A", "300A"] {
        assert!(
            matches!(Seat::parse(code), Err(DomainError::MalformedSeat(_))),
            "{code:?} should be rejected"
        );
    }
}

#[test]
fn test_seat_ordering_follows_row() {
    let mut seats: Vec<Seat> = vec![
        Seat::parse("10A").unwrap(),
        Seat::parse("2A").unwrap(),
        Seat::parse("1A").unwrap(),
    ];
    seats.sort();

    let codes: Vec<String> = seats.iter().map(Seat::code).collect();
    assert_eq!(codes, vec!["1A", "2A", "10A"]);
}
