// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use apache_air_domain::{Booking, BookingId, MealPreference, Seat};

/// Creates a booking for Alice on the given seat.
pub fn create_test_booking(id: &str, seat: &str) -> Booking {
    Booking::new(
        BookingId::new(id).unwrap(),
        String::from("Alice"),
        String::from("P12345678"),
        Seat::parse(seat).unwrap(),
        MealPreference::Vegetarian,
    )
}
