// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use apache_air_domain::{MealPreference, SeatMap};
use apache_air_persistence::Persistence;

use crate::{ReserveRequest, ReserveResponse, reserve};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_request(seat: &str) -> ReserveRequest {
    ReserveRequest::new("Alice", "P12345678", seat, MealPreference::Vegetarian)
}

/// Reserves a seat for Alice on the default seat map.
pub fn reserve_test_seat(persistence: &mut Persistence, seat: &str) -> ReserveResponse {
    reserve(persistence, &SeatMap::default(), &create_test_request(seat))
        .expect("Reservation should succeed")
}
