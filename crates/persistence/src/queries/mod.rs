// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `bookings`: Seat occupancy and booking lookups

pub mod bookings;

pub use bookings::{
    count_bookings, get_booking, is_seat_reserved, list_bookings, list_reserved_seats,
};
