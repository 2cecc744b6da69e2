// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking operations for the Apache Airlines booking system.
//!
//! This crate is the boundary between callers (the interactive menu) and
//! the store. Every operation takes the store handle explicitly, validates
//! its input against the domain rules, and reports failures through
//! [`ApiError`], which keeps validation rejections, missing bookings and
//! storage faults apart.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod id_generation;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    cancel, is_seat_reserved, is_valid_seat_format, list_bookings, list_seats, reserve,
    reserve_with_id,
};
pub use id_generation::generate_booking_id;
pub use request_response::{
    BookingInfo, CancelResponse, ListBookingsResponse, ListSeatsResponse, ReserveRequest,
    ReserveResponse, SeatStatus, SeatStatusEntry,
};
