// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use apache_air_domain::{Booking, MealPreference};

/// API request to reserve a seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReserveRequest {
    /// The passenger's name.
    pub name: String,
    /// The passenger's passport number.
    pub passport: String,
    /// The requested seat, as typed by the user.
    pub seat: String,
    /// The passenger's meal preference.
    #[serde(default)]
    pub meal: MealPreference,
}

impl ReserveRequest {
    /// Creates a new reservation request.
    #[must_use]
    pub fn new(name: &str, passport: &str, seat: &str, meal: MealPreference) -> Self {
        Self {
            name: name.to_string(),
            passport: passport.to_string(),
            seat: seat.to_string(),
            meal,
        }
    }
}

/// API response for a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReserveResponse {
    /// The generated booking id.
    pub booking_id: String,
    /// The reserved seat code.
    pub seat: String,
    /// The recorded meal preference.
    pub meal: MealPreference,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelResponse {
    /// The cancelled booking id.
    pub booking_id: String,
    /// The seat released by the cancellation.
    pub seat: String,
    /// The number of bookings removed (always 1 on success).
    pub removed: usize,
}

/// Whether a seat is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SeatStatus {
    Reserved,
    Free,
}

impl SeatStatus {
    /// Returns the status as shown to passengers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Reserved => "Booked",
            Self::Free => "Free",
        }
    }
}

/// The status of one seat of the seat map.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatStatusEntry {
    /// The seat code.
    pub seat: String,
    /// Whether the seat is occupied.
    pub status: SeatStatus,
}

/// API response for listing seat status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListSeatsResponse {
    /// The first seat of the seat map.
    pub first_seat: String,
    /// The last seat of the seat map.
    pub last_seat: String,
    /// One entry per seat, in seat map order.
    pub seats: Vec<SeatStatusEntry>,
}

/// Booking information for listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The booking id.
    pub booking_id: String,
    /// The passenger's name.
    pub name: String,
    /// The passenger's passport number.
    pub passport: String,
    /// The seat code.
    pub seat: String,
    /// The meal preference.
    pub meal: MealPreference,
}

impl From<Booking> for BookingInfo {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.id.value().to_string(),
            name: booking.name,
            passport: booking.passport,
            seat: booking.seat.code(),
            meal: booking.meal,
        }
    }
}

/// API response for listing bookings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsResponse {
    /// Every current booking.
    pub bookings: Vec<BookingInfo>,
}
