// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking store operations.
//!
//! Each operation receives the store explicitly. Input is normalized
//! (trimmed, uppercased where the value is a code) before it reaches
//! the domain rules or the store.

use std::collections::HashSet;

use apache_air_domain::{Booking, BookingId, DomainError, Seat, SeatMap, validate_booking_fields};
use apache_air_persistence::Persistence;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::id_generation::generate_booking_id;
use crate::request_response::{
    BookingInfo, CancelResponse, ListBookingsResponse, ListSeatsResponse, ReserveRequest,
    ReserveResponse, SeatStatus, SeatStatusEntry,
};

/// Returns whether any booking occupies the seat.
///
/// The seat is trimmed and uppercased before lookup. Input that is not a
/// seat of any map simply reports `false`.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be queried.
pub fn is_seat_reserved(persistence: &mut Persistence, seat: &str) -> Result<bool, ApiError> {
    let normalized: String = seat.trim().to_uppercase();
    Ok(persistence.is_seat_reserved(&normalized)?)
}

/// Returns whether the seat is exactly one of the seat map's seat codes.
///
/// This is a pure check with no normalization.
#[must_use]
pub fn is_valid_seat_format(seat_map: &SeatMap, seat: &str) -> bool {
    seat_map.is_valid_seat(seat)
}

/// Reserves a seat under a freshly generated booking id.
///
/// # Errors
///
/// Returns an error if:
/// - The name, passport or seat is empty (`ApiError::InvalidInput`)
/// - The seat is not part of the seat map (`ApiError::InvalidInput`)
/// - The seat already has a booking (`ApiError::SeatUnavailable`)
/// - The store cannot be read or written, including a booking id
///   collision, which is not retried (`ApiError::Storage`)
pub fn reserve(
    persistence: &mut Persistence,
    seat_map: &SeatMap,
    request: &ReserveRequest,
) -> Result<ReserveResponse, ApiError> {
    reserve_with_id(persistence, seat_map, request, generate_booking_id())
}

/// Reserves a seat under the given booking id.
///
/// Same rules as [`reserve`]; callers supply the id.
///
/// # Errors
///
/// See [`reserve`].
pub fn reserve_with_id(
    persistence: &mut Persistence,
    seat_map: &SeatMap,
    request: &ReserveRequest,
    booking_id: BookingId,
) -> Result<ReserveResponse, ApiError> {
    if let Err(err) = validate_booking_fields(&request.name, &request.passport, &request.seat) {
        warn!("Rejected reservation: {}", err);
        return Err(err.into());
    }

    let seat: Seat = seat_map.seat(&request.seat).map_err(|err: DomainError| {
        warn!("Rejected reservation: {}", err);
        ApiError::from(err)
    })?;

    if persistence.is_seat_reserved(&seat.code())? {
        warn!("Rejected reservation: seat {} is already booked", seat);
        return Err(ApiError::SeatUnavailable { seat: seat.code() });
    }

    let booking: Booking = Booking::new(
        booking_id,
        request.name.trim().to_string(),
        request.passport.trim().to_string(),
        seat,
        request.meal,
    );

    persistence.insert_booking(&booking)?;

    info!(
        booking_id = %booking.id,
        seat = %booking.seat,
        meal = %booking.meal,
        "Reserved seat"
    );

    Ok(ReserveResponse {
        booking_id: booking.id.value().to_string(),
        seat: booking.seat.code(),
        meal: booking.meal,
    })
}

/// Cancels a booking by id.
///
/// The id is trimmed and uppercased before lookup. An id that cannot
/// exist (wrong length or characters) is reported as not found.
///
/// # Errors
///
/// Returns an error if:
/// - The id is empty (`ApiError::InvalidInput`)
/// - No booking has this id (`ApiError::BookingNotFound`)
/// - The store cannot be written (`ApiError::Storage`)
pub fn cancel(persistence: &mut Persistence, booking_id: &str) -> Result<CancelResponse, ApiError> {
    let booking_id: BookingId = match BookingId::parse(booking_id) {
        Ok(id) => id,
        Err(err @ DomainError::EmptyField { .. }) => return Err(err.into()),
        Err(_) => {
            debug!("Booking id {:?} is not well-formed", booking_id);
            return Err(ApiError::BookingNotFound {
                booking_id: booking_id.trim().to_uppercase(),
            });
        }
    };

    let not_found = || ApiError::BookingNotFound {
        booking_id: booking_id.value().to_string(),
    };

    let booking: Booking = persistence.get_booking(&booking_id)?.ok_or_else(not_found)?;

    let removed: usize = persistence.delete_booking(&booking_id)?;
    if removed == 0 {
        return Err(not_found());
    }

    info!(booking_id = %booking.id, seat = %booking.seat, "Cancelled booking");

    Ok(CancelResponse {
        booking_id: booking.id.value().to_string(),
        seat: booking.seat.code(),
        removed,
    })
}

/// Lists the status of every seat of the seat map, in seat order.
///
/// The result always has one entry per seat of the map. Bookings on
/// seats outside the map are ignored.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be queried.
pub fn list_seats(
    persistence: &mut Persistence,
    seat_map: &SeatMap,
) -> Result<ListSeatsResponse, ApiError> {
    let reserved: HashSet<String> = persistence.list_reserved_seats()?.into_iter().collect();

    let seats: Vec<SeatStatusEntry> = seat_map
        .seats()
        .map(|seat| {
            let code: String = seat.code();
            let status: SeatStatus = if reserved.contains(&code) {
                SeatStatus::Reserved
            } else {
                SeatStatus::Free
            };
            SeatStatusEntry { seat: code, status }
        })
        .collect();

    Ok(ListSeatsResponse {
        first_seat: seat_map.first().code(),
        last_seat: seat_map.last().code(),
        seats,
    })
}

/// Lists every current booking.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be queried or holds a
/// malformed row.
pub fn list_bookings(persistence: &mut Persistence) -> Result<ListBookingsResponse, ApiError> {
    let bookings: Vec<BookingInfo> = persistence
        .list_bookings()?
        .into_iter()
        .map(BookingInfo::from)
        .collect();

    debug!("Listed {} bookings", bookings.len());

    Ok(ListBookingsResponse { bookings })
}
