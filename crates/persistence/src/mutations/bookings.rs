// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.
//!
//! Bookings are created and deleted, never updated in place.

use apache_air_domain::{Booking, BookingId};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::{PersistenceError, classify_booking_insert_error};
use crate::queries::bookings::is_seat_reserved;

/// Inserts a booking if its seat is free.
///
/// The occupancy check and the insert run in one immediate transaction,
/// and the unique seat index rejects anything that slips past the check.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The booking to insert
///
/// # Errors
///
/// Returns:
/// - `PersistenceError::SeatTaken` if the seat already has a booking
/// - `PersistenceError::DuplicateBookingId` if the id is already in use
/// - `PersistenceError::DatabaseError` for any other database failure
pub fn insert_booking(conn: &mut SqliteConnection, booking: &Booking) -> Result<(), PersistenceError> {
    let row: BookingRow = BookingRow::from(booking);

    conn.immediate_transaction(|conn| {
        if is_seat_reserved(conn, &row.seat)? {
            debug!("Seat {} already booked", row.seat);
            return Err(PersistenceError::SeatTaken(row.seat.clone()));
        }

        diesel::insert_into(bookings::table)
            .values(&row)
            .execute(conn)
            .map_err(|e| classify_booking_insert_error(e, &row.id, &row.seat))?;

        Ok(())
    })?;

    info!(booking_id = %row.id, seat = %row.seat, "Booking inserted");
    Ok(())
}

/// Deletes a booking by exact id.
///
/// # Returns
///
/// The number of rows removed: `1` if the booking existed, `0` otherwise.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_booking(
    conn: &mut SqliteConnection,
    booking_id: &BookingId,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(bookings::table)
        .filter(bookings::id.eq(booking_id.value()))
        .execute(conn)?;

    if rows_affected > 0 {
        info!("Deleted booking {}", booking_id);
    } else {
        debug!("No booking with id {}", booking_id);
    }

    Ok(rows_affected)
}
