// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.
//!
//! All queries use Diesel DSL against the `bookings` table. Seat codes
//! and booking ids are expected to be normalized by the caller.

use apache_air_domain::Booking;
use diesel::dsl::{count_star, exists, sql};
use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel::sql_types::BigInt;
use tracing::debug;

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Checks whether any booking occupies the given seat.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `seat` - The normalized seat code (e.g. `"6A"`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_seat_reserved(conn: &mut SqliteConnection, seat: &str) -> Result<bool, PersistenceError> {
    debug!("Checking reservation status of seat {}", seat);

    let reserved: bool =
        diesel::select(exists(bookings::table.filter(bookings::seat.eq(seat)))).get_result(conn)?;

    Ok(reserved)
}

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is malformed.
/// Returns `Ok(None)` if no booking has this id.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: &str,
) -> Result<Option<Booking>, PersistenceError> {
    debug!("Looking up booking {}", booking_id);

    let row: Option<BookingRow> = bookings::table
        .filter(bookings::id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Booking::try_from).transpose()
}

/// Lists every booking in insertion order (`SQLite` rowid).
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is malformed.
pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>, PersistenceError> {
    debug!("Listing all bookings");

    let rows: Vec<BookingRow> = bookings::table
        .select(BookingRow::as_select())
        .order(sql::<BigInt>("rowid"))
        .load(conn)?;

    rows.into_iter().map(Booking::try_from).collect()
}

/// Lists the seat codes that currently have a booking.
///
/// Codes are returned as stored, so seats outside the current seat map
/// are included.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_reserved_seats(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    let seats: Vec<String> = bookings::table
        .select(bookings::seat)
        .order(bookings::seat.asc())
        .load(conn)?;

    Ok(seats)
}

/// Counts the bookings in storage.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_bookings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let count: i64 = bookings::table.select(count_star()).first(conn)?;
    Ok(count)
}
