// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Apache Airlines booking system.
//!
//! This crate owns the single `bookings` table. It is built on Diesel
//! with the `SQLite` backend and applies its schema through embedded
//! migrations on every connection.
//!
//! ## Schema
//!
//! ```sql
//! bookings(id TEXT PRIMARY KEY, name TEXT, passport TEXT, seat TEXT, meal TEXT)
//! ```
//!
//! with a unique index on `seat` so that a seat can never hold two
//! active bookings.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` hands out an isolated in-memory
//! database per call, so tests never touch the filesystem.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use apache_air_domain::{Booking, BookingId};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for bookings.
///
/// One adapter holds one open connection for its whole lifetime; callers
/// pass it explicitly to every operation.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database name via an atomic
    /// counter, so instances never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_bookings_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        info!("Opened booking database at {}", path_str);
        Ok(Self { conn })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns whether any booking occupies the seat.
    ///
    /// # Arguments
    ///
    /// * `seat` - The normalized seat code (e.g. `"6A"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn is_seat_reserved(&mut self, seat: &str) -> Result<bool, PersistenceError> {
        queries::is_seat_reserved(&mut self.conn, seat)
    }

    /// Retrieves a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or the stored
    /// row is malformed.
    pub fn get_booking(
        &mut self,
        booking_id: &BookingId,
    ) -> Result<Option<Booking>, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id.value())
    }

    /// Lists every booking in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or a stored row
    /// is malformed.
    pub fn list_bookings(&mut self) -> Result<Vec<Booking>, PersistenceError> {
        queries::list_bookings(&mut self.conn)
    }

    /// Lists the seat codes that currently have a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_reserved_seats(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::list_reserved_seats(&mut self.conn)
    }

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_bookings(&mut self) -> Result<i64, PersistenceError> {
        queries::count_bookings(&mut self.conn)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Inserts a booking if its seat is free.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SeatTaken` if the seat is occupied,
    /// `PersistenceError::DuplicateBookingId` if the id is already used,
    /// or a database error.
    pub fn insert_booking(&mut self, booking: &Booking) -> Result<(), PersistenceError> {
        mutations::insert_booking(&mut self.conn, booking)
    }

    /// Deletes a booking by id.
    ///
    /// # Returns
    ///
    /// The number of rows removed (`0` or `1`).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_booking(&mut self, booking_id: &BookingId) -> Result<usize, PersistenceError> {
        mutations::delete_booking(&mut self.conn, booking_id)
    }
}
