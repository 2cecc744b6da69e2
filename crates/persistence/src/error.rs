// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// The seat already has an active booking.
    SeatTaken(String),
    /// The generated booking id collided with an existing booking.
    DuplicateBookingId(String),
    /// A stored row could not be converted into a domain value.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SeatTaken(seat) => write!(f, "Seat {seat} is already booked"),
            Self::DuplicateBookingId(id) => write!(f, "Booking id {id} already exists"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::QueryFailed("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<apache_air_domain::DomainError> for PersistenceError {
    fn from(err: apache_air_domain::DomainError) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Classifies an insert failure on the `bookings` table.
///
/// `SQLite` reports unique violations as `UNIQUE constraint failed: <table>.<column>`,
/// which is the only place the violated column is available.
pub(crate) fn classify_booking_insert_error(
    err: DieselError,
    booking_id: &str,
    seat: &str,
) -> PersistenceError {
    let violated: Option<String> = match &err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            Some(info.message().to_string())
        }
        _ => None,
    };

    match violated {
        Some(message) if message.contains("bookings.seat") => {
            PersistenceError::SeatTaken(seat.to_string())
        }
        Some(message) if message.contains("bookings.id") => {
            PersistenceError::DuplicateBookingId(booking_id.to_string())
        }
        _ => PersistenceError::from(err),
    }
}
