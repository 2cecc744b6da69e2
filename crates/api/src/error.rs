// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use apache_air_domain::DomainError;
use apache_air_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// Business-rule rejections (`InvalidInput`, `SeatUnavailable`,
/// `BookingNotFound`) are distinct from `Storage`, which covers every
/// failure to read or write the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// The requested seat already has an active booking.
    #[error("Seat {seat} is already booked")]
    SeatUnavailable {
        /// The normalized seat code.
        seat: String,
    },

    /// No booking has the given id.
    #[error("Booking {booking_id} not found")]
    BookingNotFound {
        /// The normalized booking id that was looked up.
        booking_id: String,
    },

    /// The store could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl ApiError {
    /// Returns whether this error is a storage fault rather than a
    /// business-rule rejection.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is an input problem; the field named in the result
/// is the request field that carried the bad value.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::EmptyField { field } => field,
        DomainError::InvalidSeat { .. } | DomainError::MalformedSeat(_) => "Seat",
        DomainError::InvalidBookingId(_) => "Booking number",
        DomainError::InvalidMealPreference(_) => "Meal",
        DomainError::InvalidSeatMap(_) => "Seat map",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::SeatTaken(seat) => Self::SeatUnavailable { seat },
            other => Self::Storage {
                message: other.to_string(),
            },
        }
    }
}
