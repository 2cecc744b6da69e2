// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required passenger or booking field is empty.
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },
    /// The seat is not part of the seat map.
    InvalidSeat {
        /// The rejected seat input.
        seat: String,
        /// The first seat of the seat map.
        first: String,
        /// The last seat of the seat map.
        last: String,
    },
    /// A seat code could not be parsed.
    MalformedSeat(String),
    /// A booking id is not 8 uppercase letters or digits.
    InvalidBookingId(String),
    /// A stored or submitted meal preference is not recognised.
    InvalidMealPreference(String),
    /// Seat map configuration is invalid.
    InvalidSeatMap(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} cannot be empty"),
            Self::InvalidSeat { seat, first, last } => {
                write!(
                    f,
                    "Invalid seat '{seat}': seat must be between {first} and {last}"
                )
            }
            Self::MalformedSeat(seat) => write!(f, "Malformed seat code: '{seat}'"),
            Self::InvalidBookingId(id) => write!(
                f,
                "Invalid booking id '{id}': must be 8 uppercase letters or digits"
            ),
            Self::InvalidMealPreference(meal) => write!(f, "Invalid meal preference: '{meal}'"),
            Self::InvalidSeatMap(msg) => write!(f, "Invalid seat map: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
