// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat identifiers and the cabin seat map.
//!
//! A seat is written as its row number followed by its column letter
//! (`1A`, `10A`). The seat map is the configured inventory of bookable
//! seats; anything outside it is rejected before reaching storage.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single seat, identified by row number and column letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    /// The row number (1-based).
    row: u8,
    /// The column letter (uppercase ASCII).
    column: char,
}

impl Seat {
    fn new(row: u8, column: char) -> Result<Self, DomainError> {
        if row == 0 || !column.is_ascii_uppercase() {
            return Err(DomainError::MalformedSeat(format!("{row}{column}")));
        }
        Ok(Self { row, column })
    }

    /// Parses a seat code such as `6A`.
    ///
    /// The input must already be normalized: no surrounding whitespace,
    /// an uppercase column letter, and no leading zero on the row.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedSeat` if the code does not have that shape.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedSeat(code.to_string());

        let mut chars = code.chars();
        let column: char = chars.next_back().ok_or_else(malformed)?;
        let row_part: &str = chars.as_str();

        if row_part.is_empty()
            || row_part.starts_with('0')
            || !row_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let row: u8 = row_part.parse().map_err(|_| malformed())?;
        Self::new(row, column).map_err(|_| malformed())
    }

    /// Returns the seat code, e.g. `"6A"`.
    #[must_use]
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for Seat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The bookable seat inventory of the cabin.
///
/// A seat map is a number of rows sharing a single column letter.
/// The default cabin has ten rows in column `A` (`1A` through `10A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    /// Number of rows, at least one.
    rows: u8,
    /// The column letter shared by every seat.
    column: char,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            column: Self::DEFAULT_COLUMN,
        }
    }
}

impl SeatMap {
    /// Row count of the default cabin.
    pub const DEFAULT_ROWS: u8 = 10;

    /// Column letter of the default cabin.
    pub const DEFAULT_COLUMN: char = 'A';

    /// Creates a seat map.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is zero or `column` is not an uppercase
    /// ASCII letter.
    pub fn new(rows: u8, column: char) -> Result<Self, DomainError> {
        if rows == 0 {
            return Err(DomainError::InvalidSeatMap(String::from(
                "a seat map needs at least one row",
            )));
        }
        if !column.is_ascii_uppercase() {
            return Err(DomainError::InvalidSeatMap(format!(
                "column must be an uppercase letter, got '{column}'"
            )));
        }
        Ok(Self { rows, column })
    }

    /// Returns the number of seats in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows as usize
    }

    /// A seat map always holds at least one seat.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over every seat in row order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + use<> {
        let column: char = self.column;
        (1..=self.rows).map(move |row| Seat { row, column })
    }

    /// Returns the first seat (`1A` for the default map).
    #[must_use]
    pub const fn first(&self) -> Seat {
        Seat {
            row: 1,
            column: self.column,
        }
    }

    /// Returns the last seat (`10A` for the default map).
    #[must_use]
    pub const fn last(&self) -> Seat {
        Seat {
            row: self.rows,
            column: self.column,
        }
    }

    /// Returns whether `seat` is exactly the code of one of the map's seats.
    ///
    /// This is a pure membership check on the input as given; callers
    /// that accept user input should normalize it first (see [`Self::seat`]).
    #[must_use]
    pub fn is_valid_seat(&self, seat: &str) -> bool {
        self.seats().any(|candidate| candidate.code() == seat)
    }

    /// Normalizes user input (trim, uppercase) and resolves it to a seat of the map.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeat` if the normalized input is not a
    /// seat of the map.
    pub fn seat(&self, input: &str) -> Result<Seat, DomainError> {
        let normalized: String = input.trim().to_uppercase();
        if !self.is_valid_seat(&normalized) {
            return Err(DomainError::InvalidSeat {
                seat: normalized,
                first: self.first().code(),
                last: self.last().code(),
            });
        }
        Seat::parse(&normalized)
    }
}
