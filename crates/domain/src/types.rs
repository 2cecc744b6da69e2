// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A passenger's meal preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MealPreference {
    #[default]
    Standard,
    Vegetarian,
    Halal,
    #[serde(rename = "No Meal")]
    NoMeal,
}

impl FromStr for MealPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Vegetarian" => Ok(Self::Vegetarian),
            "Halal" => Ok(Self::Halal),
            "No Meal" => Ok(Self::NoMeal),
            _ => Err(DomainError::InvalidMealPreference(s.to_string())),
        }
    }
}

impl std::fmt::Display for MealPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MealPreference {
    /// Every meal preference, in the order they are offered on the menu.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Vegetarian, Self::Halal, Self::NoMeal];

    /// Converts this preference to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vegetarian => "Vegetarian",
            Self::Halal => "Halal",
            Self::NoMeal => "No Meal",
        }
    }

    /// Returns the 1-based menu key for this preference.
    #[must_use]
    pub const fn menu_key(&self) -> usize {
        match self {
            Self::Standard => 1,
            Self::Vegetarian => 2,
            Self::Halal => 3,
            Self::NoMeal => 4,
        }
    }

    /// Maps a menu selection (`"1"` to `"4"`) to a preference.
    ///
    /// Anything else, including empty input, selects `Standard`.
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|meal| choice.trim() == meal.menu_key().to_string())
            .unwrap_or_default()
    }
}

/// A generated booking reference.
///
/// Booking ids are exactly eight characters, each an uppercase ASCII
/// letter or a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId {
    value: String,
}

impl BookingId {
    /// Number of characters in a booking id.
    pub const LENGTH: usize = 8;

    /// Characters a booking id is drawn from.
    pub const ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Creates a booking id from an already-normalized value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingId` if the value is not eight
    /// uppercase letters or digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let well_formed: bool = value.len() == Self::LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

        if !well_formed {
            return Err(DomainError::InvalidBookingId(value.to_string()));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Builds an id by picking each character from [`Self::ALPHABET`].
    ///
    /// `pick` receives the alphabet length and returns an index into it;
    /// out-of-range indices wrap around.
    #[must_use]
    pub fn generate_with<F>(mut pick: F) -> Self
    where
        F: FnMut(usize) -> usize,
    {
        let alphabet_len: usize = Self::ALPHABET.len();
        let value: String = (0..Self::LENGTH)
            .map(|_| char::from(Self::ALPHABET[pick(alphabet_len) % alphabet_len]))
            .collect();
        Self { value }
    }

    /// Normalizes user input (trim, uppercase) and validates it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` for blank input and
    /// `DomainError::InvalidBookingId` for anything that is not a
    /// well-formed id after normalization.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = input.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::EmptyField {
                field: "Booking number",
            });
        }
        Self::new(&normalized)
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A reservation of one seat for one passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The generated booking reference.
    pub id: BookingId,
    /// The passenger's name.
    pub name: String,
    /// The passenger's passport number.
    pub passport: String,
    /// The reserved seat.
    pub seat: Seat,
    /// The passenger's meal preference.
    pub meal: MealPreference,
}

impl Booking {
    /// Creates a new `Booking`.
    #[must_use]
    pub const fn new(
        id: BookingId,
        name: String,
        passport: String,
        seat: Seat,
        meal: MealPreference,
    ) -> Self {
        Self {
            id,
            name,
            passport,
            seat,
            meal,
        }
    }
}
