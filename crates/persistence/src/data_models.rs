// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use apache_air_domain::{Booking, BookingId, MealPreference, Seat};
use diesel::prelude::*;

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Diesel row struct for the `bookings` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BookingRow {
    pub id: String,
    pub name: String,
    pub passport: String,
    pub seat: String,
    pub meal: Option<String>,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.value().to_string(),
            name: booking.name.clone(),
            passport: booking.passport.clone(),
            seat: booking.seat.code(),
            meal: Some(booking.meal.as_str().to_string()),
        }
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = PersistenceError;

    /// A `NULL` meal reads back as the default preference.
    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let id: BookingId = BookingId::new(&row.id)?;
        let seat: Seat = Seat::parse(&row.seat)?;
        let meal: MealPreference = row
            .meal
            .as_deref()
            .map(MealPreference::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(Self::new(id, row.name, row.passport, seat, meal))
    }
}
