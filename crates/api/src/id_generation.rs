// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking id generation.

use apache_air_domain::BookingId;

/// Generates a random booking id.
///
/// Eight characters are drawn uniformly from `A-Z0-9`. Uniqueness is not
/// checked here; the store's primary key rejects a collision.
#[must_use]
pub fn generate_booking_id() -> BookingId {
    BookingId::generate_with(|alphabet_len| rand::random_range(0..alphabet_len))
}
