// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for persistence layer.
//!
//! This module contains all state-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `bookings`: Booking creation and cancellation

pub mod bookings;

pub use bookings::{delete_booking, insert_booking};
