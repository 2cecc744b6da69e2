// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates that a required field is not blank.
///
/// # Arguments
///
/// * `field` - The field name used in the error
/// * `value` - The submitted value
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the value is empty after trimming.
pub fn validate_required_field(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}

/// Validates that the fields of a reservation request are present.
///
/// This does NOT check the seat against the seat map or its availability;
/// both need context the domain does not hold.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` for the first empty field, checked
/// in the order name, passport, seat.
pub fn validate_booking_fields(name: &str, passport: &str, seat: &str) -> Result<(), DomainError> {
    validate_required_field("Name", name)?;
    validate_required_field("Passport", passport)?;
    validate_required_field("Seat", seat)?;
    Ok(())
}
