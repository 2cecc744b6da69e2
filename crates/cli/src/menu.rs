// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive booking menu.
//!
//! The menu reads operator input line by line and writes prompts and
//! results to any writer, so it can be driven from stdin/stdout or from
//! in-memory buffers in tests.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use apache_air_api::{
    ApiError, ReserveRequest, cancel, is_valid_seat_format, list_bookings, list_seats, reserve,
};
use apache_air_domain::{MealPreference, SeatMap};
use apache_air_persistence::Persistence;
use tracing::debug;

/// Outcome of one menu step: keep looping or stop.
type Step = ControlFlow<()>;

/// Interactive booking console over a reader and a writer.
pub struct Menu<R: BufRead, W: Write> {
    persistence: Persistence,
    seat_map: SeatMap,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu bound to a store, a cabin layout and an I/O pair.
    pub const fn new(persistence: Persistence, seat_map: SeatMap, input: R, output: W) -> Self {
        Self {
            persistence,
            seat_map,
            input,
            output,
        }
    }

    /// Runs the menu until the operator logs out or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Booking failures are reported to the operator and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_main_menu()?;

            let Some(choice) = self.prompt("Please enter the operation number: ")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let step: Step = match choice.trim() {
                "1" => self.show_seat_status()?,
                "2" => self.reserve_seat()?,
                "3" => self.cancel_booking()?,
                "4" => self.show_booking_info()?,
                "5" => {
                    writeln!(
                        self.output,
                        "Thank you for using the Apache Airlines booking system,bye!"
                    )?;
                    ControlFlow::Break(())
                }
                _ => {
                    writeln!(
                        self.output,
                        "Invalid entry, enter a number between 1 and 5."
                    )?;
                    ControlFlow::Continue(())
                }
            };

            if step.is_break() {
                return self.output.flush();
            }
        }
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Apache Airlines Booking system ===")?;
        writeln!(self.output, "1. Check Seat Status")?;
        writeln!(self.output, "2. Reserve your seat")?;
        writeln!(self.output, "3. Cancellation")?;
        writeln!(self.output, "4. Show booking information")?;
        writeln!(self.output, "5. Log out of the system")
    }

    /// Writes a prompt and reads one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len: usize = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn show_seat_status(&mut self) -> io::Result<Step> {
        match list_seats(&mut self.persistence, &self.seat_map) {
            Ok(response) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "=== Seat status ({} - {}) ===",
                    response.first_seat, response.last_seat
                )?;
                for entry in &response.seats {
                    writeln!(self.output, "Seat {}: {}", entry.seat, entry.status.label())?;
                }
            }
            Err(err) => writeln!(self.output, "Unable to read seat status: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn reserve_seat(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Please enter your name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(passport) = self.prompt("Please enter your passport number: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(seat) = self.prompt("Please enter the seat number: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let seat: String = seat.trim().to_uppercase();
        if !is_valid_seat_format(&self.seat_map, &seat) {
            writeln!(
                self.output,
                "Invalid seat number. Please enter a seat between {} and {}.",
                self.seat_map.first(),
                self.seat_map.last()
            )?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.output, "Meal Preferences: ")?;
        for meal in MealPreference::ALL {
            writeln!(self.output, "{}. {meal}", meal.menu_key())?;
        }
        let Some(meal_choice) = self.prompt("Select your meal preference (1-4): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let meal: MealPreference = MealPreference::from_menu_choice(&meal_choice);

        let request = ReserveRequest::new(&name, &passport, &seat, meal);
        match reserve(&mut self.persistence, &self.seat_map, &request) {
            Ok(response) => {
                writeln!(
                    self.output,
                    "The booking was successful! Your booking number is: {}",
                    response.booking_id
                )?;
                writeln!(self.output, "Meal preference: {}", response.meal)?;
            }
            Err(ApiError::InvalidInput { .. }) => {
                writeln!(self.output, "Input cannot be empty.")?;
            }
            Err(ApiError::SeatUnavailable { .. }) => {
                writeln!(
                    self.output,
                    "This seat is already booked, please select another seat."
                )?;
            }
            Err(err) => writeln!(self.output, "Booking Failure: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn cancel_booking(&mut self) -> io::Result<Step> {
        let Some(booking_id) =
            self.prompt("Please enter the booking number to cancel the booking: ")?
        else {
            return Ok(ControlFlow::Break(()));
        };

        match cancel(&mut self.persistence, &booking_id) {
            Ok(_) => writeln!(self.output, "Booking cancelled.")?,
            Err(ApiError::InvalidInput { .. }) => writeln!(
                self.output,
                "Booking number cannot be empty. Please try again."
            )?,
            Err(ApiError::BookingNotFound { .. }) => writeln!(
                self.output,
                "The corresponding booking number was not found."
            )?,
            Err(err) => writeln!(self.output, "Failed cancellation: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn show_booking_info(&mut self) -> io::Result<Step> {
        match list_bookings(&mut self.persistence) {
            Ok(response) if response.bookings.is_empty() => {
                writeln!(self.output, "There are no bookings available at this time.")?;
            }
            Ok(response) => {
                writeln!(self.output)?;
                writeln!(self.output, "=== Current Booking Information ===")?;
                for booking in &response.bookings {
                    writeln!(
                        self.output,
                        "number: {} | name: {} | passport: {} | seat: {} | meal: {}",
                        booking.booking_id,
                        booking.name,
                        booking.passport,
                        booking.seat,
                        booking.meal
                    )?;
                }
            }
            Err(err) => writeln!(self.output, "Unable to read booking information: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }
}
