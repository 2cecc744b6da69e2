// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod menu;

use std::io;
use std::path::PathBuf;

use apache_air_domain::SeatMap;
use apache_air_persistence::Persistence;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::menu::Menu;

/// Apache Airlines - interactive seat booking console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file
    #[arg(short, long, default_value = "airlines.db")]
    database: PathBuf,

    /// Use a private in-memory database instead of a file
    #[arg(long)]
    in_memory: bool,

    /// Number of seat rows in the cabin
    #[arg(long, default_value_t = SeatMap::DEFAULT_ROWS, value_parser = clap::value_parser!(u8).range(1..))]
    rows: u8,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn open_persistence(&self) -> Result<Persistence> {
        if self.in_memory {
            info!("Using in-memory database");
            return Persistence::new_in_memory().wrap_err("failed to create in-memory database");
        }

        Persistence::new_with_file(&self.database).wrap_err_with(|| {
            format!("failed to open database at {}", self.database.display())
        })
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let seat_map: SeatMap =
        SeatMap::new(args.rows, SeatMap::DEFAULT_COLUMN).wrap_err("invalid cabin layout")?;
    let persistence: Persistence = args.open_persistence()?;

    info!(
        seats = seat_map.len(),
        first = %seat_map.first(),
        last = %seat_map.last(),
        "Starting booking console"
    );

    let stdin = io::stdin();
    let mut menu = Menu::new(persistence, seat_map, stdin.lock(), io::stdout());
    menu.run().wrap_err("console I/O failed")?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args: Args = Args::parse_from(["apache-air"]);

        assert_eq!(args.database, PathBuf::from("airlines.db"));
        assert!(!args.in_memory);
        assert_eq!(args.rows, 10);
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_args_overrides() {
        let args: Args = Args::parse_from([
            "apache-air",
            "--database",
            "/tmp/flights.db",
            "--in-memory",
            "--rows",
            "12",
            "-vv",
        ]);

        assert_eq!(args.database, PathBuf::from("/tmp/flights.db"));
        assert!(args.in_memory);
        assert_eq!(args.rows, 12);
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_args_reject_zero_rows() {
        assert!(Args::try_parse_from(["apache-air", "--rows", "0"]).is_err());
    }

    #[test]
    fn test_quiet_flag_lowers_log_level() {
        let args: Args = Args::parse_from(["apache-air", "-q"]);

        assert_eq!(args.log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn test_open_in_memory_persistence() {
        let args: Args = Args::parse_from(["apache-air", "--in-memory"]);

        let mut persistence: Persistence = args.open_persistence().unwrap();
        assert_eq!(persistence.count_bookings().unwrap(), 0);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
