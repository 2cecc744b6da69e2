// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Connection establishment and migration application are exercised by
//! every test that calls `Persistence::new_in_memory()`; these tests
//! cover isolation and the file-backed path explicitly.

use std::path::PathBuf;

use crate::Persistence;
use crate::tests::create_test_booking;

fn temp_db_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("apache_air_{name}_{}.db", std::process::id()))
}

fn remove_db_files(path: &PathBuf) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, crate::error::PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_new_database_has_no_bookings() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(persistence.count_bookings().unwrap(), 0);
    assert!(persistence.list_bookings().unwrap().is_empty());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.insert_booking(&create_test_booking("TST12345", "6A"))
        .unwrap();

    assert_eq!(db1.count_bookings().unwrap(), 1, "db1 should have 1 booking");
    assert_eq!(
        db2.count_bookings().unwrap(),
        0,
        "db2 should have 0 bookings (isolated)"
    );
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path: PathBuf = temp_db_path("reopen");
    remove_db_files(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .insert_booking(&create_test_booking("TST12345", "3A"))
            .unwrap();
    }

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        assert!(persistence.is_seat_reserved("3A").unwrap());
        assert_eq!(persistence.count_bookings().unwrap(), 1);
    }

    remove_db_files(&path);
}

#[test]
fn test_reopening_existing_database_does_not_rerun_migrations() {
    let path: PathBuf = temp_db_path("migrations");
    remove_db_files(&path);

    let first = Persistence::new_with_file(&path);
    assert!(first.is_ok());
    drop(first);

    let second = Persistence::new_with_file(&path);
    assert!(second.is_ok());
    drop(second);

    remove_db_files(&path);
}
