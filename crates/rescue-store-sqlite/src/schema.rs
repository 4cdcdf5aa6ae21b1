//! SQL schema for the animal store.
//!
//! Executed once when a connection is opened. There are no migrations;
//! `PRAGMA user_version` records the layout this build expects.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- AUTOINCREMENT keeps ids of deleted rows from ever being handed out again.
CREATE TABLE IF NOT EXISTS animals (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    name                    TEXT NOT NULL,
    species                 TEXT NOT NULL,
    breed                   TEXT,
    age                     INTEGER,
    sex                     TEXT,
    description             TEXT,
    arrival_date            TEXT NOT NULL,
    health_status           TEXT,
    sterilisation_status    INTEGER,   -- 0 | 1 | NULL
    chip_number             TEXT,
    internal_notes          TEXT,
    reason_onboarded        TEXT,
    latest_vaccination_date TEXT,
    current_location        TEXT,
    status                  TEXT NOT NULL
);

PRAGMA user_version = 1;
";
