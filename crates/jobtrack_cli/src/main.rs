//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jobtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jobtrack_core::db::open_db_in_memory;
use jobtrack_core::{ApplicationStatus, ListStore, SqliteCompanyStore};

fn main() {
    println!("jobtrack_core version={}", jobtrack_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let gateway = match SqliteCompanyStore::try_new(&conn) {
        Ok(gateway) => gateway,
        Err(err) => {
            eprintln!("failed to prepare store: {err}");
            std::process::exit(1);
        }
    };

    let mut store = ListStore::new(gateway);
    if let Err(err) = store.load_all() {
        eprintln!("failed to load records: {err}");
        std::process::exit(1);
    }
    if let Err(err) = store.add("Acme", "SWE", ApplicationStatus::Applied, 0) {
        eprintln!("failed to add probe record: {err}");
        std::process::exit(1);
    }

    println!("jobtrack_core records={}", store.len());
}
