//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;

use taskboard_core::db::migrations::latest_version;
use taskboard_core::open_store_in_memory;

fn main() -> ExitCode {
    println!("taskboard_core version={}", taskboard_core::core_version());
    println!("taskboard_core schema_version={}", latest_version());

    match open_store_in_memory() {
        Ok(_) => {
            println!("taskboard_core store=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("taskboard_core store=error detail={err}");
            ExitCode::FAILURE
        }
    }
}
