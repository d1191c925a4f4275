//! # Storefront Entry Point
//!
//! Thin wrapper: the session setup lives in `lib.rs` so it can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    match storefront_app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
