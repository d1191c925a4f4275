//! # Storefront Shell Library
//!
//! Headless shell around the `storefront-core` product page. Reads one
//! command per line, applies it to the page state and prints the page.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── File + env configuration
//! │   └── storefront.rs ◄─ RootApp behind a Mutex
//! ├── commands/
//! │   ├── mod.rs      ◄─── StorefrontView snapshot
//! │   ├── catalog.rs  ◄─── Page snapshot, swatch hover
//! │   ├── cart.rs     ◄─── Add / remove cart items
//! │   ├── review.rs   ◄─── Review drafts & submit
//! │   └── tabs.rs     ◄─── Tab switching
//! ├── shell.rs        ◄─── Line parser & dispatcher
//! ├── render.rs       ◄─── Plain-text page rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io::{self, BufRead, Write};

use storefront_core::CoreResult;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::EnvFilter;

use crate::commands::StorefrontView;
use crate::error::ApiError;
use crate::shell::{Outcome, ShellCommand};
use crate::state::{StorefrontConfig, StorefrontState};

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──► stderr, RUST_LOG or "info,storefront=debug"  │
/// │  2. Load Config ─────────► defaults ◄ storefront.toml ◄ env overrides   │
/// │  3. Build State ─────────► RootApp (cart, catalog, form, tabs)          │
/// │  4. Session Loop ────────► stdin line ► command ► render ► stdout       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting storefront");

    let state = build_state(StorefrontConfig::load_or_default(None))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&state, stdin.lock(), stdout.lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Builds the page state, falling back to the demo product when the
/// configured one is rejected.
fn build_state(config: StorefrontConfig) -> CoreResult<StorefrontState> {
    StorefrontState::from_config(&config).or_else(|e| {
        warn!(error = %e, "Configured product rejected, using defaults");
        let fallback = StorefrontConfig {
            premium: config.premium,
            ..StorefrontConfig::default()
        };
        StorefrontState::from_config(&fallback)
    })
}

/// Drives one shell session until `quit` or end of input.
///
/// Failed commands print the error followed by the unchanged page.
pub fn run_session<R, W>(state: &StorefrontState, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render::render(&commands::catalog::get_storefront(state)))?;

    for line in input.lines() {
        let line = line?;
        let result = line
            .parse::<ShellCommand>()
            .and_then(|command| shell::execute(state, command));

        match result {
            Ok(Outcome::Render(view)) => writeln!(output, "{}", render::render(&view))?,
            Ok(Outcome::Json(view)) => match to_json(&view) {
                Ok(json) => writeln!(output, "{}", json)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            },
            Ok(Outcome::Help) => writeln!(output, "{}", shell::HELP)?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                let view = commands::catalog::get_storefront(state);
                writeln!(output, "{}", render::render(&view))?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

fn to_json(view: &StorefrontView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(view).map_err(|e| ApiError::internal(e.to_string()))
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing::subscriber::set_global_default(build_subscriber(filter))
        .unwrap_or_else(|e| eprintln!("storefront: logging disabled: {}", e));
}

/// Formatting subscriber governed only by `filter`.
///
/// Logs go to stderr so they never interleave with the rendered page.
fn build_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tracing::Level;

    fn session(script: &str) -> String {
        let state = StorefrontState::from_config(&StorefrontConfig::default()).unwrap();
        let mut out = Vec::new();
        run_session(&state, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_renders_after_each_command() {
        let out = session("add\nadd\nshow\n");
        assert!(out.contains("Cart(0)"));
        assert!(out.contains("Cart(1)"));
        assert!(out.contains("Cart(2)"));
    }

    #[test]
    fn test_session_stops_at_quit() {
        let out = session("quit\nadd\n");
        assert!(!out.contains("Cart(1)"));
    }

    #[test]
    fn test_session_reports_errors() {
        let out = session("hover 9\ntab write\nsubmit\n");
        assert!(out.contains("error: "));
        assert!(out.contains("Name required"));
    }

    #[test]
    fn test_session_json() {
        let out = session("json\n");
        assert!(out.contains("\"title\": \"Vue Mastery Socks\""));
    }

    #[test]
    fn test_build_state_falls_back() {
        let mut config = StorefrontConfig::default();
        config.premium = false;
        config.product.variants.clear();

        let state = build_state(config).unwrap();
        let view = commands::catalog::get_storefront(&state);
        assert_eq!(view.variants.len(), 2);
        assert_eq!(view.shipping, "$2.99");
    }

    #[test]
    fn test_default_log_filter_is_honored() {
        let subscriber = build_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "some_dep", Level::INFO));
            assert!(!tracing::enabled!(target: "some_dep", Level::DEBUG));
            assert!(!tracing::enabled!(target: "some_dep", Level::TRACE));
            assert!(tracing::enabled!(target: "storefront_core::events", Level::DEBUG));
            assert!(!tracing::enabled!(target: "storefront_app::shell", Level::TRACE));
        });
    }
}
