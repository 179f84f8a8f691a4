//! Quill front-end driver.
//!
//! Library half of the `quill` binary: option parsing, the `lex`, `parse`
//! and `check` commands, and logging setup. The binary only dispatches.
//!
//! # Debugging
//!
//! - `RUST_LOG=quill_parse=debug`: rule-level recovery decisions.
//! - `RUST_LOG=quill_parse=trace`: every token the parser consumes or skips.

pub mod commands;
mod error;
mod options;

use std::sync::Once;

pub use commands::{check_files, lex_file, parse_file, Status};
pub use error::DriverError;
pub use options::Options;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
