#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    dead_code,
    unused,
    unused_imports,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs
)]

//! Logging setup shared across the Vellum workspace.
//!
//! Native builds write to stderr; `wasm32` builds forward each event to the browser
//! console at a matching severity.

#[cfg(target_arch = "wasm32")]
mod console;
pub mod init;

pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
