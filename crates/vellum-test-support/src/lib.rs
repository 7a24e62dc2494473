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

//! Shared test helpers used across integration suites.
//! Layout: storage.rs (recording/failing stores), document.rs (recording document surface),
//! probe.rs (fixed language probe), fixtures.rs (wired contexts).

pub mod document;
pub mod fixtures;
pub mod probe;
pub mod storage;
