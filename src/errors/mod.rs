//! Error types and error reporting for the interpreter.
//!
//! Every failure in a run is fatal. Errors are built where they are detected,
//! carry the position of the offending text, and travel up to the driver as
//! `Result<_, Error>`. This module defines:
//!
//! - The `ErrorImpl` kinds (usage, IO, lexical, parse, and lookup failures)
//! - The `Error` wrapper pairing a kind with a source position
//! - Tips used to render a one-line diagnostic

pub mod errors;
