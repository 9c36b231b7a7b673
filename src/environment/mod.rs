//! Variable storage for a single run.
//!
//! Bindings are appended by `let` and never removed or overwritten. Which of
//! several bindings sharing a name `lookup` observes is decided by the
//! environment's `LookupPolicy`.

pub mod environment;
