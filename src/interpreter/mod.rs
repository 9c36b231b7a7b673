//! Driving a script from source text to output.

pub mod format;
pub mod interpreter;
