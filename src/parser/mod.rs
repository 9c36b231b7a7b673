//! Parser module, evaluating scripts as it recognizes them.
//!
//! Expressions go through a Pratt parser: NUD (null denotation) handlers
//! start an operand and LED (left denotation) handlers fold infix operators,
//! with binding powers giving `*` and `/` precedence over `+` and `-`. There is
//! no syntax tree; each handler returns the numeric value of what it parsed.
//!
//! - Statement parsing (`let` declarations, expression statements)
//! - Expression parsing (binary operators, grouping, variables, `console.log`)

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
