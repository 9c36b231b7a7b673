//! Parser state and the statement loop.
//!
//! The `Parser` owns the lexer, the single live token, the environment of the
//! run, and the sink that program output is written to. Parsing and
//! evaluation happen in the same pass: every handler returns the value of the
//! span it consumed instead of building a tree.
//!
//! It keeps lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for tokens that start an operand
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, io::Write, mem, rc::Rc};

use tracing::{debug, info};

use crate::{
    environment::environment::Environment,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Name used in diagnostics for failures writing program output.
const OUTPUT_NAME: &str = "<output>";

pub struct Parser<'a> {
    /// Source of tokens, scanned one at a time
    lexer: Lexer,
    /// The only token alive at any moment
    current: Token,
    /// Bindings made so far in this run
    environment: Environment,
    /// Where `console.log` and statement results are written
    out: &'a mut dyn Write,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned on the first token of `source`.
    ///
    /// Fails if that first token cannot be scanned.
    pub fn new(
        source: String,
        file: Option<String>,
        environment: Environment,
        out: &'a mut dyn Write,
    ) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, file);
        let current = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            current,
            environment,
            out,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Scans the next token and returns the one it replaces.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of `expected_kind`, otherwise fails
    /// with an `ExpectedToken` error naming it as `description`.
    pub fn expect(&mut self, expected_kind: TokenKind, description: &str) -> Result<Token, Error> {
        if self.current.kind == expected_kind {
            return self.advance();
        }

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: description.to_string(),
                found: self.current.value.clone(),
            },
            self.get_position(),
        ))
    }

    /// Consumes the current token only if it is of `kind`.
    pub fn skip_if(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of the current token; tokens that cannot continue an
    /// expression have `Default`.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current.kind)
            .unwrap_or(&BindingPower::Default)
    }

    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Writes one line of program output.
    pub fn emit(&mut self, line: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", line).map_err(output_error)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.out.flush().map_err(output_error)
    }

    /// Position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }
}

fn output_error(e: std::io::Error) -> Error {
    Error::without_position(ErrorImpl::IOError {
        path: String::from(OUTPUT_NAME),
        message: e.to_string(),
    })
}

/// Runs every statement until the end of input and returns how many ran.
///
/// The output sink is flushed once every statement has run. The first error
/// stops the run; output written by earlier statements is left in place.
pub fn execute(parser: &mut Parser) -> Result<usize, Error> {
    let mut count = 0;

    while parser.has_tokens() {
        let result = parse_stmt(parser)?;
        count += 1;
        debug!(statement = count, ?result, "executed statement");
    }
    parser.flush()?;

    info!(file = %parser.file(), statements = count, "finished script");
    Ok(count)
}
