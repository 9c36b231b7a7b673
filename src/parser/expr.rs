use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    interpreter::format::format_number,
    lexer::{
        lexer::parse_number,
        tokens::{Token, TokenKind},
    },
};

use super::{lookups::BindingPower, parser::Parser};

/// Name of the only object with a callable member.
const CONSOLE: &str = "console";
/// The only callable member of `console`.
const LOG: &str = "log";

fn unexpected_token(parser: &Parser, message: Option<String>) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: parser.current_token().value.clone(),
            message,
        },
        parser.get_position(),
    )
}

/// Parses and evaluates an expression whose operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<f64, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => return Err(unexpected_token(parser, Some(String::from("expected a value")))),
    };

    let mut left = nud(parser)?;

    // While the current operator binds tighter than `bp`, keep folding into `left`
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => return Err(unexpected_token(parser, None)),
        };

        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<f64, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let value = parse_number(&parser.current_token().value).ok_or_else(|| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )
            })?;
            parser.advance()?;

            Ok(value)
        }
        _ => Err(unexpected_token(parser, None)),
    }
}

/// Evaluates a variable reference, or the `console.log(...)` built-in when the
/// identifier is `console` followed by `.`.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<f64, Error> {
    let symbol = parser.expect(TokenKind::Identifier, "identifier")?;

    if symbol.value == CONSOLE && parser.current_token_kind() == TokenKind::Dot {
        return parse_console_log(parser);
    }

    let value = parser
        .environment()
        .lookup(&symbol.value)
        .map_err(|e| Error::new(e, symbol.span.start.clone()))?;
    trace!(name = %symbol.value, value, "resolved variable");

    Ok(value)
}

/// `console` has been consumed and the current token is the `.`.
fn parse_console_log(parser: &mut Parser) -> Result<f64, Error> {
    parser.advance()?;

    if parser.current_token_kind() == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: format!("`{}`", LOG),
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    if !parser.current_token().is_identifier(LOG) {
        let member: &Token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: format!("{}.{}", CONSOLE, member.value),
                message: Some(String::from("only `console.log` is supported")),
            },
            parser.get_position(),
        ));
    }
    parser.advance()?;

    parser.expect(TokenKind::OpenParen, "`(`")?;
    let argument = parse_expr(parser, BindingPower::Default)?;

    // The argument is printed before the closing paren is checked.
    parser.emit(&format_number(argument))?;
    parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(0.0)
}

pub fn parse_binary_expr(parser: &mut Parser, left: f64, bp: BindingPower) -> Result<f64, Error> {
    let operator_token = parser.advance()?;

    let right = parse_expr(parser, bp)?;

    match operator_token.kind {
        TokenKind::Plus => Ok(left + right),
        TokenKind::Dash => Ok(left - right),
        TokenKind::Star => Ok(left * right),
        TokenKind::Slash => Ok(left / right),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value,
                message: Some(String::from("not a binary operator")),
            },
            operator_token.span.start,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<f64, Error> {
    parser.advance()?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(value)
}
