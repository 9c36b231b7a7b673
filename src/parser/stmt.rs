use tracing::debug;

use crate::{
    errors::errors::Error, interpreter::format::format_number, lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Label printed in front of the value of a bare expression statement.
pub const RESULT_LABEL: &str = "Result: ";

pub fn parse_stmt(parser: &mut Parser) -> Result<Option<f64>, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

/// `let IDENT = expr [;]`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Option<f64>, Error> {
    parser.advance()?;

    let name = parser.expect(TokenKind::Identifier, "identifier")?.value;
    parser.expect(TokenKind::Assignment, "`=`")?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_if(TokenKind::Semicolon)?;

    parser.environment_mut().define(&name, value);

    Ok(None)
}

/// `expr [;]`, printed with the result label.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Option<f64>, Error> {
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip_if(TokenKind::Semicolon)?;

    debug!(value, "expression statement");
    parser.emit(&format!("{}{}", RESULT_LABEL, format_number(value)))?;

    Ok(Some(value))
}
