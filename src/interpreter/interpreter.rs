use std::{fs, io::Write, path::Path};

use tracing::{debug, info};

use crate::{
    environment::environment::{Environment, LookupPolicy},
    errors::errors::{Error, ErrorImpl},
    parser::parser::{execute, Parser},
};

/// Settings for one run of a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Which binding a redeclared name resolves to.
    pub lookup_policy: LookupPolicy,
}

/// Runs every statement of `source`, writing program output to `out`.
///
/// `file` names the script in error positions. On success the environment
/// holding every binding the script made is returned. The first error ends
/// the run.
pub fn interpret(
    source: &str,
    file: Option<String>,
    options: &Options,
    out: &mut dyn Write,
) -> Result<Environment, Error> {
    debug!(?options, bytes = source.len(), "starting run");

    let environment = Environment::with_policy(options.lookup_policy);
    let mut parser = Parser::new(source.to_string(), file, environment, out)?;
    execute(&mut parser)?;

    Ok(parser.into_environment())
}

/// Reads a whole script into memory.
pub fn read_script(path: &Path) -> Result<String, Error> {
    info!(path = %path.display(), "reading script");

    fs::read_to_string(path).map_err(|e| {
        Error::without_position(ErrorImpl::IOError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Reads the script at `path` and runs it.
pub fn run_file(path: &Path, options: &Options, out: &mut dyn Write) -> Result<Environment, Error> {
    let source = read_script(path)?;
    interpret(&source, Some(path.display().to_string()), options, out)
}
