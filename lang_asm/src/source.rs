//! Comment stripping, header handling and tokenization of raw source text.

use log::{debug, trace};

use crate::error::TranslateError;
use crate::statement::Statement;

/// Directive that must open every source file.
pub const HEADER: &str = ".LANGUAGE";

/// A non-blank source line with its comment removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'s> {
    pub number: usize,
    pub text: &'s str,
}

/// Cuts the line at the first `#`. String literals get no special treatment.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Splits on `\n`, `\r\n` and lone `\r`, each counting as one line break.
fn lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Strips comments and drops lines left blank, keeping 1-based line numbers.
pub fn strip(source: &str) -> Vec<SourceLine> {
    lines(source)
        .enumerate()
        .map(|(i, line)| SourceLine {
            number: i + 1,
            text: strip_comment(line),
        })
        .filter(|line| !line.text.trim().is_empty())
        .collect()
}

fn is_header(token: &str) -> bool {
    token.eq_ignore_ascii_case(HEADER)
}

fn is_header_line(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    matches!((tokens.next(), tokens.next()), (Some(token), None) if is_header(token))
}

/// Splits the source into instruction statements, consuming the header line.
///
/// The whole stream is checked for a repeated header before any statement is
/// handed on.
pub fn read(source: &str) -> Result<Vec<Statement>, TranslateError> {
    let mut lines = strip(source).into_iter();

    match lines.next() {
        Some(first) if is_header_line(first.text) => {
            trace!("header found on line {}", first.number);
        }
        _ => return Err(TranslateError::MissingHeader),
    }

    let statements = lines
        .map(|line| Statement::tokenize(line.number, line.text))
        .collect::<Vec<_>>();

    if let Some(repeat) = statements
        .iter()
        .find(|s| s.tokens.iter().any(|token| is_header(token)))
    {
        return Err(TranslateError::DuplicateHeader { line: repeat.line });
    }

    debug!("read {} statement(s)", statements.len());
    Ok(statements)
}
