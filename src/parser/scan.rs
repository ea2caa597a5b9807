//! Scanner that folds lexed tokens into a symbol grid

use crate::error::ParseError;
use crate::parser::grid::{Cell, SymbolGrid};
use crate::parser::lexer::{lex, Token};

/// Parse CSV text into a [`SymbolGrid`].
///
/// Rows are separated by `\n` or `\r\n`, cells within a row by commas.
/// There is no quoting and no escaping, and whitespace is preserved
/// verbatim. A trailing newline does not open an extra row, and empty
/// input yields an empty grid.
pub fn parse(input: &str) -> Result<SymbolGrid, Vec<ParseError>> {
    let mut grid = SymbolGrid::new();
    let mut row: Vec<Cell> = Vec::new();
    let mut pending: Option<Cell> = None;
    let mut errors: Vec<ParseError> = Vec::new();

    for (token, span) in lex(input) {
        match token {
            Ok(Token::Field(text)) => {
                pending = Some(Cell::new(text, span));
            }
            Ok(Token::Comma) => {
                row.push(pending.take().unwrap_or_else(|| Cell::empty_at(span.start)));
            }
            Ok(Token::Newline) => {
                row.push(pending.take().unwrap_or_else(|| Cell::empty_at(span.start)));
                grid.rows.push(std::mem::take(&mut row));
            }
            Err(()) => {
                errors.push(ParseError::malformed(
                    span,
                    "stray carriage return without a following line feed",
                ));
            }
        }
    }

    // A final line without a trailing newline still forms a row
    if pending.is_some() || !row.is_empty() {
        row.push(pending.take().unwrap_or_else(|| Cell::empty_at(input.len())));
        grid.rows.push(row);
    }

    if errors.is_empty() {
        Ok(grid)
    } else {
        Err(errors)
    }
}
