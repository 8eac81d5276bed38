//! Writes the `.LEX` and `.TAB` reports of an analyzed source file.

use std::io::Write;

use caatinga_lexical::token::Token;
use caatinga_semantic::symbol_table::SymbolTable;

/// The number of line numbers listed per symbol table entry.
pub const MAX_LISTED_LINES: usize = 5;

fn write_header(writer: &mut impl Write, title: &str, source_name: &str) -> std::io::Result<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "SOURCE: {source_name}")?;
    writeln!(writer, "{}", "=".repeat(30))?;
    writeln!(writer)
}

/// Lists up to [`MAX_LISTED_LINES`] line numbers separated by commas.
#[must_use]
pub fn format_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .take(MAX_LISTED_LINES)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escapes the control characters of a lexeme so that it fits in a single report row.
#[must_use]
pub fn escape_lexeme(lexeme: &str) -> String {
    lexeme
        .chars()
        .map(|character| {
            if character.is_control() {
                character.escape_default().to_string()
            } else {
                character.to_string()
            }
        })
        .collect()
}

/// Writes one row per token, in scanning order.
pub fn write_lexical_report(
    writer: &mut impl Write,
    source_name: &str,
    tokens: &[Token],
) -> std::io::Result<()> {
    write_header(writer, "LEXICAL ANALYSIS REPORT", source_name)?;

    writeln!(writer, "{:<6} | {:<6} | {:<35}", "LINE", "CODE", "LEXEME")?;
    writeln!(writer, "{}", "-".repeat(60))?;

    for token in tokens {
        writeln!(
            writer,
            "{:<6} | {:<6} | {}",
            token.line(),
            token.category().code(),
            escape_lexeme(token.lexeme())
        )?;
    }

    Ok(())
}

/// Writes one row per symbol table entry.
pub fn write_symbol_table_report(
    writer: &mut impl Write,
    source_name: &str,
    symbol_table: &SymbolTable,
) -> std::io::Result<()> {
    write_header(writer, "SYMBOL TABLE REPORT", source_name)?;

    writeln!(
        writer,
        "{:<5} | {:<5} | {:<35} | {:<4} | {:<3} | {:<3} | {}",
        "ENTRY", "CODE", "LEXEME", "TYPE", "ORG", "TRU", "LINES"
    )?;
    writeln!(writer, "{}", "-".repeat(100))?;

    for entry in symbol_table.iter() {
        writeln!(
            writer,
            "{:<5} | {:<5} | {:<35} | {:<4} | {:<3} | {:<3} | {}",
            entry.index(),
            entry.category().code(),
            escape_lexeme(entry.lexeme()),
            entry.symbol_type().code(),
            entry.original_length(),
            entry.adjusted_length(),
            format_lines(entry.lines())
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests;
