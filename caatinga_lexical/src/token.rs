//! Is a module containing the [`Token`] type and all of its related types.

use std::fmt::Display;

use getset::{CopyGetters, Getters};

use crate::category::{Category, IdentifierKind};

/// The maximum number of characters stored for a lexeme; anything longer is truncated.
pub const MAX_LEXEME_LENGTH: usize = 35;

/// Is an enumeration of the semantic types a token can be annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[allow(missing_docs)]
pub enum SymbolType {
    #[default]
    Unknown,
    Integer,
    Real,
    String,
    Character,
    Boolean,
    Void,
}

impl SymbolType {
    /// Gets the two letter code of the type, or `-` when the type is unknown.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Unknown => "-",
            Self::Integer => "IN",
            Self::Real => "FL",
            Self::String => "ST",
            Self::Character => "CH",
            Self::Boolean => "BL",
            Self::Void => "VD",
        }
    }

    /// Gets the type that a token of the given category starts with.
    ///
    /// Constant literals have a fixed type; everything else is unknown until the declarations are
    /// inferred.
    #[must_use]
    pub fn seeded_for(category: Category) -> Self {
        match category {
            Category::Identifier(IdentifierKind::IntegerLiteral) => Self::Integer,
            Category::Identifier(IdentifierKind::RealLiteral) => Self::Real,
            Category::Identifier(IdentifierKind::StringLiteral) => Self::String,
            Category::Identifier(IdentifierKind::CharLiteral) => Self::Character,
            _ => Self::Unknown,
        }
    }
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.code()) }
}

/// Represents a recognized lexical unit of the source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Gets the normalized, possibly truncated, text of the token.
    #[get = "pub"]
    lexeme: String,

    /// Gets the category the token was classified with.
    #[get_copy = "pub"]
    category: Category,

    /// Gets the lines the lexeme was scanned at, in the order they were recorded.
    #[get = "pub"]
    occurrence_lines: Vec<usize>,

    /// Gets the number of characters consumed to recognize the token, before truncation.
    #[get_copy = "pub"]
    original_length: usize,

    /// Gets the semantic type of the token.
    #[get_copy = "pub"]
    symbol_type: SymbolType,
}

impl Token {
    /// Creates a token scanned at the given line.
    ///
    /// The text is uppercased unless the token is a string or char literal, then truncated to
    /// [`MAX_LEXEME_LENGTH`] characters. The symbol type is seeded from the category.
    #[must_use]
    pub fn new(text: &str, category: Category, line: usize, original_length: usize) -> Self {
        let preserves_case = matches!(
            category,
            Category::Identifier(IdentifierKind::StringLiteral | IdentifierKind::CharLiteral)
        );

        let lexeme = text
            .chars()
            .take(MAX_LEXEME_LENGTH)
            .map(|character| {
                if preserves_case {
                    character
                } else {
                    character.to_ascii_uppercase()
                }
            })
            .collect();

        Self {
            lexeme,
            category,
            occurrence_lines: vec![line],
            original_length,
            symbol_type: SymbolType::seeded_for(category),
        }
    }

    /// Gets the number of characters of the stored lexeme.
    #[must_use]
    pub fn adjusted_length(&self) -> usize { self.lexeme.chars().count() }

    /// Gets the line the token was first scanned at.
    #[must_use]
    pub fn line(&self) -> usize { self.occurrence_lines[0] }

    /// Checks whether the token belongs to the identifier-or-literal family.
    #[must_use]
    pub fn is_identifier_or_literal(&self) -> bool { self.category.is_identifier() }

    /// Records another line the lexeme was seen at; a line already recorded is ignored.
    pub fn record_occurrence(&mut self, line: usize) {
        if !self.occurrence_lines.contains(&line) {
            self.occurrence_lines.push(line);
        }
    }

    /// Annotates the token with the given semantic type.
    pub fn assign_symbol_type(&mut self, symbol_type: SymbolType) {
        self.symbol_type = symbol_type;
    }
}

#[cfg(test)]
mod tests;
