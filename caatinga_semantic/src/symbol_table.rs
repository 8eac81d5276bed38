//! Contains the [`SymbolTable`], the deduplicated index of the identifiers and literals of a source
//! file.

use std::collections::HashMap;

use caatinga_lexical::{
    category::Category,
    token::{SymbolType, Token},
};
use derive_more::Deref;
use getset::{CopyGetters, Getters};

/// Represents a unique lexeme of the symbol table.
///
/// Everything but the lines is taken from the first token with the lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Entry {
    /// Gets the 1-based position of the entry in the table.
    #[get_copy = "pub"]
    index: usize,

    /// Gets the lexeme shared by every token of the entry.
    #[get = "pub"]
    lexeme: String,

    /// Gets the category of the first token.
    #[get_copy = "pub"]
    category: Category,

    /// Gets the semantic type of the first token.
    #[get_copy = "pub"]
    symbol_type: SymbolType,

    /// Gets the untruncated length of the first token.
    #[get_copy = "pub"]
    original_length: usize,

    /// Gets the stored length of the first token.
    #[get_copy = "pub"]
    adjusted_length: usize,

    /// Gets the lines every token of the entry was seen at, sorted and without duplicates.
    #[get = "pub"]
    lines: Vec<usize>,
}

impl Entry {
    fn from_first_occurrence(token: &Token) -> Self {
        let mut lines = token.occurrence_lines().clone();
        lines.sort_unstable();

        Self {
            index: 0,
            category: token.category(),
            symbol_type: token.symbol_type(),
            original_length: token.original_length(),
            adjusted_length: token.adjusted_length(),
            lexeme: token.lexeme().clone(),
            lines,
        }
    }
}

/// Is the list of [`Entry`]s ordered by category code, then by lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref)]
pub struct SymbolTable {
    #[deref]
    entries: Vec<Entry>,
}

impl SymbolTable {
    /// Builds the symbol table out of the identifier and literal tokens of the given sequence.
    ///
    /// Keywords and symbols are left out.
    #[must_use]
    pub fn build(tokens: &[Token]) -> Self {
        let mut first_occurrences: Vec<Token> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for token in tokens.iter().filter(|x| x.is_identifier_or_literal()) {
            if let Some(&position) = positions.get(token.lexeme().as_str()) {
                for line in token.occurrence_lines() {
                    first_occurrences[position].record_occurrence(*line);
                }
            } else {
                positions.insert(token.lexeme(), first_occurrences.len());
                first_occurrences.push(token.clone());
            }
        }

        let mut entries = first_occurrences
            .iter()
            .map(Entry::from_first_occurrence)
            .collect::<Vec<_>>();

        entries.sort_by(|lhs, rhs| {
            (lhs.category.code(), &lhs.lexeme).cmp(&(rhs.category.code(), &rhs.lexeme))
        });

        for (position, entry) in entries.iter_mut().enumerate() {
            entry.index = position + 1;
        }

        Self { entries }
    }

    /// Gets the entry of the given lexeme.
    #[must_use]
    pub fn get(&self, lexeme: &str) -> Option<&Entry> {
        self.entries.iter().find(|x| x.lexeme == lexeme)
    }

    /// Dissolves this struct into the underlying vector of entries.
    #[must_use]
    pub fn dissolve(self) -> Vec<Entry> { self.entries }
}

#[cfg(test)]
mod tests;
