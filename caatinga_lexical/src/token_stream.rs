//! Contains the [`TokenStream`] struct, the final output of the lexical analysis phase.

use std::ops::Index;

use caatinga_base::{diagnostic::Handler, source_file::CharacterStream};
use derive_more::{Deref, From};

use crate::{error, scanner::Scanner, token::Token};

/// Is the ordered list of every token found in a source file.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// type inference pass, the symbol table and the reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deref, From)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given character stream.
    ///
    /// This function drives a [`Scanner`] over the whole stream in a single pass. Fragments that
    /// can't form a token are left out of the stream and reported to the `handler`.
    #[must_use]
    pub fn tokenize(stream: impl CharacterStream, handler: &dyn Handler<error::Error>) -> Self {
        Self {
            tokens: Scanner::new(stream, handler).collect(),
        }
    }

    /// Dissolves this struct into the underlying vector of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

#[cfg(test)]
pub(crate) mod tests;
