//! This crate runs the passes that follow the tokenization: the inference of the declared types of
//! identifiers and the construction of the symbol table.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use caatinga_base::{diagnostic::Handler, source_file::CharacterStream};
use caatinga_lexical::{error, token_stream::TokenStream};

pub mod inference;
pub mod symbol_table;

/// Tokenizes the given character stream and annotates the declared identifiers with their types.
///
/// The stream is scanned completely before the declarations are inferred; the returned tokens are
/// final and can be handed to [`symbol_table::SymbolTable::build`].
#[must_use]
pub fn analyze(stream: impl CharacterStream, handler: &dyn Handler<error::Error>) -> TokenStream {
    let token_stream = TokenStream::tokenize(stream, handler);
    let declarations = inference::Declarations::infer(&token_stream);

    declarations.apply(token_stream)
}
