use caatinga_base::{
    diagnostic::{Dummy, Storage},
    source_file::SourceFile,
};

use super::TokenStream;
use crate::{category::Category, error::Error, token::Token};

#[test]
fn test_tokenize_source_file() {
    let source_file = SourceFile::temp(
        "PROGRAM exemplo ;\n\
         DECLARATIONS\n\
         VARTYPE REAL : media ;\n\
         ENDDECLARATIONS\n\
         media := 7.5 ; // nota\n\
         ENDPROGRAM\n",
    )
    .unwrap();

    let storage: Storage<Error> = Storage::new();
    let token_stream = TokenStream::tokenize(source_file.iter(), &storage);

    assert!(storage.as_vec().is_empty());
    assert_eq!(token_stream.len(), 15);
    assert_eq!(token_stream[1].lexeme(), "EXEMPLO");
    assert_eq!(token_stream[11].lexeme(), ":=");
    assert_eq!(token_stream[14].line(), 6);
}

#[test]
fn test_tokenize_collects_diagnostics() {
    let storage: Storage<Error> = Storage::new();
    let token_stream = TokenStream::tokenize("x := \"oops\ny := 1.;".chars().peekable(), &storage);

    assert_eq!(
        token_stream
            .iter()
            .map(|x| x.lexeme().as_str())
            .collect::<Vec<_>>(),
        vec!["X", ":=", "Y", ":=", ";"]
    );

    let errors = storage.into_vec();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].line(), 1);
    assert_eq!(errors[1].line(), 2);
}

#[test]
fn test_dissolve_round_trip() {
    let token_stream = TokenStream::tokenize("a b".chars().peekable(), &Dummy);
    let tokens: Vec<Token> = token_stream.clone().dissolve();

    assert_eq!(TokenStream::from(tokens), token_stream);
    assert!(token_stream
        .iter()
        .all(|x| matches!(x.category(), Category::Identifier(..))));
}
