use std::collections::BTreeSet;

use caatinga_base::diagnostic::Dummy;
use caatinga_lexical::{
    category::{Category, IdentifierKind},
    token::SymbolType,
    token_stream::TokenStream,
};
use proptest::{prop_assert_eq, proptest};

use super::SymbolTable;
use crate::analyze;

fn table(source: &str) -> SymbolTable {
    SymbolTable::build(&analyze(source.chars().peekable(), &Dummy))
}

#[test]
fn test_keywords_and_symbols_are_left_out() {
    let symbol_table = table("PROGRAM ; := ( ) WHILE ENDPROGRAM");

    assert!(symbol_table.is_empty());
}

#[test]
fn test_duplicates_are_merged() {
    let symbol_table = table("x := 1;\ny := x;\n\nx := x + 1;");

    assert_eq!(symbol_table.len(), 3);

    let x = symbol_table.get("X").unwrap();
    assert_eq!(x.lines(), &[1, 2, 4]);
    assert_eq!(x.category(), Category::Identifier(IdentifierKind::Variable));

    let one = symbol_table.get("1").unwrap();
    assert_eq!(one.lines(), &[1, 4]);
    assert_eq!(one.symbol_type(), SymbolType::Integer);
}

#[test]
fn test_ordering_and_indices() {
    let symbol_table = table("PROGRAM main ; zeta := \"txt\" ; alpha := 2.5 ; beta := 7 ;");

    let rows = symbol_table
        .iter()
        .map(|x| (x.index(), x.category().code(), x.lexeme().as_str()))
        .collect::<Vec<_>>();

    assert_eq!(rows, vec![
        (1, "idn01", "MAIN"),
        (2, "idn02", "ALPHA"),
        (3, "idn02", "BETA"),
        (4, "idn02", "ZETA"),
        (5, "idn04", "7"),
        (6, "idn05", "2.5"),
        (7, "idn06", "\"txt\""),
    ]);
}

#[test]
fn test_first_occurrence_wins() {
    // the same lexeme is a function name first and a plain variable afterwards
    let symbol_table = table("FUNCTYPE REAL : media ( ) ; media := 1.5 ;");

    let media = symbol_table.get("MEDIA").unwrap();
    assert_eq!(
        media.category(),
        Category::Identifier(IdentifierKind::FunctionName)
    );
    assert_eq!(media.symbol_type(), SymbolType::Real);
    assert_eq!(symbol_table.len(), 2);
}

#[test]
fn test_truncated_lengths() {
    let long = "a".repeat(40);
    let symbol_table = table(&long);

    let entry = symbol_table.get(&"A".repeat(35)).unwrap();
    assert_eq!(entry.original_length(), 40);
    assert_eq!(entry.adjusted_length(), 35);
}

#[test]
fn test_dissolve() {
    let symbol_table = table("a b c");
    let entries = symbol_table.clone().dissolve();

    assert_eq!(entries.len(), 3);
    assert_eq!(&entries[..], &symbol_table[..]);
}

proptest! {
    #[test]
    fn property_based_testing(
        lines in proptest::collection::vec(
            proptest::collection::vec(
                proptest::sample::select(vec!["alpha", "beta", "gamma", "42", "3.5"]),
                0..4,
            ),
            1..10,
        )
    ) {
        let source = lines
            .iter()
            .map(|x| x.join(" "))
            .collect::<Vec<_>>()
            .join("\n");

        let token_stream = TokenStream::tokenize(source.chars().peekable(), &Dummy);
        let symbol_table = SymbolTable::build(&token_stream);

        let unique = token_stream
            .iter()
            .map(|x| x.lexeme().as_str())
            .collect::<BTreeSet<_>>();
        prop_assert_eq!(symbol_table.len(), unique.len());

        for entry in symbol_table.iter() {
            let expected = token_stream
                .iter()
                .filter(|x| x.lexeme() == entry.lexeme())
                .map(caatinga_lexical::token::Token::line)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect::<Vec<_>>();

            prop_assert_eq!(entry.lines(), &expected);
        }

        for (position, entry) in symbol_table.iter().enumerate() {
            prop_assert_eq!(entry.index(), position + 1);
        }
    }
}
