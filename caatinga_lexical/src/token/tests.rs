use super::{SymbolType, Token, MAX_LEXEME_LENGTH};
use crate::category::{Category, IdentifierKind, KeywordKind, SymbolKind};

#[test]
fn test_identifier_is_uppercased() {
    let token = Token::new(
        "Teste_1",
        Category::Identifier(IdentifierKind::Variable),
        3,
        7,
    );

    assert_eq!(token.lexeme(), "TESTE_1");
    assert_eq!(token.line(), 3);
    assert_eq!(token.adjusted_length(), 7);
    assert_eq!(token.original_length(), 7);
    assert_eq!(token.symbol_type(), SymbolType::Unknown);
    assert!(token.is_identifier_or_literal());
}

#[test]
fn test_literal_keeps_letter_case() {
    let string = Token::new(
        "\"Ola Mundo\"",
        Category::Identifier(IdentifierKind::StringLiteral),
        1,
        11,
    );
    let character = Token::new("'a'", Category::Identifier(IdentifierKind::CharLiteral), 1, 3);

    assert_eq!(string.lexeme(), "\"Ola Mundo\"");
    assert_eq!(string.symbol_type(), SymbolType::String);
    assert_eq!(character.lexeme(), "'a'");
    assert_eq!(character.symbol_type(), SymbolType::Character);
}

#[test]
fn test_numeric_literals_are_seeded() {
    let integer = Token::new("42", Category::Identifier(IdentifierKind::IntegerLiteral), 1, 2);
    let real = Token::new("4.2", Category::Identifier(IdentifierKind::RealLiteral), 1, 3);

    assert_eq!(integer.symbol_type().code(), "IN");
    assert_eq!(real.symbol_type().code(), "FL");
}

#[test]
fn test_keywords_and_symbols_are_not_identifiers() {
    let keyword = Token::new("while", Category::Keyword(KeywordKind::While), 1, 5);
    let symbol = Token::new(":=", Category::Symbol(SymbolKind::Assignment), 1, 2);

    assert_eq!(keyword.lexeme(), "WHILE");
    assert_eq!(keyword.category().code(), "prs23");
    assert!(!keyword.is_identifier_or_literal());
    assert_eq!(symbol.lexeme(), ":=");
    assert_eq!(symbol.symbol_type().code(), "-");
    assert!(!symbol.is_identifier_or_literal());
}

#[test]
fn test_truncation() {
    let text = "a".repeat(50);
    let token = Token::new(&text, Category::Identifier(IdentifierKind::Variable), 1, 50);

    assert_eq!(token.lexeme(), &"A".repeat(MAX_LEXEME_LENGTH));
    assert_eq!(token.adjusted_length(), MAX_LEXEME_LENGTH);
    assert_eq!(token.original_length(), 50);
}

#[test]
fn test_record_occurrence_suppresses_duplicates() {
    let mut token = Token::new("x", Category::Identifier(IdentifierKind::Variable), 4, 1);

    token.record_occurrence(2);
    token.record_occurrence(4);
    token.record_occurrence(2);
    token.record_occurrence(9);

    assert_eq!(token.occurrence_lines(), &vec![4, 2, 9]);
    assert_eq!(token.line(), 4);
}

#[test]
fn test_assign_symbol_type() {
    let mut token = Token::new("f", Category::Identifier(IdentifierKind::FunctionName), 1, 1);
    token.assign_symbol_type(SymbolType::Void);

    assert_eq!(token.symbol_type(), SymbolType::Void);
    assert_eq!(token.symbol_type().to_string(), "VD");
}
