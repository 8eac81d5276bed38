//! Contains the closed set of category codes a token can be classified with, and the reserved-word
//! table mapping keyword/symbol spellings to their codes.

use std::{collections::HashMap, fmt::Display};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Is an enumeration representing keywords in the Caatinga programming language.
///
/// The declaration order is the order of the `prs` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Integer,
    Real,
    Character,
    String,
    Boolean,
    Void,
    True,
    False,
    VarType,
    FuncType,
    ParamType,
    Declarations,
    EndDeclarations,
    Program,
    EndProgram,
    Functions,
    EndFunctions,
    EndFunction,
    Return,
    If,
    Else,
    EndIf,
    While,
    EndWhile,
    Break,
    Print,
}

impl KeywordKind {
    /// Gets the normalized (uppercase) spelling of the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Character => "CHARACTER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Void => "VOID",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::VarType => "VARTYPE",
            Self::FuncType => "FUNCTYPE",
            Self::ParamType => "PARAMTYPE",
            Self::Declarations => "DECLARATIONS",
            Self::EndDeclarations => "ENDDECLARATIONS",
            Self::Program => "PROGRAM",
            Self::EndProgram => "ENDPROGRAM",
            Self::Functions => "FUNCTIONS",
            Self::EndFunctions => "ENDFUNCTIONS",
            Self::EndFunction => "ENDFUNCTION",
            Self::Return => "RETURN",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::EndIf => "ENDIF",
            Self::While => "WHILE",
            Self::EndWhile => "ENDWHILE",
            Self::Break => "BREAK",
            Self::Print => "PRINT",
        }
    }

    /// Gets the category code of the keyword (`prs01` to `prs26`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Integer => "prs01",
            Self::Real => "prs02",
            Self::Character => "prs03",
            Self::String => "prs04",
            Self::Boolean => "prs05",
            Self::Void => "prs06",
            Self::True => "prs07",
            Self::False => "prs08",
            Self::VarType => "prs09",
            Self::FuncType => "prs10",
            Self::ParamType => "prs11",
            Self::Declarations => "prs12",
            Self::EndDeclarations => "prs13",
            Self::Program => "prs14",
            Self::EndProgram => "prs15",
            Self::Functions => "prs16",
            Self::EndFunctions => "prs17",
            Self::EndFunction => "prs18",
            Self::Return => "prs19",
            Self::If => "prs20",
            Self::Else => "prs21",
            Self::EndIf => "prs22",
            Self::While => "prs23",
            Self::EndWhile => "prs24",
            Self::Break => "prs25",
            Self::Print => "prs26",
        }
    }

    /// Checks whether the keyword names a type (`INTEGER`, `REAL`, `CHARACTER`, `STRING`,
    /// `BOOLEAN` or `VOID`).
    #[must_use]
    pub fn is_type_specification(self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Real
                | Self::Character
                | Self::String
                | Self::Boolean
                | Self::Void
        )
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an enumeration representing the punctuation and operator symbols.
///
/// The declaration order is the order of the `srs` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum SymbolKind {
    Semicolon,
    Comma,
    Colon,
    Assignment,
    Question,
    OpenParenthesis,
    CloseParenthesis,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Hash,
}

impl SymbolKind {
    /// Gets the spelling of the symbol.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Assignment => ":=",
            Self::Question => "?",
            Self::OpenParenthesis => "(",
            Self::CloseParenthesis => ")",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Hash => "#",
        }
    }

    /// Gets the category code of the symbol (`srs01` to `srs23`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Semicolon => "srs01",
            Self::Comma => "srs02",
            Self::Colon => "srs03",
            Self::Assignment => "srs04",
            Self::Question => "srs05",
            Self::OpenParenthesis => "srs06",
            Self::CloseParenthesis => "srs07",
            Self::OpenBracket => "srs08",
            Self::CloseBracket => "srs09",
            Self::OpenBrace => "srs10",
            Self::CloseBrace => "srs11",
            Self::Plus => "srs12",
            Self::Minus => "srs13",
            Self::Star => "srs14",
            Self::Slash => "srs15",
            Self::Percent => "srs16",
            Self::Equal => "srs17",
            Self::NotEqual => "srs18",
            Self::Less => "srs19",
            Self::LessEqual => "srs20",
            Self::Greater => "srs21",
            Self::GreaterEqual => "srs22",
            Self::Hash => "srs23",
        }
    }

    /// Gets the symbol that a single character forms on its own, regardless of what follows it.
    ///
    /// Returns [`None`] for characters that need a lookahead (`:`, `/`, `!`, `=`, `<`, `>`) and
    /// for characters that aren't symbols at all.
    #[must_use]
    pub fn standalone(character: char) -> Option<Self> {
        Some(match character {
            ';' => Self::Semicolon,
            ',' => Self::Comma,
            '?' => Self::Question,
            '(' => Self::OpenParenthesis,
            ')' => Self::CloseParenthesis,
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            '{' => Self::OpenBrace,
            '}' => Self::CloseBrace,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '%' => Self::Percent,
            '#' => Self::Hash,
            _ => return None,
        })
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an enumeration of the roles an identifier or literal token can take.
///
/// The declaration order is the order of the `idn` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum IdentifierKind {
    ProgramName,
    Variable,
    FunctionName,
    IntegerLiteral,
    RealLiteral,
    StringLiteral,
    CharLiteral,
}

impl IdentifierKind {
    /// Gets the category code of the identifier role (`idn01` to `idn07`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ProgramName => "idn01",
            Self::Variable => "idn02",
            Self::FunctionName => "idn03",
            Self::IntegerLiteral => "idn04",
            Self::RealLiteral => "idn05",
            Self::StringLiteral => "idn06",
            Self::CharLiteral => "idn07",
        }
    }
}

/// Is the category a token is classified with, one variant per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Category {
    Keyword(KeywordKind),
    Symbol(SymbolKind),
    Identifier(IdentifierKind),
}

impl Category {
    /// Gets the display code of the category, e.g. `prs14`, `srs04` or `idn02`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.code(),
            Self::Symbol(symbol) => symbol.code(),
            Self::Identifier(identifier) => identifier.code(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.code()) }
}

lazy_static! {
    static ref RESERVED_WORDS: HashMap<&'static str, Category> = {
        let mut map = HashMap::new();

        for keyword in KeywordKind::iter() {
            map.insert(keyword.as_str(), Category::Keyword(keyword));
        }

        for symbol in SymbolKind::iter() {
            map.insert(symbol.as_str(), Category::Symbol(symbol));
        }

        map
    };
}

/// Looks the given spelling up in the reserved-word table, ignoring the letter case.
#[must_use]
pub fn lookup_reserved(spelling: &str) -> Option<Category> {
    RESERVED_WORDS
        .get(spelling.to_ascii_uppercase().as_str())
        .copied()
}
