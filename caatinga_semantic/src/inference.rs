//! Contains the pass that recovers the declared type of identifiers from the flat token sequence.
//!
//! A declaration is introduced by a section keyword, a type keyword and a colon:
//!
//! ```text
//! VARTYPE   <type> : a , b ;          -- the comma-separated variables after the colon
//! FUNCTYPE  <type> : f                -- the function name right after the colon
//! PARAMTYPE <type> : x , y )          -- the comma-separated variables after the colon
//! ```
//!
//! A run of declared variables ends at the first token that is neither a variable nor a `,`,
//! which covers the `;`, `)` and `ENDDECLARATIONS` that usually close it.

use std::collections::HashMap;

use caatinga_lexical::{
    category::{Category, IdentifierKind, KeywordKind, SymbolKind},
    token::{SymbolType, Token},
    token_stream::TokenStream,
};

/// Is an enumeration of the keywords that open a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// `VARTYPE`
    Variable,

    /// `FUNCTYPE`
    Function,

    /// `PARAMTYPE`
    Parameter,
}

impl Section {
    /// Gets the section opened by the given keyword, if any.
    #[must_use]
    pub fn from_keyword(keyword: KeywordKind) -> Option<Self> {
        match keyword {
            KeywordKind::VarType => Some(Self::Variable),
            KeywordKind::FuncType => Some(Self::Function),
            KeywordKind::ParamType => Some(Self::Parameter),
            _ => None,
        }
    }
}

/// Gets the semantic type named by a type keyword; any other keyword names no type.
#[must_use]
pub fn type_of(keyword: KeywordKind) -> SymbolType {
    match keyword {
        KeywordKind::Integer => SymbolType::Integer,
        KeywordKind::Real => SymbolType::Real,
        KeywordKind::String => SymbolType::String,
        KeywordKind::Character => SymbolType::Character,
        KeywordKind::Boolean => SymbolType::Boolean,
        KeywordKind::Void => SymbolType::Void,
        _ => SymbolType::Unknown,
    }
}

// a run is a comma-separated list of variables; anything else ends it
fn continues_run(category: Category) -> bool {
    matches!(
        category,
        Category::Identifier(IdentifierKind::Variable) | Category::Symbol(SymbolKind::Comma)
    )
}

fn is_declarable(category: Category) -> bool {
    matches!(
        category,
        Category::Identifier(
            IdentifierKind::ProgramName | IdentifierKind::Variable | IdentifierKind::FunctionName
        )
    )
}

/// Is the result of the inference: the declared type of every declared lexeme.
///
/// When a lexeme is declared more than once, the declaration found last in the token sequence
/// wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declarations {
    types: HashMap<String, SymbolType>,
}

impl Declarations {
    /// Scans the tokens for declarations, sliding a window of three tokens over them.
    #[must_use]
    pub fn infer(tokens: &[Token]) -> Self {
        let mut declarations = Self::default();

        for (index, window) in tokens.windows(3).enumerate() {
            let [opening, type_specification, colon] = window else {
                continue;
            };

            let Some(section) = opening
                .category()
                .into_keyword()
                .ok()
                .and_then(Section::from_keyword)
            else {
                continue;
            };

            let symbol_type = match type_specification.category() {
                Category::Keyword(keyword) => type_of(keyword),
                _ => SymbolType::Unknown,
            };

            if symbol_type == SymbolType::Unknown
                || colon.category() != Category::Symbol(SymbolKind::Colon)
            {
                continue;
            }

            let declared = &tokens[index + 3..];

            match section {
                Section::Function => {
                    if let Some(name) = declared.first().filter(|x| {
                        x.category() == Category::Identifier(IdentifierKind::FunctionName)
                    }) {
                        declarations.declare(name, symbol_type);
                    }
                }
                Section::Variable | Section::Parameter => {
                    for token in declared
                        .iter()
                        .take_while(|x| continues_run(x.category()))
                        .filter(|x| x.category() == Category::Identifier(IdentifierKind::Variable))
                    {
                        declarations.declare(token, symbol_type);
                    }
                }
            }
        }

        declarations
    }

    fn declare(&mut self, token: &Token, symbol_type: SymbolType) {
        self.types.insert(token.lexeme().clone(), symbol_type);
    }

    /// Gets the declared type of the given lexeme.
    #[must_use]
    pub fn get(&self, lexeme: &str) -> Option<SymbolType> { self.types.get(lexeme).copied() }

    /// Gets the number of declared lexemes.
    #[must_use]
    pub fn len(&self) -> usize { self.types.len() }

    /// Checks whether no declaration was found.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.types.is_empty() }

    /// Annotates every identifier of the token stream whose lexeme was declared.
    ///
    /// Literals keep their seeded type and undeclared identifiers keep the unknown type.
    #[must_use]
    pub fn apply(&self, token_stream: TokenStream) -> TokenStream {
        token_stream
            .dissolve()
            .into_iter()
            .map(|mut token| {
                if is_declarable(token.category()) {
                    if let Some(symbol_type) = self.get(token.lexeme()) {
                        token.assign_symbol_type(symbol_type);
                    }
                }
                token
            })
            .collect::<Vec<_>>()
            .into()
    }
}
