//! Contains the [`Scanner`], the finite automaton that turns a character stream into tokens.

use std::fmt::Debug;

use caatinga_base::{diagnostic::Handler, source_file::CharacterStream};
use getset::CopyGetters;

use crate::{
    category::{self, Category, IdentifierKind, KeywordKind, SymbolKind},
    error::{
        self, MissingFractionDigits, UnterminatedBlockComment, UnterminatedCharacter,
        UnterminatedString,
    },
    token::{Token, MAX_LEXEME_LENGTH},
};

/// Is an enumeration of the states of the scanning automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum State {
    /// Classifies the next unconsumed character.
    #[default]
    Dispatch,

    /// Accumulates letters, digits and underscores.
    Identifier,

    /// Accumulates the whole number part of a numeric literal.
    Integer,

    /// Has consumed the `.` of a numeric literal and expects a digit.
    FractionDot,

    /// Accumulates the fractional digits of a real literal.
    Fraction,

    /// Has consumed a `/` that may start a comment.
    Slash,

    /// Inside a `//` comment.
    LineComment,

    /// Inside a `/*` comment.
    BlockComment,

    /// Inside a `/*` comment right after a `*`.
    BlockCommentStar,

    /// Has consumed a `:` that may start `:=`.
    Colon,

    /// Has consumed a `!` that may start `!=`.
    Bang,

    /// Has consumed a `=` that may start `==`.
    Equal,

    /// Has consumed a `<` that may start `<=`.
    Less,

    /// Has consumed a `>` that may start `>=`.
    Greater,

    /// Accumulates the content of a string literal after its opening `"`.
    StringLiteral,

    /// Has consumed the opening `'` of a char literal.
    CharLiteral,
}

/// Is the bounded buffer holding the text of the lexeme being recognized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Buffer {
    text: String,
    stored: usize,
    consumed: usize,
    start_line: usize,
}

impl Buffer {
    fn starting_at(line: usize) -> Self {
        Self {
            start_line: line,
            ..Self::default()
        }
    }

    /// Counts the character as consumed, storing it only while the buffer holds fewer than
    /// `capacity` characters.
    fn push(&mut self, character: char, capacity: usize) {
        self.consumed += 1;

        if self.stored < capacity {
            self.text.push(character);
            self.stored += 1;
        }
    }
}

/// Is the whole mutable state of one scan: the automaton state, the line counter, the lexeme
/// buffer and the categories of the last three emitted tokens.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct ScanContext {
    /// Gets the current state of the automaton.
    #[get_copy = "pub"]
    state: State,

    /// Gets the current line number (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    buffer: Buffer,

    /// The oldest emitted token comes first.
    recent: [Option<Category>; 3],
}

impl Default for ScanContext {
    fn default() -> Self {
        Self {
            state: State::Dispatch,
            line: 1,
            buffer: Buffer::starting_at(1),
            recent: [None; 3],
        }
    }
}

impl ScanContext {
    fn begin(&mut self, state: State) {
        self.buffer = Buffer::starting_at(self.line);
        self.state = state;
    }

    fn new_line(&mut self) { self.line += 1; }

    fn remember(&mut self, category: Category) {
        self.recent.rotate_left(1);
        self.recent[2] = Some(category);
    }

    /// Decides the role of an identifier that isn't a reserved word from the tokens emitted right
    /// before it.
    fn identifier_role(&self) -> IdentifierKind {
        match self.recent {
            [_, _, Some(Category::Keyword(KeywordKind::Program))] => IdentifierKind::ProgramName,
            [
                Some(Category::Keyword(KeywordKind::FuncType)),
                Some(Category::Keyword(keyword)),
                Some(Category::Symbol(SymbolKind::Colon)),
            ] if keyword.is_type_specification() => {
                IdentifierKind::FunctionName
            }
            _ => IdentifierKind::Variable,
        }
    }
}

/// Is the outcome of running the automaton for a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Transition {
    Continue,
    Emit(Token),
    Exhausted,
}

/// Is a lazy iterator of the [`Token`]s found in a character stream.
///
/// Every character of the stream is consumed exactly once. Malformed fragments are dropped
/// without producing a token and are reported to the handler.
pub struct Scanner<'a, S> {
    stream: S,
    context: ScanContext,
    handler: &'a dyn Handler<error::Error>,
}

impl<'a, S> Debug for Scanner<'a, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

impl<'a, S: CharacterStream> Scanner<'a, S> {
    /// Creates a scanner at the start of the given stream, on line 1.
    pub fn new(stream: S, handler: &'a dyn Handler<error::Error>) -> Self {
        Self {
            stream,
            context: ScanContext::default(),
            handler,
        }
    }

    /// Gets the current scan context.
    #[must_use]
    pub fn context(&self) -> &ScanContext { &self.context }

    fn emit(&mut self, text: &str, category: Category, original_length: usize) -> Transition {
        let token = Token::new(text, category, self.context.line, original_length);

        self.context.remember(category);
        self.context.state = State::Dispatch;

        Transition::Emit(token)
    }

    fn emit_symbol(&mut self, symbol: SymbolKind) -> Transition {
        let text = symbol.as_str();
        self.emit(text, symbol.into(), text.len())
    }

    fn emit_buffer(&mut self, kind: IdentifierKind) -> Transition {
        let buffer = std::mem::take(&mut self.context.buffer);
        self.emit(&buffer.text, kind.into(), buffer.consumed)
    }

    fn discard(&mut self, diagnostic: impl Into<error::Error>) -> Transition {
        self.handler.receive(diagnostic.into());
        self.context.state = State::Dispatch;

        Transition::Continue
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.stream.peek() == Some(expected) {
            self.stream.consume();
            true
        } else {
            false
        }
    }

    fn step(&mut self) -> Transition {
        match self.context.state {
            State::Dispatch => self.dispatch(),
            State::Identifier => self.identifier(),
            State::Integer => self.integer(),
            State::FractionDot => self.fraction_dot(),
            State::Fraction => self.fraction(),
            State::Slash => self.slash(),
            State::LineComment => self.line_comment(),
            State::BlockComment => self.block_comment(),
            State::BlockCommentStar => self.block_comment_star(),
            State::Colon => {
                if self.consume_if('=') {
                    self.emit_symbol(SymbolKind::Assignment)
                } else {
                    self.emit_symbol(SymbolKind::Colon)
                }
            }
            State::Bang => {
                if self.consume_if('=') {
                    self.emit_symbol(SymbolKind::NotEqual)
                } else {
                    self.context.state = State::Dispatch;
                    Transition::Continue
                }
            }
            State::Equal => {
                if self.consume_if('=') {
                    self.emit_symbol(SymbolKind::Equal)
                } else {
                    self.context.state = State::Dispatch;
                    Transition::Continue
                }
            }
            State::Less => {
                if self.consume_if('=') {
                    self.emit_symbol(SymbolKind::LessEqual)
                } else {
                    self.emit_symbol(SymbolKind::Less)
                }
            }
            State::Greater => {
                if self.consume_if('=') {
                    self.emit_symbol(SymbolKind::GreaterEqual)
                } else {
                    self.emit_symbol(SymbolKind::Greater)
                }
            }
            State::StringLiteral => self.string_literal(),
            State::CharLiteral => self.char_literal(),
        }
    }

    fn dispatch(&mut self) -> Transition {
        let Some(character) = self.stream.peek() else {
            return Transition::Exhausted;
        };

        // identifiers and numbers are consumed by their own states
        if character.is_ascii_alphabetic() || character == '_' {
            self.context.begin(State::Identifier);
            return Transition::Continue;
        }
        if character.is_ascii_digit() {
            self.context.begin(State::Integer);
            return Transition::Continue;
        }

        self.stream.consume();

        if let Some(symbol) = SymbolKind::standalone(character) {
            return self.emit_symbol(symbol);
        }

        let next_state = match character {
            '\n' => {
                self.context.new_line();
                return Transition::Continue;
            }
            ':' => State::Colon,
            '/' => State::Slash,
            '!' => State::Bang,
            '=' => State::Equal,
            '<' => State::Less,
            '>' => State::Greater,
            '"' => State::StringLiteral,
            '\'' => State::CharLiteral,

            // whitespaces and unknown characters
            _ => return Transition::Continue,
        };

        self.context.begin(next_state);
        Transition::Continue
    }

    fn identifier(&mut self) -> Transition {
        match self.stream.peek() {
            Some(character) if is_identifier_character(character) => {
                self.stream.consume();
                self.context.buffer.push(character, MAX_LEXEME_LENGTH);
                Transition::Continue
            }
            _ => {
                if let Some(category) = category::lookup_reserved(&self.context.buffer.text) {
                    let buffer = std::mem::take(&mut self.context.buffer);
                    return self.emit(&buffer.text, category, buffer.consumed);
                }

                let role = self.context.identifier_role();
                self.emit_buffer(role)
            }
        }
    }

    fn integer(&mut self) -> Transition {
        match self.stream.peek() {
            Some(character) if character.is_ascii_digit() => {
                self.stream.consume();
                self.context.buffer.push(character, MAX_LEXEME_LENGTH);
                Transition::Continue
            }
            Some('.') => {
                self.stream.consume();
                self.context.buffer.push('.', MAX_LEXEME_LENGTH);
                self.context.state = State::FractionDot;
                Transition::Continue
            }
            _ => self.emit_buffer(IdentifierKind::IntegerLiteral),
        }
    }

    fn fraction_dot(&mut self) -> Transition {
        match self.stream.peek() {
            Some(character) if character.is_ascii_digit() => {
                self.context.state = State::Fraction;
                Transition::Continue
            }
            _ => {
                let buffer = std::mem::take(&mut self.context.buffer);
                self.discard(MissingFractionDigits {
                    line: buffer.start_line,
                    fragment: buffer.text,
                })
            }
        }
    }

    fn fraction(&mut self) -> Transition {
        match self.stream.peek() {
            Some(character) if character.is_ascii_digit() => {
                self.stream.consume();
                self.context.buffer.push(character, MAX_LEXEME_LENGTH);
                Transition::Continue
            }
            _ => self.emit_buffer(IdentifierKind::RealLiteral),
        }
    }

    fn slash(&mut self) -> Transition {
        if self.consume_if('/') {
            self.context.state = State::LineComment;
            Transition::Continue
        } else if self.consume_if('*') {
            self.context.state = State::BlockComment;
            Transition::Continue
        } else {
            self.emit_symbol(SymbolKind::Slash)
        }
    }

    fn line_comment(&mut self) -> Transition {
        match self.stream.consume() {
            Some('\n') => {
                self.context.new_line();
                self.context.state = State::Dispatch;
            }
            Some(_) => {}
            None => self.context.state = State::Dispatch,
        }

        Transition::Continue
    }

    fn block_comment(&mut self) -> Transition {
        match self.stream.consume() {
            Some('\n') => self.context.new_line(),
            Some('*') => self.context.state = State::BlockCommentStar,
            Some(_) => {}
            None => {
                let line = self.context.buffer.start_line;
                return self.discard(UnterminatedBlockComment { line });
            }
        }

        Transition::Continue
    }

    fn block_comment_star(&mut self) -> Transition {
        match self.stream.consume() {
            Some('/') => self.context.state = State::Dispatch,
            Some('*') => {}
            Some('\n') => {
                self.context.new_line();
                self.context.state = State::BlockComment;
            }
            Some(_) => self.context.state = State::BlockComment,
            None => {
                let line = self.context.buffer.start_line;
                return self.discard(UnterminatedBlockComment { line });
            }
        }

        Transition::Continue
    }

    fn string_literal(&mut self) -> Transition {
        // the quotes count toward the stored length
        const CONTENT_CAPACITY: usize = MAX_LEXEME_LENGTH - 2;

        match self.stream.consume() {
            Some('"') => {
                let buffer = std::mem::take(&mut self.context.buffer);
                self.emit(
                    &format!("\"{}\"", buffer.text),
                    IdentifierKind::StringLiteral.into(),
                    buffer.consumed + 2,
                )
            }
            Some(character) if character != '\n' => {
                self.context.buffer.push(character, CONTENT_CAPACITY);
                Transition::Continue
            }
            end => {
                if end.is_some() {
                    self.context.new_line();
                }

                let buffer = std::mem::take(&mut self.context.buffer);
                self.discard(UnterminatedString {
                    line: buffer.start_line,
                    fragment: format!("\"{}", buffer.text),
                })
            }
        }
    }

    fn char_literal(&mut self) -> Transition {
        let line = self.context.buffer.start_line;

        let Some(character) = self.stream.consume() else {
            return self.discard(UnterminatedCharacter {
                line,
                fragment: "'".to_string(),
            });
        };

        if character == '\n' {
            self.context.new_line();
        }

        if self.consume_if('\'') {
            return self.emit(
                &format!("'{character}'"),
                IdentifierKind::CharLiteral.into(),
                3,
            );
        }

        self.discard(UnterminatedCharacter {
            line,
            fragment: format!("'{character}"),
        })
    }
}

impl<'a, S: CharacterStream> Iterator for Scanner<'a, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Transition::Continue => {}
                Transition::Emit(token) => return Some(token),
                Transition::Exhausted => return None,
            }
        }
    }
}
