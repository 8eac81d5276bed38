//! Contains the lexical fragments that the scanner discards while tokenizing the source code.
//!
//! None of these stop the scanning nor produce a token; they are only reported to a
//! [`caatinga_base::diagnostic::Handler`] so that a caller can tell the user what was dropped.

use std::fmt::Display;

use caatinga_base::log::{LineDisplay, Message, Severity};
use derive_more::From;
use enum_as_inner::EnumAsInner;

/// A string literal reached a new line or the end of the source code before its closing `"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The line the literal starts at.
    pub line: usize,

    /// The discarded text, starting at the opening `"`.
    pub fragment: String,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "discarded an unterminated string literal"),
            LineDisplay::new(self.line, &self.fragment)
        )
    }
}

/// A char literal wasn't made of exactly one character enclosed by `'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedCharacter {
    /// The line the literal starts at.
    pub line: usize,

    /// The discarded text, starting at the opening `'`.
    pub fragment: String,
}

impl Display for UnterminatedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "discarded an unterminated char literal"),
            LineDisplay::new(self.line, &self.fragment)
        )
    }
}

/// A numeric literal ended with a `.` that isn't followed by any digit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingFractionDigits {
    /// The line the literal is at.
    pub line: usize,

    /// The discarded text, including the trailing `.`.
    pub fragment: String,
}

impl Display for MissingFractionDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                "discarded a numeric literal without digits after the `.`"
            ),
            LineDisplay::new(self.line, &self.fragment)
        )
    }
}

/// The source code ended inside a `/*` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedBlockComment {
    /// The line of the `/*` that opens the comment.
    pub line: usize,
}

impl Display for UnterminatedBlockComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "found an unclosed `/*` comment"),
            LineDisplay::new(self.line, "/*")
        )
    }
}

/// Is an enumeration containing all kinds of fragments discarded while tokenizing the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedString(UnterminatedString),
    UnterminatedCharacter(UnterminatedCharacter),
    MissingFractionDigits(MissingFractionDigits),
    UnterminatedBlockComment(UnterminatedBlockComment),
}

impl Error {
    /// Gets the line the discarded fragment starts at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString(err) => err.line,
            Self::UnterminatedCharacter(err) => err.line,
            Self::MissingFractionDigits(err) => err.line,
            Self::UnterminatedBlockComment(err) => err.line,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnterminatedCharacter(err) => write!(f, "{err}"),
            Self::MissingFractionDigits(err) => write!(f, "{err}"),
            Self::UnterminatedBlockComment(err) => write!(f, "{err}"),
        }
    }
}
