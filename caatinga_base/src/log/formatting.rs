//! Contains the ASCII escape codes used to decorate console messages.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

/// Is anything that can wrap a displayable object with an escape code.
pub trait Decoration: Copy {
    /// Gets the escape code that starts the decoration.
    fn escape_code(self) -> &'static str;

    /// Applies the decoration to the given displayable object.
    fn with<T>(self, display: T) -> Decorated<Self, T> {
        Decorated {
            decoration: self,
            display,
        }
    }
}

impl Decoration for Style {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

impl Decoration for Color {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a style or color
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decorated<D, T> {
    /// The decoration applied to the displayable object.
    pub decoration: D,

    /// The displayable object.
    pub display: T,
}

impl<D: Decoration, T: Display> Display for Decorated<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.decoration.escape_code(), self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Decoration, Style};

    #[test]
    fn test_nested_decoration() {
        let text = Style::Bold.with(Color::Red.with("x")).to_string();
        assert_eq!(text, "\x1B[1m\x1B[31mx\x1B[0m\x1B[0m");
    }
}
