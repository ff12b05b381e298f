/// Builtin escape classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    Any,
    Digit,
    NonDigit,
    Word,
    NonWord,
    Whitespace,
    NonWhitespace,
}

impl Shorthand {
    /// Token used when the shorthand stands on its own.
    pub fn token(self) -> &'static str {
        match self {
            Shorthand::Any => ".",
            Shorthand::Digit => r"\d",
            Shorthand::NonDigit => r"\D",
            Shorthand::Word => r"\w",
            Shorthand::NonWord => r"\W",
            Shorthand::Whitespace => r"\s",
            Shorthand::NonWhitespace => r"\S",
        }
    }

    /// Token used inside a bracket expression, where `.` is a plain dot.
    pub fn class_token(self) -> &'static str {
        match self {
            Shorthand::Any => r"\s\S",
            other => other.token(),
        }
    }
}
