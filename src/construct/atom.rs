use regex::escape;

use super::{EncodedFragment, Precedence};

/// Verbatim text; every metacharacter is escaped on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn encode(&self) -> EncodedFragment {
        // "ab" is a concatenation of two atoms; a quantifier must not bind to "b" alone
        let precedence = if self.text.chars().nth(1).is_some() {
            Precedence::Sequence
        } else {
            Precedence::Atom
        };
        EncodedFragment::new(escape(&self.text), precedence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    StartOfText,
    EndOfText,
    WordBoundary,
    NotWordBoundary,
}

impl Anchor {
    pub fn token(self) -> &'static str {
        match self {
            Anchor::StartOfText => "^",
            Anchor::EndOfText => "$",
            Anchor::WordBoundary => r"\b",
            Anchor::NotWordBoundary => r"\B",
        }
    }

    pub(crate) fn encode(self) -> EncodedFragment {
        EncodedFragment::atom(self.token())
    }
}
