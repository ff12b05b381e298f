use crate::construct::{ConstructError, ConstructResult};

/// Inclusive character range; `start <= end` by code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    start: char,
    end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> ConstructResult<Self> {
        if start > end {
            return Err(ConstructError::InvalidRangeOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    pub fn contains(&self, ch: char) -> bool {
        self.start <= ch && ch <= self.end
    }
}

/// Parse a range bound that must hold exactly one character.
pub(crate) fn single_char(bound: &'static str, value: &str) -> ConstructResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConstructError::InvalidRangeArgument {
            bound,
            value: value.to_string(),
        }),
    }
}
