use super::range::{CharRange, single_char};
use super::shorthand::Shorthand;
use crate::construct::{ConstructError, ConstructResult};

/// One non-range member of a class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassChar {
    Literal(char),
    Shorthand(Shorthand),
}

/// A bracket expression, or a bare shorthand when nothing else is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    pub(super) escape: Option<Shorthand>,
    pub(super) chars: Vec<ClassChar>,
    pub(super) ranges: Vec<CharRange>,
    pub(super) negated: bool,
}

pub const ANY_CHAR: CharacterClass = CharacterClass::shorthand(Shorthand::Any);
pub const DIGIT: CharacterClass = CharacterClass::shorthand(Shorthand::Digit);
pub const NON_DIGIT: CharacterClass = CharacterClass::shorthand(Shorthand::NonDigit);
pub const WORD: CharacterClass = CharacterClass::shorthand(Shorthand::Word);
pub const NON_WORD: CharacterClass = CharacterClass::shorthand(Shorthand::NonWord);
pub const WHITESPACE: CharacterClass = CharacterClass::shorthand(Shorthand::Whitespace);
pub const NON_WHITESPACE: CharacterClass = CharacterClass::shorthand(Shorthand::NonWhitespace);

impl CharacterClass {
    pub const fn shorthand(escape: Shorthand) -> Self {
        Self {
            escape: Some(escape),
            chars: Vec::new(),
            ranges: Vec::new(),
            negated: false,
        }
    }

    pub fn escape(&self) -> Option<Shorthand> {
        self.escape
    }

    pub fn chars(&self) -> &[ClassChar] {
        &self.chars
    }

    pub fn ranges(&self) -> &[CharRange] {
        &self.ranges
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_empty(&self) -> bool {
        self.escape.is_none() && self.chars.is_empty() && self.ranges.is_empty()
    }

    /// The escape (as a shorthand member) followed by the literal members.
    pub fn all_chars(&self) -> impl Iterator<Item = ClassChar> + '_ {
        self.escape
            .map(ClassChar::Shorthand)
            .into_iter()
            .chain(self.chars.iter().copied())
    }

    pub(super) fn is_bare_shorthand(&self) -> Option<Shorthand> {
        if self.negated || !self.chars.is_empty() || !self.ranges.is_empty() {
            return None;
        }
        self.escape
    }
}

/// Class matching any one character of `chars`.
pub fn any_of(chars: &str) -> ConstructResult<CharacterClass> {
    if chars.is_empty() {
        return Err(ConstructError::EmptyConstruct {
            construct: "any_of input",
        });
    }
    Ok(CharacterClass {
        escape: None,
        chars: chars.chars().map(ClassChar::Literal).collect(),
        ranges: Vec::new(),
        negated: false,
    })
}

/// Class matching every character from `start` through `end`.
pub fn char_range(start: &str, end: &str) -> ConstructResult<CharacterClass> {
    let start = single_char("start", start)?;
    let end = single_char("end", end)?;
    Ok(CharacterClass {
        escape: None,
        chars: Vec::new(),
        ranges: vec![CharRange::new(start, end)?],
        negated: false,
    })
}

/// Union of several classes.
///
/// A single class comes back untouched. Negation does not distribute over a
/// union, so negated operands are refused; negate the merged class instead.
pub fn char_class<I>(classes: I) -> ConstructResult<CharacterClass>
where
    I: IntoIterator<Item = CharacterClass>,
{
    let mut iter = classes.into_iter();
    let Some(first) = iter.next() else {
        return Err(ConstructError::EmptyConstruct {
            construct: "character class merge",
        });
    };
    let Some(second) = iter.next() else {
        return Ok(first);
    };

    let mut merged = CharacterClass {
        escape: None,
        chars: Vec::new(),
        ranges: Vec::new(),
        negated: false,
    };
    for (index, class) in [first, second].into_iter().chain(iter).enumerate() {
        if class.negated {
            return Err(ConstructError::NegatedOperandNotAllowed { index });
        }
        merged.chars.extend(class.all_chars());
        merged.ranges.extend_from_slice(&class.ranges);
    }
    Ok(merged)
}

/// The complement of `class`. Negating twice leaves the class negated.
pub fn negated(class: CharacterClass) -> CharacterClass {
    CharacterClass {
        negated: true,
        ..class
    }
}
