mod builder;
mod encode;
mod range;
mod shorthand;

pub use builder::{
    ANY_CHAR, CharacterClass, ClassChar, DIGIT, NON_DIGIT, NON_WHITESPACE, NON_WORD, WHITESPACE,
    WORD, any_of, char_class, char_range, negated,
};
pub use range::CharRange;
pub use shorthand::Shorthand;
