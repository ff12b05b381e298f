//! Build regular-expression patterns from typed parts.
//!
//! Every construct encodes to a pattern fragment tagged with the precedence of
//! its outermost operator. The encoder that embeds a fragment compares that tag
//! with its own context and adds a non-capturing group only where the meaning
//! would otherwise change, so output stays minimal: `ab|c` rather than
//! `(?:ab)|(?:c)`, and `(?:a|b)c` where grouping is required.

pub mod alternation;
pub mod class;
pub mod construct;
pub mod group;
pub mod render;
pub mod repetition;
pub mod sequence;

pub use alternation::{Alternation, choice_of};
pub use class::{
    ANY_CHAR, CharRange, CharacterClass, ClassChar, DIGIT, NON_DIGIT, NON_WHITESPACE, NON_WORD,
    Shorthand, WHITESPACE, WORD, any_of, char_class, char_range, negated,
};
pub use construct::{
    Anchor, Construct, ConstructError, ConstructResult, EncodedFragment, Literal, Precedence,
    anchor, literal, needs_group,
};
pub use group::{Group, GroupKind, capture, named_capture, non_capturing_group};
pub use render::{
    RenderError, RenderOptions, RenderOptionsBuilder, RenderOptionsError, RenderResult,
    encode_pattern, render,
};
pub use repetition::{
    Quantified, Quantifier, RepeatMode, lazy, one_or_more, optional, repeat_at_least,
    repeat_between, repeat_exactly, zero_or_more,
};
pub use sequence::{Sequence, sequence};
