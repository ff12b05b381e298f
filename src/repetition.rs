use serde::{Deserialize, Serialize};

use crate::construct::{
    Construct, ConstructError, ConstructResult, EncodedFragment, Precedence, embed, non_capturing,
};
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
    Exactly(u32),
    AtLeast(u32),
    Between(u32, u32),
}

impl Quantifier {
    fn suffix(self) -> String {
        match self {
            Quantifier::ZeroOrOne => String::from("?"),
            Quantifier::ZeroOrMore => String::from("*"),
            Quantifier::OneOrMore => String::from("+"),
            Quantifier::Exactly(n) => format!("{{{}}}", n),
            Quantifier::AtLeast(n) => format!("{{{},}}", n),
            Quantifier::Between(min, max) => format!("{{{},{}}}", min, max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RepeatMode {
    #[default]
    Greedy,
    Lazy,
}

/// An operand repeated according to a [`Quantifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantified {
    operand: Box<Construct>,
    quantifier: Quantifier,
    mode: RepeatMode,
}

impl Quantified {
    pub fn new(operand: impl Into<Construct>, quantifier: Quantifier) -> ConstructResult<Self> {
        if let Quantifier::Between(min, max) = quantifier
            && min > max
        {
            return Err(ConstructError::InvalidQuantifierBounds { min, max });
        }
        Ok(Self {
            operand: Box::new(operand.into()),
            quantifier,
            mode: RepeatMode::Greedy,
        })
    }

    pub fn with_mode(mut self, mode: RepeatMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn operand(&self) -> &Construct {
        &self.operand
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn mode(&self) -> RepeatMode {
        self.mode
    }

    pub(crate) fn take_operand(&mut self) -> Construct {
        std::mem::replace(&mut *self.operand, Construct::Sequence(Sequence::default()))
    }

    /// A quantifier binds to the single atom before it, so anything looser
    /// than an atom is grouped first.
    #[tracing::instrument(level = "trace", skip(self), fields(quantifier = ?self.quantifier, mode = ?self.mode))]
    pub(crate) fn encode(&self) -> ConstructResult<EncodedFragment> {
        let operand = self.operand.encode()?;
        let mut pattern = if operand.is_empty() {
            non_capturing("")
        } else {
            embed(&operand, Precedence::Atom)
        };
        pattern.push_str(&self.quantifier.suffix());
        // `{n}?` matches exactly what `{n}` does
        if self.mode == RepeatMode::Lazy && !matches!(self.quantifier, Quantifier::Exactly(_)) {
            pattern.push('?');
        }
        Ok(EncodedFragment::new(pattern, Precedence::Quantifier))
    }
}

pub fn optional(operand: impl Into<Construct>) -> Construct {
    quantify(operand, Quantifier::ZeroOrOne)
}

pub fn zero_or_more(operand: impl Into<Construct>) -> Construct {
    quantify(operand, Quantifier::ZeroOrMore)
}

pub fn one_or_more(operand: impl Into<Construct>) -> Construct {
    quantify(operand, Quantifier::OneOrMore)
}

pub fn repeat_exactly(operand: impl Into<Construct>, count: u32) -> Construct {
    quantify(operand, Quantifier::Exactly(count))
}

pub fn repeat_at_least(operand: impl Into<Construct>, min: u32) -> Construct {
    quantify(operand, Quantifier::AtLeast(min))
}

pub fn repeat_between(
    operand: impl Into<Construct>,
    min: u32,
    max: u32,
) -> ConstructResult<Construct> {
    Quantified::new(operand, Quantifier::Between(min, max)).map(Construct::Quantified)
}

/// Switch a quantified construct to lazy matching; other constructs are
/// returned as they are.
pub fn lazy(mut construct: Construct) -> Construct {
    if let Construct::Quantified(quantified) = &mut construct {
        quantified.mode = RepeatMode::Lazy;
    }
    construct
}

// Callers only pass quantifiers whose bounds cannot be inverted.
fn quantify(operand: impl Into<Construct>, quantifier: Quantifier) -> Construct {
    Construct::Quantified(Quantified {
        operand: Box::new(operand.into()),
        quantifier,
        mode: RepeatMode::Greedy,
    })
}
