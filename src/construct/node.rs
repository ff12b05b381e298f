use super::atom::{Anchor, Literal};
use super::{ConstructResult, EncodedFragment};
use crate::alternation::Alternation;
use crate::class::CharacterClass;
use crate::group::Group;
use crate::repetition::Quantified;
use crate::sequence::Sequence;

/// A composable piece of a pattern.
///
/// Values are plain data: building a larger construct moves or clones its
/// operands and never mutates them, so a construct may be shared read-only
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    Literal(Literal),
    Anchor(Anchor),
    Class(CharacterClass),
    Sequence(Sequence),
    Alternation(Alternation),
    Quantified(Quantified),
    Group(Group),
}

impl Construct {
    /// Render this construct without looking at where it will be embedded.
    pub fn encode(&self) -> ConstructResult<EncodedFragment> {
        match self {
            Construct::Literal(literal) => Ok(literal.encode()),
            Construct::Anchor(anchor) => Ok(anchor.encode()),
            Construct::Class(class) => class.encode(),
            Construct::Sequence(sequence) => sequence.encode(),
            Construct::Alternation(alternation) => alternation.encode(),
            Construct::Quantified(quantified) => quantified.encode(),
            Construct::Group(group) => group.encode(),
        }
    }

    /// First nesting level past `max`, if the tree reaches one.
    ///
    /// Leaves count as one level and each alternative of an alternation as a
    /// level of its own. The walk keeps its own stack and stops at the first
    /// node beyond `max`.
    pub fn exceeds_depth(&self, max: usize) -> Option<usize> {
        let mut pending: Vec<(&Construct, usize)> = vec![(self, 1)];
        while let Some((construct, depth)) = pending.pop() {
            if depth > max {
                return Some(depth);
            }
            match construct {
                Construct::Literal(_) | Construct::Anchor(_) | Construct::Class(_) => {}
                Construct::Sequence(sequence) => {
                    pending.extend(sequence.items().iter().map(|item| (item, depth + 1)));
                }
                Construct::Alternation(alternation) => {
                    if depth + 1 > max {
                        return Some(depth + 1);
                    }
                    for alternative in alternation.alternatives() {
                        pending.extend(alternative.items().iter().map(|item| (item, depth + 2)));
                    }
                }
                Construct::Quantified(quantified) => pending.push((quantified.operand(), depth + 1)),
                Construct::Group(group) => pending.push((group.inner(), depth + 1)),
            }
        }
        None
    }

    fn detach_children(&mut self, out: &mut Vec<Construct>) {
        match self {
            Construct::Literal(_) | Construct::Anchor(_) | Construct::Class(_) => {}
            Construct::Sequence(sequence) => out.append(&mut sequence.take_items()),
            Construct::Alternation(alternation) => {
                for mut alternative in alternation.take_alternatives() {
                    out.append(&mut alternative.take_items());
                }
            }
            Construct::Quantified(quantified) => out.push(quantified.take_operand()),
            Construct::Group(group) => out.push(group.take_inner()),
        }
    }
}

// Unlinks children onto a heap stack so dropping a deep tree never recurses.
impl Drop for Construct {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl From<Literal> for Construct {
    fn from(value: Literal) -> Self {
        Construct::Literal(value)
    }
}

impl From<Anchor> for Construct {
    fn from(value: Anchor) -> Self {
        Construct::Anchor(value)
    }
}

impl From<CharacterClass> for Construct {
    fn from(value: CharacterClass) -> Self {
        Construct::Class(value)
    }
}

impl From<Sequence> for Construct {
    fn from(value: Sequence) -> Self {
        Construct::Sequence(value)
    }
}

impl From<Alternation> for Construct {
    fn from(value: Alternation) -> Self {
        Construct::Alternation(value)
    }
}

impl From<Quantified> for Construct {
    fn from(value: Quantified) -> Self {
        Construct::Quantified(value)
    }
}

impl From<Group> for Construct {
    fn from(value: Group) -> Self {
        Construct::Group(value)
    }
}

impl From<&str> for Construct {
    fn from(value: &str) -> Self {
        Construct::Literal(Literal::new(value))
    }
}

impl From<char> for Construct {
    fn from(value: char) -> Self {
        Construct::Literal(Literal::new(value))
    }
}

pub fn literal(text: impl Into<String>) -> Construct {
    Construct::Literal(Literal::new(text))
}

pub fn anchor(anchor: Anchor) -> Construct {
    Construct::Anchor(anchor)
}
