/// Binding strength of a fragment's outermost operator.
///
/// Variants are declared loosest first so the derived ordering reads
/// `Atom > Quantifier > Sequence > Disjunction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Disjunction,
    Sequence,
    Quantifier,
    Atom,
}

/// Rendered pattern text tagged with the precedence of its outermost operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFragment {
    pub pattern: String,
    pub precedence: Precedence,
}

impl EncodedFragment {
    pub fn new(pattern: impl Into<String>, precedence: Precedence) -> Self {
        Self {
            pattern: pattern.into(),
            precedence,
        }
    }

    pub fn atom(pattern: impl Into<String>) -> Self {
        Self::new(pattern, Precedence::Atom)
    }

    pub fn empty() -> Self {
        Self::atom(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn into_pattern(self) -> String {
        self.pattern
    }
}

/// Whether `fragment` binds more loosely than `context` demands.
#[inline]
pub fn needs_group(fragment: &EncodedFragment, context: Precedence) -> bool {
    fragment.precedence < context
}

/// Pattern text of `fragment`, wrapped in a non-capturing group when
/// embedding it under `context` would change its meaning.
pub(crate) fn embed(fragment: &EncodedFragment, context: Precedence) -> String {
    if needs_group(fragment, context) {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "group",
            precedence = ?fragment.precedence,
            context = ?context
        );
        non_capturing(&fragment.pattern)
    } else {
        fragment.pattern.clone()
    }
}

pub(crate) fn non_capturing(pattern: &str) -> String {
    format!("(?:{})", pattern)
}
