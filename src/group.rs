use crate::construct::{Construct, ConstructError, ConstructResult, EncodedFragment, non_capturing};
use crate::sequence::Sequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
}

/// Explicit parentheses around a construct. Whatever the inner precedence,
/// a group is an atom to its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    inner: Box<Construct>,
    kind: GroupKind,
}

impl Group {
    pub fn new(inner: impl Into<Construct>, kind: GroupKind) -> ConstructResult<Self> {
        if let GroupKind::Named(name) = &kind {
            validate_group_name(name)?;
        }
        Ok(Self {
            inner: Box::new(inner.into()),
            kind,
        })
    }

    pub fn inner(&self) -> &Construct {
        &self.inner
    }

    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    pub(crate) fn take_inner(&mut self) -> Construct {
        std::mem::replace(&mut *self.inner, Construct::Sequence(Sequence::default()))
    }

    #[tracing::instrument(level = "trace", skip(self), fields(kind = ?self.kind))]
    pub(crate) fn encode(&self) -> ConstructResult<EncodedFragment> {
        let inner = self.inner.encode()?;
        let pattern = match &self.kind {
            GroupKind::Capturing => format!("({})", inner.pattern),
            GroupKind::Named(name) => format!("(?P<{}>{})", name, inner.pattern),
            GroupKind::NonCapturing => non_capturing(&inner.pattern),
        };
        Ok(EncodedFragment::atom(pattern))
    }
}

fn validate_group_name(name: &str) -> ConstructResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
    if !valid_start || !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        return Err(ConstructError::InvalidGroupName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn capture(inner: impl Into<Construct>) -> Construct {
    Construct::Group(Group {
        inner: Box::new(inner.into()),
        kind: GroupKind::Capturing,
    })
}

pub fn named_capture(name: &str, inner: impl Into<Construct>) -> ConstructResult<Construct> {
    Group::new(inner, GroupKind::Named(name.to_string())).map(Construct::Group)
}

pub fn non_capturing_group(inner: impl Into<Construct>) -> Construct {
    Construct::Group(Group {
        inner: Box::new(inner.into()),
        kind: GroupKind::NonCapturing,
    })
}
