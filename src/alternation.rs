use crate::construct::{ConstructError, ConstructResult, EncodedFragment, Precedence};
use crate::sequence::Sequence;

/// A choice between one or more sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternation {
    alternatives: Vec<Sequence>,
}

impl Alternation {
    pub fn alternatives(&self) -> &[Sequence] {
        &self.alternatives
    }

    pub(crate) fn take_alternatives(&mut self) -> Vec<Sequence> {
        std::mem::take(&mut self.alternatives)
    }

    /// Alternatives are joined bare; grouping is left to whoever embeds the
    /// result.
    #[tracing::instrument(level = "trace", skip(self), fields(alternatives = self.alternatives.len() as u64))]
    pub(crate) fn encode(&self) -> ConstructResult<EncodedFragment> {
        match self.alternatives.as_slice() {
            [] => Err(ConstructError::EmptyConstruct {
                construct: "alternation",
            }),
            [only] => only.encode(),
            alternatives => {
                let patterns = alternatives
                    .iter()
                    .map(|alternative| alternative.encode().map(EncodedFragment::into_pattern))
                    .collect::<ConstructResult<Vec<_>>>()?;
                Ok(EncodedFragment::new(
                    patterns.join("|"),
                    Precedence::Disjunction,
                ))
            }
        }
    }
}

/// Choice between `alternatives`; at least one is required.
pub fn choice_of<I, S>(alternatives: I) -> ConstructResult<Alternation>
where
    I: IntoIterator<Item = S>,
    S: Into<Sequence>,
{
    let alternatives: Vec<Sequence> = alternatives.into_iter().map(Into::into).collect();
    if alternatives.is_empty() {
        return Err(ConstructError::EmptyConstruct {
            construct: "alternation",
        });
    }
    Ok(Alternation { alternatives })
}
