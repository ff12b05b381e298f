use crate::construct::{Construct, ConstructResult, EncodedFragment, Precedence, embed};

/// Concatenation of constructs, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<Construct>,
}

impl Sequence {
    pub fn new(items: Vec<Construct>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Construct] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn take_items(&mut self) -> Vec<Construct> {
        std::mem::take(&mut self.items)
    }

    #[tracing::instrument(level = "trace", skip(self), fields(items = self.items.len() as u64))]
    pub(crate) fn encode(&self) -> ConstructResult<EncodedFragment> {
        match self.items.as_slice() {
            [] => Ok(EncodedFragment::empty()),
            [only] => only.encode(),
            items => {
                let mut pattern = String::new();
                for item in items {
                    let fragment = item.encode()?;
                    pattern.push_str(&embed(&fragment, Precedence::Sequence));
                }
                Ok(EncodedFragment::new(pattern, Precedence::Sequence))
            }
        }
    }
}

impl From<Vec<Construct>> for Sequence {
    fn from(items: Vec<Construct>) -> Self {
        Self::new(items)
    }
}

impl From<Construct> for Sequence {
    fn from(item: Construct) -> Self {
        Self::new(vec![item])
    }
}

impl<const N: usize> From<[Construct; N]> for Sequence {
    fn from(items: [Construct; N]) -> Self {
        Self::new(items.into())
    }
}

impl FromIterator<Construct> for Sequence {
    fn from_iter<T: IntoIterator<Item = Construct>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub fn sequence<I, C>(items: I) -> Construct
where
    I: IntoIterator<Item = C>,
    C: Into<Construct>,
{
    Construct::Sequence(items.into_iter().map(Into::into).collect())
}
