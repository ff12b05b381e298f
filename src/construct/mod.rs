mod atom;
mod error;
mod node;
mod precedence;

pub use atom::{Anchor, Literal};
pub use error::{ConstructError, ConstructResult};
pub use node::{Construct, anchor, literal};
pub use precedence::{EncodedFragment, Precedence, needs_group};

pub(crate) use precedence::{embed, non_capturing};
