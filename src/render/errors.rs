use thiserror::Error;

use super::options::RenderOptionsError;
use crate::construct::ConstructError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Construct(#[from] ConstructError),
    #[error(transparent)]
    Options(#[from] RenderOptionsError),
    #[error("construct nesting reaches depth {depth}, past the limit of {max}")]
    NestingTooDeep { depth: usize, max: usize },
    #[error("rendered pattern '{pattern}' is not valid regex syntax: {message}")]
    InvalidSyntax { pattern: String, message: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
