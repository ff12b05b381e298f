use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("{construct} must not be empty")]
    EmptyConstruct { construct: &'static str },
    #[error("range {bound} bound '{value}' must be exactly one character")]
    InvalidRangeArgument { bound: &'static str, value: String },
    #[error("range start '{start}' sorts after end '{end}'")]
    InvalidRangeOrder { start: char, end: char },
    #[error("class operand {index} is negated; negate the merged class instead")]
    NegatedOperandNotAllowed { index: usize },
    #[error("quantifier minimum {min} exceeds maximum {max}")]
    InvalidQuantifierBounds { min: u32, max: u32 },
    #[error("group name '{name}' must start with a letter or underscore and contain only word characters")]
    InvalidGroupName { name: String },
}

pub type ConstructResult<T> = Result<T, ConstructError>;
