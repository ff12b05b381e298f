use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap the pattern in `^...$`.
    pub anchored: bool,
    /// Prefix the pattern with `(?i)`.
    pub case_insensitive: bool,
    /// Run the rendered pattern through the `regex` parser before returning it.
    pub validate_syntax: bool,
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            anchored: false,
            case_insensitive: false,
            validate_syntax: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RenderOptionsError> {
        if self.max_depth == 0 {
            return Err(RenderOptionsError::MaxDepthInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn anchored(mut self, value: bool) -> Self {
        self.options.anchored = value;
        self
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.options.case_insensitive = value;
        self
    }

    pub fn validate_syntax(mut self, value: bool) -> Self {
        self.options.validate_syntax = value;
        self
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.options.max_depth = value;
        self
    }

    pub fn build(self) -> Result<RenderOptions, RenderOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderOptionsError {
    #[error("max_depth must be at least 1 (got {provided})")]
    MaxDepthInvalid { provided: usize },
}
