mod errors;
mod options;
mod service;

pub use errors::{RenderError, RenderResult};
pub use options::{RenderOptions, RenderOptionsBuilder, RenderOptionsError};
pub use service::{encode_pattern, render};
