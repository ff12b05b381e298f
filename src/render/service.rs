use regex::Regex;

use super::{RenderError, RenderOptions, RenderResult};
use crate::construct::{Construct, ConstructResult, Precedence, embed};

/// Encode `construct` and keep only the pattern text.
pub fn encode_pattern(construct: &Construct) -> ConstructResult<String> {
    construct.encode().map(|fragment| fragment.pattern)
}

/// Produce the final pattern string for `construct` under `options`.
#[tracing::instrument(level = "trace", skip(construct, options), fields(anchored = options.anchored, case_insensitive = options.case_insensitive))]
pub fn render(construct: &Construct, options: &RenderOptions) -> RenderResult<String> {
    options.validate()?;

    if let Some(depth) = construct.exceeds_depth(options.max_depth) {
        return Err(RenderError::NestingTooDeep {
            depth,
            max: options.max_depth,
        });
    }

    let fragment = construct.encode()?;

    let mut pattern = String::new();
    if options.case_insensitive {
        pattern.push_str("(?i)");
    }
    if options.anchored {
        // `^a|b$` would anchor each side separately
        pattern.push('^');
        pattern.push_str(&embed(&fragment, Precedence::Sequence));
        pattern.push('$');
    } else {
        pattern.push_str(&fragment.pattern);
    }

    if options.validate_syntax
        && let Err(err) = Regex::new(&pattern)
    {
        return Err(RenderError::InvalidSyntax {
            pattern,
            message: err.to_string(),
        });
    }

    tracing::event!(tracing::Level::TRACE, operation="render", max_depth=options.max_depth as u64, pattern=%pattern);
    Ok(pattern)
}
