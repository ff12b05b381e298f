use hashbrown::HashSet;

use super::builder::{CharacterClass, ClassChar};
use super::range::CharRange;
use crate::construct::{ConstructError, ConstructResult, EncodedFragment};

impl CharacterClass {
    /// Render the class as a bracket expression, or as the bare shorthand
    /// token when the class is nothing but an un-negated shorthand.
    #[tracing::instrument(level = "trace", skip(self), fields(chars = self.chars.len() as u64, ranges = self.ranges.len() as u64, negated = self.negated))]
    pub(crate) fn encode(&self) -> ConstructResult<EncodedFragment> {
        if self.is_empty() {
            return Err(ConstructError::EmptyConstruct {
                construct: "character class",
            });
        }
        if let Some(shorthand) = self.is_bare_shorthand() {
            return Ok(EncodedFragment::atom(shorthand.token()));
        }

        let mut out = String::from("[");
        if self.negated {
            out.push('^');
        }
        out.push_str(&encode_body(self));
        out.push(']');
        Ok(EncodedFragment::atom(out))
    }
}

// `^` and `-` are held back to the tail of the body, where neither can be
// read as negation or as a range operator.
fn encode_body(class: &CharacterClass) -> String {
    let mut body = String::new();

    let mut seen_ranges: HashSet<CharRange> = HashSet::new();
    for range in class.ranges.iter().filter(|range| seen_ranges.insert(**range)) {
        push_range_bound(&mut body, range.start());
        body.push('-');
        push_range_bound(&mut body, range.end());
    }

    let mut seen: HashSet<ClassChar> = HashSet::new();
    let mut has_caret = false;
    let mut has_hyphen = false;
    for member in class.all_chars().filter(|member| seen.insert(*member)) {
        match member {
            ClassChar::Shorthand(shorthand) => body.push_str(shorthand.class_token()),
            ClassChar::Literal('^') => has_caret = true,
            ClassChar::Literal('-') => has_hyphen = true,
            ClassChar::Literal(ch) => push_class_char(&mut body, ch),
        }
    }

    if has_caret {
        // a leading caret would negate the class
        if body.is_empty() {
            body.push_str(r"\^");
        } else {
            body.push('^');
        }
    }
    if has_hyphen {
        // `[^-]` is ambiguous across dialects
        if body.is_empty() && class.negated {
            body.push_str(r"\-");
        } else {
            body.push('-');
        }
    }
    body
}

fn push_class_char(out: &mut String, ch: char) {
    // `[`, `&` and `~` open nested classes or set operators in the regex crate
    if matches!(ch, '\\' | ']' | '[' | '&' | '~') {
        out.push('\\');
    }
    out.push(ch);
}

fn push_range_bound(out: &mut String, ch: char) {
    if matches!(ch, '^' | '-') {
        out.push('\\');
        out.push(ch);
    } else {
        push_class_char(out, ch);
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::{
        ANY_CHAR, DIGIT, NON_WORD, WORD, any_of, char_class, char_range, negated,
    };
    use super::*;

    fn pattern(class: &CharacterClass) -> String {
        class.encode().unwrap().pattern
    }

    #[test]
    fn bare_shorthand_takes_fast_path() {
        assert_eq!(pattern(&ANY_CHAR), ".");
        assert_eq!(pattern(&DIGIT), r"\d");
        assert_eq!(pattern(&NON_WORD), r"\W");
    }

    #[test]
    fn negated_shorthand_becomes_bracket_expression() {
        assert_eq!(pattern(&negated(DIGIT)), r"[^\d]");
    }

    #[test]
    fn ranges_precede_literals() {
        let class = char_class([any_of("_").unwrap(), char_range("a", "z").unwrap()]).unwrap();
        assert_eq!(pattern(&class), "[a-z_]");
    }

    #[test]
    fn caret_and_hyphen_are_moved_to_the_end() {
        assert_eq!(pattern(&any_of("-a^b").unwrap()), "[ab^-]");
    }

    #[test]
    fn leading_caret_is_escaped() {
        assert_eq!(pattern(&any_of("^").unwrap()), r"[\^]");
        assert_eq!(pattern(&any_of("-^").unwrap()), r"[\^-]");
    }

    #[test]
    fn leading_caret_is_escaped_after_negation() {
        let class = negated(any_of("^").unwrap());
        assert_eq!(pattern(&class), r"[^\^]");

        let re = regex::Regex::new(&format!("^{}$", pattern(&class))).unwrap();
        assert!(!re.is_match("^"));
        assert!(re.is_match("a"));
    }

    #[test]
    fn negated_lone_hyphen_is_escaped() {
        assert_eq!(pattern(&negated(any_of("-").unwrap())), r"[^\-]");
        assert_eq!(pattern(&any_of("-").unwrap()), "[-]");
    }

    #[test]
    fn bracket_specials_are_escaped() {
        assert_eq!(pattern(&any_of(r"]\[").unwrap()), r"[\]\\\[]");
        assert_eq!(pattern(&any_of("&~").unwrap()), r"[\&\~]");
    }

    #[test]
    fn range_bounds_escape_caret_and_hyphen() {
        assert_eq!(pattern(&char_range("-", "^").unwrap()), r"[\--\^]");
    }

    #[test]
    fn duplicates_across_merge_are_dropped() {
        let class = char_class([
            any_of("ab").unwrap(),
            any_of("ba").unwrap(),
            WORD,
            WORD,
        ])
        .unwrap();
        assert_eq!(pattern(&class), r"[ab\w]");
    }

    #[test]
    fn any_shorthand_inside_bracket_matches_everything() {
        let class = char_class([ANY_CHAR, any_of("x").unwrap()]).unwrap();
        assert_eq!(pattern(&class), r"[\s\Sx]");
    }

    #[test]
    fn empty_class_is_rejected_at_encode() {
        let class = CharacterClass {
            escape: None,
            chars: Vec::new(),
            ranges: Vec::new(),
            negated: true,
        };
        assert!(matches!(
            class.encode(),
            Err(ConstructError::EmptyConstruct { .. })
        ));
    }
}
