use regex::Regex;
use regex_compose_rs::{
    Anchor, Construct, ConstructError, DIGIT, EncodedFragment, Precedence, Sequence, WORD, anchor,
    any_of, capture, choice_of, literal, needs_group, one_or_more, optional, sequence,
    zero_or_more,
};

fn encode(construct: impl Into<Construct>) -> EncodedFragment {
    construct.into().encode().expect("construct should encode")
}

#[test]
fn choice_of_sequences_joins_with_bar() {
    let choice = choice_of([vec![literal("a"), literal("b")], vec![literal("c")]])
        .expect("alternatives supplied");
    let fragment = encode(choice);
    assert_eq!(fragment.pattern, "ab|c");
    assert_eq!(fragment.precedence, Precedence::Disjunction);
}

#[test]
fn alternation_inside_sequence_is_grouped() {
    let choice = choice_of([literal("a"), literal("b")]).expect("alternatives supplied");
    let fragment = encode(sequence([Construct::from(choice), literal("c")]));
    assert_eq!(fragment.pattern, "(?:a|b)c");
    assert_eq!(fragment.precedence, Precedence::Sequence);
}

#[test]
fn alternation_as_sole_sequence_element_is_not_grouped() {
    let choice = choice_of([literal("a"), literal("b")]).expect("alternatives supplied");
    let fragment = encode(sequence([Construct::from(choice)]));
    assert_eq!(fragment.pattern, "a|b");
    assert_eq!(fragment.precedence, Precedence::Disjunction);
}

#[test]
fn single_alternative_passes_through_unchanged() {
    let parts = || vec![literal("x"), Construct::from(DIGIT), literal("yz")];
    let direct = encode(Sequence::new(parts()));
    let via_choice = encode(choice_of([parts()]).expect("alternative supplied"));
    assert_eq!(direct, via_choice);
    assert!(!via_choice.pattern.contains('|'));
}

#[test]
fn single_atom_alternative_keeps_atom_precedence() {
    let fragment = encode(choice_of([vec![literal("a")]]).expect("alternative supplied"));
    assert_eq!(fragment.pattern, "a");
    assert_eq!(fragment.precedence, Precedence::Atom);
    assert!(!needs_group(&fragment, Precedence::Sequence));
}

#[test]
fn nested_single_choices_of_atoms_stay_atoms() {
    let inner = choice_of([literal("q")]).expect("alternative supplied");
    let outer = choice_of([Construct::from(inner)]).expect("alternative supplied");
    let fragment = encode(outer);
    assert_eq!(fragment.precedence, Precedence::Atom);
    assert!(!needs_group(&fragment, Precedence::Sequence));
}

#[test]
fn empty_choice_is_rejected() {
    let err = choice_of(Vec::<Sequence>::new()).expect_err("no alternatives");
    assert!(matches!(err, ConstructError::EmptyConstruct { .. }));
}

#[test]
fn empty_sequence_is_an_empty_atom() {
    let fragment = encode(Sequence::default());
    assert_eq!(fragment, EncodedFragment::atom(""));
}

#[test]
fn sequence_does_not_group_quantified_or_sequence_children() {
    let fragment = encode(sequence([
        one_or_more(DIGIT),
        literal("ab"),
        optional(literal("-")),
    ]));
    assert_eq!(fragment.pattern, r"\d+ab\-?");
}

#[test]
fn literals_are_escaped() {
    assert_eq!(encode(literal("1.5+x")).pattern, r"1\.5\+x");
    assert_eq!(encode(literal("(")).precedence, Precedence::Atom);
}

#[test]
fn anchors_are_atoms() {
    let fragment = encode(sequence([
        anchor(Anchor::StartOfText),
        literal("id"),
        anchor(Anchor::WordBoundary),
    ]));
    assert_eq!(fragment.pattern, r"^id\b");
}

#[test]
fn alternatives_are_never_individually_grouped() {
    let left = choice_of([literal("a"), literal("b")]).expect("alternatives supplied");
    let outer = choice_of([Construct::from(left), literal("c")]).expect("alternatives supplied");
    assert_eq!(encode(outer).pattern, "a|b|c");
}

#[test]
fn composed_pattern_matches_what_it_describes() {
    // identifier, optional "=value" with a choice of digits or quoted word
    let ident = sequence([
        Construct::from(any_of("_").expect("non-empty")),
        zero_or_more(WORD),
    ]);
    let value = choice_of([
        vec![one_or_more(DIGIT)],
        vec![literal("\""), one_or_more(WORD), literal("\"")],
    ])
    .expect("alternatives supplied");
    let assignment = sequence([
        ident,
        optional(sequence([literal("="), capture(value)])),
    ]);

    let pattern = encode(assignment).pattern;
    assert_eq!(pattern, r#"[_]\w*(?:=(\d+|"\w+"))?"#);

    let re = Regex::new(&format!("^{pattern}$")).expect("pattern should compile");
    assert!(re.is_match("_x"));
    assert!(re.is_match("_x=42"));
    assert!(re.is_match("_x=\"ok\""));
    assert!(!re.is_match("_x="));
    assert!(!re.is_match("x=1"));
}

#[test]
fn grouping_preserves_alternation_scope() {
    let choice = choice_of([literal("cat"), literal("dog")]).expect("alternatives supplied");
    let pattern = encode(sequence([literal("hot"), Construct::from(choice)])).pattern;
    assert_eq!(pattern, "hot(?:cat|dog)");

    let re = Regex::new(&format!("^{pattern}$")).expect("pattern should compile");
    assert!(re.is_match("hotdog"));
    assert!(!re.is_match("dog"));
}
