use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use super::utils::{parse_chunks, split_chars};
use crate::ParserOptions;

/// Text drawn mostly from characters that mean something to the parser, so
/// random inputs exercise every mode transition and error path.
#[derive(Debug, Clone)]
struct SyntaxSoup(String);

const ALPHABET: &[char] = &[
    'a', 'b', 'z', 'é', ' ', ' ', '\t', '\n', '\n', ';', '#', '{', '{', '}', '}', '\\', 'n', 't',
];

impl Arbitrary for SyntaxSoup {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() * 2 + 1);
        let text = (0..len)
            .map(|_| *g.choose(ALPHABET).unwrap_or(&'a'))
            .collect();
        SyntaxSoup(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new((0..chars.len()).rev().map(move |skip| {
            SyntaxSoup(
                chars
                    .iter()
                    .enumerate()
                    .filter_map(|(i, c)| (i != skip).then_some(*c))
                    .collect(),
            )
        }))
    }
}

impl Arbitrary for ParserOptionsArb {
    fn arbitrary(g: &mut Gen) -> Self {
        ParserOptionsArb(ParserOptions {
            allow_nameless_roots: bool::arbitrary(g),
            trim_trailing_spaces: bool::arbitrary(g),
            consume_whitespace: bool::arbitrary(g),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct ParserOptionsArb(ParserOptions);

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: feeding a document in arbitrarily sized chunks produces exactly
/// the events, or exactly the error, that feeding it whole does.
#[test]
fn partition_invariance_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: SyntaxSoup, splits: Vec<usize>, options: ParserOptionsArb) -> bool {
        let whole = parse_chunks(&[src.0.as_str()], options.0);
        let chunks = split_chars(&src.0, &splits);
        let chunked = parse_chunks(&chunks, options.0);
        whole == chunked
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(SyntaxSoup, Vec<usize>, ParserOptionsArb) -> bool);
}

/// Property: arbitrary unicode text behaves the same one character at a time.
#[test]
fn single_char_chunks_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: String) -> bool {
        let options = ParserOptions::default();
        let whole = parse_chunks(&[src.as_str()], options);
        let singles: Vec<String> = src.chars().map(String::from).collect();
        whole == parse_chunks(&singles, options)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: a successful parse leaves balanced node events, and every name
/// is eventually followed by a value or a node opening.
#[test]
fn balanced_events_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(src: SyntaxSoup, options: ParserOptionsArb) -> bool {
        let Ok(events) = parse_chunks(&[src.0.as_str()], options.0) else {
            return true;
        };
        let mut depth: usize = 0;
        let mut pending_name = false;
        for event in &events {
            match event {
                crate::Event::Name(_) => {
                    if pending_name {
                        return false;
                    }
                    pending_name = true;
                }
                crate::Event::Value(_) | crate::Event::NodeOpen => {
                    if !pending_name {
                        return false;
                    }
                    pending_name = false;
                    if *event == crate::Event::NodeOpen {
                        depth += 1;
                    }
                }
                crate::Event::NodeClose => {
                    if pending_name || depth == 0 {
                        return false;
                    }
                    depth -= 1;
                }
            }
        }
        depth == 0 && !pending_name
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(SyntaxSoup, ParserOptionsArb) -> bool);
}
