use alloc::{string::String, vec::Vec};

use crate::{Event, Parser, ParserError, ParserOptions};

pub(crate) fn events(input: &str) -> Vec<Event> {
    events_with(input, ParserOptions::default())
}

pub(crate) fn events_with(input: &str, options: ParserOptions) -> Vec<Event> {
    crate::parse_events(input, options).unwrap()
}

pub(crate) fn error(input: &str) -> ParserError {
    error_with(input, ParserOptions::default())
}

pub(crate) fn error_with(input: &str, options: ParserOptions) -> ParserError {
    crate::parse_events(input, options).unwrap_err()
}

/// Splits `input` into chunks whose character lengths are taken in turn from
/// `sizes` (each at least one). Whatever is left over forms the final chunk.
pub(crate) fn split_chars(input: &str, sizes: &[usize]) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut chunks = Vec::new();
    let mut idx = 0;
    for &size in sizes {
        let remaining = chars.len() - idx;
        if remaining == 0 {
            break;
        }
        let end = idx + 1 + size % remaining;
        chunks.push(chars[idx..end].iter().collect());
        idx = end;
    }
    if idx < chars.len() {
        chunks.push(chars[idx..].iter().collect());
    }
    chunks
}

/// Feeds `chunks` in order and finalizes, returning the events or the first
/// error.
pub(crate) fn parse_chunks<S: AsRef<str>>(
    chunks: &[S],
    options: ParserOptions,
) -> Result<Vec<Event>, ParserError> {
    let mut parser = Parser::new(Vec::new(), options);
    for chunk in chunks {
        parser.feed(chunk.as_ref())?;
    }
    parser.finalize()?;
    Ok(parser.into_handler())
}

#[test]
fn split_chars_covers_input() {
    let input = "añb{c}d";
    let chunks = split_chars(input, &[0, 1, 7]);
    assert_eq!(chunks, ["a", "ñb", "{c}d"]);
    assert_eq!(chunks.concat(), input);
}
