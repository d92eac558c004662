#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sparse::{Event, Parser, ParserError, ParserOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u64,
    text: String,
}

fn run<S: AsRef<str>>(chunks: &[S], options: ParserOptions) -> Result<Vec<Event>, ParserError> {
    let mut parser = Parser::new(Vec::new(), options);
    for chunk in chunks {
        parser.feed(chunk.as_ref())?;
    }
    parser.finalize()?;
    assert_eq!(parser.depth(), 0);
    assert!(parser.is_finished());
    Ok(parser.into_handler())
}

/// Split `text` into chunks of random character length, never inside a
/// UTF-8 sequence.
fn split_into_chunks(text: &str, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let size = rng.random_range(1..=chars.len() - start);
        chunks.push(chars[start..start + size].iter().collect());
        start += size;
    }
    chunks
}

fuzz_target!(|input: Input| {
    let options = ParserOptions {
        allow_nameless_roots: input.flags & 1 != 0,
        trim_trailing_spaces: input.flags & 2 != 0,
        consume_whitespace: input.flags & 4 != 0,
    };

    let whole = run(&[input.text.as_str()], options);
    let chunked = run(&split_into_chunks(&input.text, input.split_seed), options);
    assert_eq!(whole, chunked);

    if let Err(err) = whole {
        assert!(err.kind().is_syntax());
        assert!(err.position().is_some());
    }
});
