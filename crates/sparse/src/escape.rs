//! Backslash escape decoding.
//!
//! An escape is always exactly one character after the `\`. The characters
//! `n r a b f t 0` map to control characters; every other character stands
//! for itself, which is how `\{`, `\}`, `\#`, `\;`, `\\` and an escaped space
//! become literal content.

/// Decodes the character that followed a backslash.
#[inline]
#[must_use]
pub(crate) const fn decode_escape(ch: char) -> char {
    match ch {
        'n' => '\n',
        'r' => '\r',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::decode_escape;

    #[rstest]
    #[case('n', '\n')]
    #[case('r', '\r')]
    #[case('a', '\u{07}')]
    #[case('b', '\u{08}')]
    #[case('f', '\u{0C}')]
    #[case('t', '\t')]
    #[case('0', '\0')]
    fn control_escapes(#[case] input: char, #[case] expected: char) {
        assert_eq!(decode_escape(input), expected);
    }

    #[rstest]
    #[case('{')]
    #[case('}')]
    #[case('#')]
    #[case(';')]
    #[case('\\')]
    #[case(' ')]
    #[case('x')]
    #[case('é')]
    fn everything_else_passes_through(#[case] input: char) {
        assert_eq!(decode_escape(input), input);
    }
}
