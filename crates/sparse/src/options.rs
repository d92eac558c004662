/// Configuration options for the Sparse parser.
///
/// Options are copied into the parser when it is created and cannot change
/// while it runs.
///
/// # Examples
///
/// ```rust
/// use sparse::{Event, Parser, ParserOptions};
///
/// let options = ParserOptions {
///     allow_nameless_roots: true,
///     ..Default::default()
/// };
/// let mut parser = Parser::new(Vec::<Event>::new(), options);
/// parser.feed("{ x y }\n").unwrap();
/// parser.finalize().unwrap();
/// assert_eq!(parser.handler()[0], Event::name(""));
/// ```
///
/// # Default
///
/// Trailing spaces are trimmed; every other option is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether a `{` may appear at the top level without a preceding name.
    ///
    /// Such a node is reported to the handler with an empty name. Nested
    /// nodes always need a name.
    ///
    /// ```text
    /// {
    ///     x y
    /// }
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_nameless_roots: bool,

    /// Whether to strip a trailing run of spaces (U+0020) from names and
    /// values.
    ///
    /// Only plain spaces are stripped. A trailing tab, or a space written as
    /// `\ `, is kept as content.
    ///
    /// # Default
    ///
    /// `true`
    pub trim_trailing_spaces: bool,

    /// Whether to discard whitespace inside values entirely.
    ///
    /// When `false`, whitespace inside a value is kept, except that a space or
    /// tab directly following the same character is dropped (`"a  b"` reads
    /// as `"a b"`). When `true`, `"a  b"` reads as `"ab"`.
    ///
    /// # Default
    ///
    /// `false`
    pub consume_whitespace: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_nameless_roots: false,
            trim_trailing_spaces: true,
            consume_whitespace: false,
        }
    }
}

impl ParserOptions {
    /// Sets [`allow_nameless_roots`](Self::allow_nameless_roots).
    #[must_use]
    pub const fn with_nameless_roots(mut self, allow: bool) -> Self {
        self.allow_nameless_roots = allow;
        self
    }

    /// Sets [`trim_trailing_spaces`](Self::trim_trailing_spaces).
    #[must_use]
    pub const fn with_trailing_space_trim(mut self, trim: bool) -> Self {
        self.trim_trailing_spaces = trim;
        self
    }

    /// Sets [`consume_whitespace`](Self::consume_whitespace).
    #[must_use]
    pub const fn with_consume_whitespace(mut self, consume: bool) -> Self {
        self.consume_whitespace = consume;
        self
    }
}
