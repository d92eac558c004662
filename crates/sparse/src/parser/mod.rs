//! The incremental Sparse parser.
//!
//! [`Parser`] consumes a document one character at a time, in as many chunks
//! as the caller likes, and reports names, values and node boundaries to a
//! [`Handler`] as soon as they are complete. It never looks further ahead
//! than the current character, so chunk boundaries may fall anywhere,
//! including between a `\` and the character it escapes.
//!
//! # Examples
//!
//! ```rust
//! use sparse::{Event, Parser, ParserOptions};
//!
//! let mut parser = Parser::new(Vec::<Event>::new(), ParserOptions::default());
//! parser.feed("colour re").unwrap();
//! parser.feed("d\nsize 3").unwrap();
//! parser.finalize().unwrap();
//! assert_eq!(
//!     parser.into_handler(),
//!     vec![
//!         Event::name("colour"),
//!         Event::value("red"),
//!         Event::name("size"),
//!         Event::value("3"),
//!     ]
//! );
//! ```
//!
//! # Grammar
//!
//! A document is a sequence of statements and node blocks. A statement is an
//! optional name and an optional value separated by spaces or tabs and ended
//! by a line feed or `;`. A node block is a name followed by `{`, any number
//! of statements and blocks, and `}`. `#` starts a comment that runs to the
//! end of the line, and `\` makes the next character literal.

use alloc::{string::String, vec::Vec};

use crate::{
    buffer::TokenBuffer,
    error::{ErrorKind, ParserError},
    escape::decode_escape,
    handler::Handler,
    options::ParserOptions,
    position::Position,
    trace::{debug, trace},
};


/// What the next character means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Between statements; skipping whitespace until a name starts.
    FindName,
    /// After a name; skipping whitespace until a value starts.
    FindValue,
    ReadName,
    ReadValue,
    /// Inside a `#` comment, until the end of the line.
    ReadComment,
}

/// Lifecycle of a parser instance.
#[derive(Debug, Clone, PartialEq)]
enum State {
    Running,
    /// A syntax error was raised; every later call reports it again.
    Failed(ParserError),
    Finished,
}

/// An incremental, event-driven parser for Sparse documents.
///
/// Feed it text with [`feed`](Self::feed) as often as needed, then call
/// [`finalize`](Self::finalize) exactly once. Events go to the [`Handler`]
/// given at construction, which can be taken back with
/// [`into_handler`](Self::into_handler).
///
/// The first error ends parsing for good: events delivered before it are not
/// retracted, and every later call fails with the same error.
#[derive(Debug)]
pub struct Parser<H: Handler> {
    handler: H,
    options: ParserOptions,

    mode: Mode,
    state: State,
    /// Set by `\`; the next character is decoded and taken literally.
    in_escape: bool,
    /// The previous character, after escape decoding.
    last_char: Option<char>,

    buffer: TokenBuffer,
    position: Position,
    /// Where each currently open `{` was seen, innermost last.
    openings: Vec<Position>,
}

impl<H: Handler> Parser<H> {
    /// Creates a parser that reports to `handler`.
    #[must_use]
    pub fn new(handler: H, options: ParserOptions) -> Self {
        Self {
            handler,
            options,
            mode: Mode::FindName,
            state: State::Running,
            in_escape: false,
            last_char: None,
            buffer: TokenBuffer::new(),
            position: Position::default(),
            openings: Vec::new(),
        }
    }

    /// Creates a parser with [`ParserOptions::default`].
    #[must_use]
    pub fn with_default_options(handler: H) -> Self {
        Self::new(handler, ParserOptions::default())
    }

    /// Parses the next chunk of the document.
    ///
    /// # Errors
    ///
    /// Fails if the chunk contains a misplaced `{` or an unmatched `}`, if an
    /// earlier call already failed, or if the parser was finalized.
    pub fn feed(&mut self, chunk: &str) -> Result<(), ParserError> {
        self.feed_chars(chunk.chars())
    }

    /// Parses the next chunk of the document, given as characters.
    ///
    /// # Errors
    ///
    /// Same as [`feed`](Self::feed).
    pub fn feed_chars<I>(&mut self, chars: I) -> Result<(), ParserError>
    where
        I: IntoIterator<Item = char>,
    {
        self.check_running(ErrorKind::ParseAfterFinalize)?;
        for ch in chars {
            if let Err(err) = self.step(ch) {
                debug!(%err, "sparse parse failed");
                self.state = State::Failed(err.clone());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Ends the document.
    ///
    /// A field still being read is completed as if a line feed followed it.
    /// Afterwards the parser accepts no more calls.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::UnclosedNode`], positioned at the innermost
    /// unclosed `{`, if any node is still open. Also fails if an earlier call
    /// failed or the parser was already finalized.
    pub fn finalize(&mut self) -> Result<(), ParserError> {
        self.check_running(ErrorKind::FinalizeAfterFinalize)?;
        self.terminate_field(true);

        if let Some(&opening) = self.openings.last() {
            let err = ParserError::at(ErrorKind::UnclosedNode, opening);
            debug!(%err, depth = self.openings.len(), "sparse document incomplete");
            self.state = State::Failed(err.clone());
            return Err(err);
        }

        debug!(end = %self.position, "sparse parser finalized");
        self.state = State::Finished;
        Ok(())
    }

    /// The handler receiving events.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler receiving events.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the parser and returns its handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// The options the parser was created with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The number of nodes opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.openings.len()
    }

    /// The position of the next character to be read.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether [`finalize`](Self::finalize) has completed successfully.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    fn check_running(&self, misuse: ErrorKind) -> Result<(), ParserError> {
        match &self.state {
            State::Running => Ok(()),
            State::Failed(err) => Err(err.clone()),
            State::Finished => Err(ParserError::misuse(misuse)),
        }
    }

    fn step(&mut self, ch: char) -> Result<(), ParserError> {
        let ch = if self.mode == Mode::ReadComment {
            if ch == '\n' {
                self.mode = Mode::FindName;
            }
            ch
        } else if self.in_escape {
            let decoded = decode_escape(ch);
            self.begin_token();
            self.buffer.push_escaped(decoded);
            self.in_escape = false;
            decoded
        } else {
            match ch {
                ' ' | '\t' => self.whitespace(ch),
                '\n' | ';' | '#' => {
                    self.terminate_field(true);
                    if ch == '#' {
                        self.mode = Mode::ReadComment;
                    }
                }
                '{' => self.open_node()?,
                '}' => self.close_node()?,
                '\\' => self.in_escape = true,
                _ => {
                    self.begin_token();
                    self.buffer.push(ch);
                }
            }
            ch
        };

        self.last_char = Some(ch);
        self.position.advance(ch);
        Ok(())
    }

    /// Moves from searching for a token to reading it.
    #[inline]
    fn begin_token(&mut self) {
        match self.mode {
            Mode::FindName => self.mode = Mode::ReadName,
            Mode::FindValue => self.mode = Mode::ReadValue,
            _ => {}
        }
    }

    fn whitespace(&mut self, ch: char) {
        match self.mode {
            Mode::ReadName => {
                self.emit_name();
                self.mode = Mode::FindValue;
            }
            Mode::ReadValue => {
                if !self.options.consume_whitespace && self.last_char != Some(ch) {
                    self.buffer.push(ch);
                }
            }
            Mode::FindName | Mode::FindValue | Mode::ReadComment => {}
        }
    }

    /// Completes the field being read. With `require_value`, a field that has
    /// a name but no value gets an empty value.
    fn terminate_field(&mut self, require_value: bool) {
        match self.mode {
            Mode::ReadName => {
                self.emit_name();
                if require_value {
                    self.handler.parsed_value(String::new());
                }
            }
            Mode::FindValue if require_value => self.handler.parsed_value(String::new()),
            Mode::ReadValue => {
                let value = self.buffer.take(self.options.trim_trailing_spaces);
                self.handler.parsed_value(value);
            }
            _ => {}
        }
        self.mode = Mode::FindName;
    }

    fn emit_name(&mut self) {
        let name = self.buffer.take(self.options.trim_trailing_spaces);
        self.handler.parsed_name(name);
    }

    fn open_node(&mut self) -> Result<(), ParserError> {
        let mode = self.mode;
        self.terminate_field(false);

        match mode {
            Mode::FindValue | Mode::ReadName => {}
            _ if self.openings.is_empty() && self.options.allow_nameless_roots => {
                self.handler.parsed_name(String::new());
            }
            _ => return Err(ParserError::at(ErrorKind::ExpectedName, self.position)),
        }

        self.handler.node_opened();
        self.openings.push(self.position);
        trace!(at = %self.position, depth = self.openings.len(), "node opened");
        Ok(())
    }

    fn close_node(&mut self) -> Result<(), ParserError> {
        self.terminate_field(true);

        if self.openings.pop().is_none() {
            return Err(ParserError::at(
                ErrorKind::UnexpectedClosingBrace,
                self.position,
            ));
        }

        self.handler.node_closed();
        trace!(at = %self.position, depth = self.openings.len(), "node closed");
        Ok(())
    }
}
