use alloc::string::String;

/// Scratch buffer for the name or value currently being read.
///
/// Alongside the characters it counts the run of literal spaces (U+0020) at
/// the end of the buffer. Any other character, a tab included, ends the run,
/// so trimming on [`take`](Self::take) only ever removes spaces.
#[derive(Debug, Default)]
pub(crate) struct TokenBuffer {
    data: String,
    trailing_spaces: usize,
}

impl TokenBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends an unescaped character.
    #[inline]
    pub(crate) fn push(&mut self, ch: char) {
        if ch == ' ' {
            self.trailing_spaces += 1;
        } else {
            self.trailing_spaces = 0;
        }
        self.data.push(ch);
    }

    /// Appends a character produced by an escape. Escaped characters are
    /// content, so an escaped space is never part of a trimmable run.
    #[inline]
    pub(crate) fn push_escaped(&mut self, ch: char) {
        self.trailing_spaces = 0;
        self.data.push(ch);
    }

    /// Returns the buffered token and clears the buffer. When `trim` is set,
    /// the trailing run of spaces is dropped from the returned token.
    pub(crate) fn take(&mut self, trim: bool) -> String {
        if trim && self.trailing_spaces > 0 {
            // Spaces are one byte each, so the cut is on a char boundary.
            let keep = self.data.len() - self.trailing_spaces;
            self.data.truncate(keep);
        }
        self.trailing_spaces = 0;
        core::mem::take(&mut self.data)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
