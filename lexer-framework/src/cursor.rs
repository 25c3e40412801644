use common_framework::{Position, TextSlice};
use std::sync::Arc;

/// A cursor for traversing input text during lexing.
///
/// The source is held in an `Arc<str>` so the tokens cut from it can carry
/// [`TextSlice`]s that outlive the cursor itself.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<str>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor from the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a cursor from an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        Self {
            current: 0,
            position: Position::new(),
            buffer,
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        self.position.step(ch);
        Some(ch)
    }

    /// Consumes characters while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> TextSlice
    where
        F: FnMut(char) -> bool,
    {
        let start = self.current;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
        self.slice_from(start)
    }

    /// Returns the text between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> TextSlice {
        TextSlice::new(self.buffer.clone(), start, self.current)
    }

    /// Creates a checkpoint that can be restored later.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            current: self.current,
            position: self.position,
        }
    }

    /// Restores the cursor to a previous checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.current = checkpoint.current;
        self.position = checkpoint.position;
    }
}

/// A saved cursor location, used to undo a lexing rule that did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    current: usize,
    position: Position,
}

impl Checkpoint {
    /// Byte offset saved by this checkpoint.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Source position saved by this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }
}
