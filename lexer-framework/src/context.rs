use crate::cursor::{Checkpoint, Cursor};
use common_framework::{Position, TextSlice};
use std::sync::Arc;

/// Context for lexing operations.
///
/// Rules only see the context, never a concrete lexer, so the same rule set
/// can run over any implementation that hands out a [`Cursor`].
pub trait LexContext {
    /// Returns a reference to the cursor.
    fn cursor(&self) -> &Cursor;

    /// Returns a mutable reference to the cursor.
    fn cursor_mut(&mut self) -> &mut Cursor;

    /// Returns the current position.
    fn position(&self) -> Position {
        self.cursor().position()
    }

    /// Returns the current byte offset.
    fn offset(&self) -> usize {
        self.cursor().offset()
    }

    /// Returns true if at end of input.
    fn is_eof(&self) -> bool {
        self.cursor().is_eof()
    }

    /// Peeks at the next character without advancing.
    fn peek(&self) -> Option<char> {
        self.cursor().peek()
    }

    /// Advances the cursor and returns the character.
    fn advance(&mut self) -> Option<char> {
        self.cursor_mut().advance()
    }

    /// Consumes characters while the predicate returns true.
    fn consume_while<F>(&mut self, predicate: F) -> TextSlice
    where
        F: FnMut(char) -> bool,
        Self: Sized,
    {
        self.cursor_mut().consume_while(predicate)
    }

    /// Returns the text consumed since byte offset `start`.
    fn slice_from(&self, start: usize) -> TextSlice {
        self.cursor().slice_from(start)
    }

    /// Creates a checkpoint of the current state.
    fn checkpoint(&self) -> Checkpoint {
        self.cursor().checkpoint()
    }

    /// Restores the cursor to a checkpoint.
    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor_mut().restore(checkpoint);
    }
}

/// A simple default context over an in-memory string.
#[derive(Debug, Clone)]
pub struct DefaultContext {
    cursor: Cursor,
}

impl DefaultContext {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    pub fn with_arc(input: Arc<str>) -> Self {
        Self {
            cursor: Cursor::with_arc(input),
        }
    }
}

impl LexContext for DefaultContext {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}
