use crate::traits::ParseToken;
use common_framework::{LexError, TokenSource};
use tracing::trace;

/// A growable window of tokens pulled from a [`TokenSource`] on demand.
///
/// The window supports arbitrarily deep lookahead and backtracking: tokens
/// stay buffered until the owner calls [`truncate`](Self::truncate), which
/// discards everything before the cursor. Positions handed out by
/// [`absolute_position`](Self::absolute_position) count retired tokens too,
/// so they stay meaningful across truncations:
///
/// `absolute_position == retired + cursor`
pub struct LookaheadBuffer<S>
where
    S: TokenSource,
{
    source: S,
    tokens: Vec<S::Token>,
    /// Index of the current token in `tokens`.
    cursor: usize,
    /// Tokens discarded from the front since parsing started.
    retired: usize,
    /// End-of-input token, once the source produced it.
    eof: Option<S::Token>,
    pulled: usize,
    peak: usize,
}

impl<S> LookaheadBuffer<S>
where
    S: TokenSource,
    S::Token: ParseToken,
{
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, 16)
    }

    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            tokens: Vec::with_capacity(capacity),
            cursor: 0,
            retired: 0,
            eof: None,
            pulled: 0,
            peak: 0,
        }
    }

    /// Makes sure `n` tokens are buffered from the cursor on.
    fn sync(&mut self, n: usize) -> Result<(), LexError> {
        while self.tokens.len() < self.cursor + n {
            let token = if let Some(eof) = &self.eof {
                eof.clone()
            } else {
                self.pull()?
            };
            self.tokens.push(token);
        }
        self.peak = self.peak.max(self.tokens.len());
        Ok(())
    }

    fn pull(&mut self) -> Result<S::Token, LexError> {
        let token = self.source.next_token()?;
        self.pulled += 1;
        trace!(
            position = self.retired + self.tokens.len(),
            ?token,
            "pulled token"
        );
        if token.is_eof() {
            self.eof = Some(token.clone());
        }
        Ok(token)
    }

    /// Returns the token `i` positions ahead of the cursor (0 = current).
    pub fn peek(&mut self, i: usize) -> Result<&S::Token, LexError> {
        self.sync(i + 1)?;
        Ok(&self.tokens[self.cursor + i])
    }

    /// Moves the cursor one token forward.
    pub fn advance(&mut self) -> Result<(), LexError> {
        self.sync(1)?;
        self.cursor += 1;
        Ok(())
    }

    /// True when the cursor sits past the last buffered token.
    pub fn is_drained(&self) -> bool {
        self.cursor == self.tokens.len()
    }

    /// Discards every token before the cursor and returns the new retired
    /// count. The caller must not hold any local index taken before the call.
    pub fn truncate(&mut self) -> usize {
        let discarded = self.cursor;
        self.tokens.drain(..discarded);
        self.retired += discarded;
        self.cursor = 0;
        trace!(discarded, retired = self.retired, "truncated lookahead buffer");
        self.retired
    }

    /// Moves the cursor to a local index. Only indices taken since the last
    /// truncation are valid.
    pub fn seek(&mut self, index: usize) {
        debug_assert!(
            index <= self.tokens.len(),
            "seek to {} past buffered {}",
            index,
            self.tokens.len()
        );
        self.cursor = index;
    }

    /// Local index of the current token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of tokens discarded from the front so far.
    pub fn retired(&self) -> usize {
        self.retired
    }

    /// Stream position of the current token, stable across truncations.
    pub fn absolute_position(&self) -> usize {
        self.retired + self.cursor
    }

    /// Number of tokens currently held.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of calls made into the token source.
    pub fn tokens_pulled(&self) -> usize {
        self.pulled
    }

    /// Largest number of tokens held at once.
    pub fn peak_len(&self) -> usize {
        self.peak
    }
}
