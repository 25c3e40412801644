use crate::buffer::LookaheadBuffer;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::memo::{MemoCache, MemoSpan};
use crate::speculation::Speculation;
use crate::traits::ParseToken;
use common_framework::TokenSource;
use tracing::{debug, trace};

/// Token kind produced by source `S`.
pub type Kind<S> = <<S as TokenSource>::Token as ParseToken>::Kind;

/// Result of a grammar rule over source `S`.
pub type ParseResult<T, S> = Result<T, ParseError<Kind<S>>>;

/// A grammar alternative, tried speculatively by [`Parser::choose`].
pub type Alternative<S> = fn(&mut Parser<S>) -> ParseResult<(), S>;

/// Counters describing the work one parse did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Calls made into the token source.
    pub tokens_pulled: usize,
    pub memo_hits: usize,
    pub memo_misses: usize,
    /// Memo entries alive when the stats were taken.
    pub memo_entries: usize,
    pub truncations: usize,
    /// Tokens discarded from the front of the buffer.
    pub retired: usize,
    /// Largest number of tokens buffered at once.
    pub peak_buffered: usize,
}

/// Parsing context shared by every rule function of a grammar.
///
/// Owns the lookahead buffer, the mark stack and the memo cache for a single
/// parse. Rules are plain functions taking `&mut Parser<S>`; the only state
/// they share is what lives here.
///
/// The parser is in one of two states. While *normal*, the buffer discards
/// consumed tokens as soon as the cursor runs past the last buffered one.
/// While *speculating* (any mark outstanding), nothing is discarded, so a
/// release can always rewind.
pub struct Parser<S>
where
    S: TokenSource,
    S::Token: ParseToken,
{
    buffer: LookaheadBuffer<S>,
    speculation: Speculation,
    memo: MemoCache,
    config: ParserConfig,
    truncations: usize,
}

impl<S> Parser<S>
where
    S: TokenSource,
    S::Token: ParseToken,
{
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: S, config: ParserConfig) -> Self {
        Self {
            buffer: LookaheadBuffer::with_capacity(source, config.buffer_capacity),
            speculation: Speculation::new(),
            memo: MemoCache::new(),
            config,
            truncations: 0,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Token access
    // ------------------------------------------------------------------

    /// Returns the token `i` positions ahead of the cursor (0 = current).
    pub fn peek(&mut self, i: usize) -> ParseResult<&S::Token, S> {
        Ok(self.buffer.peek(i)?)
    }

    pub fn peek_kind(&mut self, i: usize) -> ParseResult<Kind<S>, S> {
        Ok(self.buffer.peek(i)?.kind())
    }

    /// True if the current token is of `kind`. Consumes nothing.
    pub fn check(&mut self, kind: Kind<S>) -> ParseResult<bool, S> {
        Ok(self.peek_kind(0)? == kind)
    }

    /// Stream position of the current token, stable across truncations.
    pub fn absolute_position(&self) -> usize {
        self.buffer.absolute_position()
    }

    /// Consumes the current token.
    ///
    /// When the cursor runs past the last buffered token outside of any
    /// speculation, the buffer is truncated and memo entries recorded against
    /// the old layout are purged before anything else happens.
    pub fn advance(&mut self) -> ParseResult<(), S> {
        self.buffer.advance()?;
        if self.buffer.is_drained() && !self.speculation.is_speculating() {
            let retired = self.buffer.truncate();
            // The buffer was drained, so an entry starting exactly at
            // `retired` holds pre-truncation indices too.
            self.memo.purge_before(retired + 1);
            self.truncations += 1;
        }
        Ok(())
    }

    /// Consumes the current token if it is of `kind`, otherwise fails with a
    /// mismatch.
    pub fn expect(&mut self, kind: Kind<S>) -> ParseResult<(), S> {
        let found = self.peek_kind(0)?;
        if found != kind {
            return Err(self.mismatch(kind));
        }
        self.advance()
    }

    fn mismatch(&mut self, expected: Kind<S>) -> ParseError<Kind<S>> {
        let position = self.absolute_position();
        match self.buffer.peek(0) {
            Ok(token) => ParseError::Mismatch {
                expected,
                found: token.kind(),
                text: token.text().to_string(),
                position,
                location: token.position(),
            },
            Err(err) => err.into(),
        }
    }

    // ------------------------------------------------------------------
    // Speculation
    // ------------------------------------------------------------------

    /// Saves the cursor and locks truncation. Returns the nesting depth.
    pub fn mark(&mut self) -> usize {
        let depth = self.speculation.mark(self.buffer.cursor());
        trace!(depth, position = self.absolute_position(), "mark");
        depth
    }

    /// Pops the innermost mark. With `restore`, the cursor rewinds to where
    /// the mark was taken; otherwise the tokens consumed since are kept.
    ///
    /// Releasing with no outstanding mark is a no-op: the cursor stays put
    /// and truncation stays unlocked.
    pub fn release(&mut self, restore: bool) {
        let Some(mark) = self.speculation.release() else {
            debug!(restore, "release without an outstanding mark ignored");
            return;
        };
        if restore {
            self.buffer.seek(mark.saved_cursor());
        }
        trace!(
            restore,
            depth = self.speculation.depth(),
            position = self.absolute_position(),
            "release"
        );
    }

    /// True while any mark is outstanding.
    pub fn is_speculating(&self) -> bool {
        self.speculation.is_speculating()
    }

    /// Runs `rule` as pure lookahead.
    ///
    /// A mismatch inside `rule` becomes `Ok(false)`; every other error is
    /// passed through. The cursor is always restored, so the caller must run
    /// the winning rule again for real.
    pub fn attempt<F>(&mut self, rule: F) -> ParseResult<bool, S>
    where
        F: FnOnce(&mut Self) -> ParseResult<(), S>,
    {
        Ok(self.speculate(rule)?.is_none())
    }

    /// Like [`attempt`](Self::attempt), but hands back the caught mismatch.
    fn speculate<F>(&mut self, rule: F) -> ParseResult<Option<ParseError<Kind<S>>>, S>
    where
        F: FnOnce(&mut Self) -> ParseResult<(), S>,
    {
        self.mark();
        let outcome = rule(self);
        self.release(true);
        match outcome {
            Ok(()) => Ok(None),
            Err(err) if err.is_mismatch() => {
                trace!(%err, "speculative attempt failed");
                Ok(Some(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Picks the first of `alternatives`, in declared order, whose
    /// speculative attempt succeeds and runs it for real.
    ///
    /// Order matters: when several alternatives match, the earliest wins.
    /// When none does, the error names the token the decision was taken on.
    pub fn choose(
        &mut self,
        rule: &'static str,
        alternatives: &[Alternative<S>],
    ) -> ParseResult<(), S> {
        let mut furthest: Option<ParseError<Kind<S>>> = None;
        for (index, alternative) in alternatives.iter().enumerate() {
            match self.speculate(*alternative)? {
                None => {
                    debug!(
                        rule,
                        alternative = index,
                        position = self.absolute_position(),
                        "alternative chosen"
                    );
                    return alternative(self);
                }
                Some(err) => {
                    if furthest.as_ref().map_or(true, |f| f.position() < err.position()) {
                        furthest = Some(err);
                    }
                }
            }
        }

        let position = self.absolute_position();
        let token = self.buffer.peek(0)?;
        debug!(rule, position, "speculation exhausted");
        Err(ParseError::SpeculationExhausted {
            rule,
            found: token.kind(),
            text: token.text().to_string(),
            position,
            location: token.position(),
            furthest: furthest.map(Box::new),
        })
    }

    // ------------------------------------------------------------------
    // Memoization
    // ------------------------------------------------------------------

    /// Runs `body` as rule `rule`, answering from the memo cache when the
    /// rule already succeeded at this position.
    ///
    /// On a hit the cursor jumps to the recorded end without touching the
    /// token source or any sub-rule. Only successes are recorded, and only
    /// when no truncation happened while `body` ran.
    pub fn memoize<F>(&mut self, rule: &'static str, body: F) -> ParseResult<(), S>
    where
        F: FnOnce(&mut Self) -> ParseResult<(), S>,
    {
        let start = self.absolute_position();
        if self.config.memoize {
            if let Some(span) = self.memo.lookup(rule, start) {
                debug_assert_eq!(span.start, self.buffer.cursor());
                trace!(rule, start, width = span.width(), "memo hit");
                self.buffer.seek(span.end);
                return Ok(());
            }
        }

        let start_index = self.buffer.cursor();
        body(self)?;

        if self.config.memoize && self.buffer.retired() <= start {
            let span = MemoSpan::new(start_index, self.buffer.cursor());
            self.memo.store(rule, start, span);
        }
        Ok(())
    }

    pub fn stats(&self) -> ParseStats {
        ParseStats {
            tokens_pulled: self.buffer.tokens_pulled(),
            memo_hits: self.memo.hits(),
            memo_misses: self.memo.misses(),
            memo_entries: self.memo.len(),
            truncations: self.truncations,
            retired: self.buffer.retired(),
            peak_buffered: self.buffer.peak_len(),
        }
    }
}
