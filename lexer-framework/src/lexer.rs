use crate::context::{DefaultContext, LexContext};
use crate::traits::{LexToken, Lexeme, LexingRule};
use common_framework::{LexError, TokenSource};
use std::cmp::Reverse;
use tracing::{debug, trace};

/// A lexer that applies rules in priority order.
pub struct Lexer<Ctx, Tok>
where
    Ctx: LexContext,
{
    context: Ctx,
    rules: Vec<Box<dyn LexingRule<Ctx, Tok>>>,
    /// Set once the iterator has yielded end of input or an error.
    done: bool,
}

impl<Ctx, Tok> Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    /// Creates a new lexer with the given context and rules.
    pub fn new(context: Ctx, rules: Vec<Box<dyn LexingRule<Ctx, Tok>>>) -> Self {
        // Highest priority first; the sort is stable so equal priorities keep
        // their declared order.
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        Self {
            context,
            rules: sorted_rules,
            done: false,
        }
    }

    /// Returns a reference to the context.
    pub fn context(&self) -> &Ctx {
        &self.context
    }

    /// Returns a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    /// Produces the next token, skipping trivia.
    ///
    /// At end of input this returns the end-of-input token, and keeps
    /// returning it on every further call.
    pub fn next_token(&mut self) -> Result<Tok, LexError> {
        loop {
            if self.context.is_eof() {
                let position = self.context.position();
                let text = self.context.slice_from(self.context.offset());
                return Ok(Tok::eof(position, text));
            }

            match self.next_lexeme()? {
                Lexeme::Token(token) => {
                    trace!(?token, "lexed token");
                    return Ok(token);
                }
                Lexeme::Skip => continue,
            }
        }
    }

    /// Runs one round of rules at the cursor.
    fn next_lexeme(&mut self) -> Result<Lexeme<Tok>, LexError> {
        let first_char = self.context.peek();
        let position = self.context.position();
        let offset_before = self.context.offset();

        for rule in &mut self.rules {
            if let Some(false) = rule.quick_check(first_char) {
                continue;
            }

            let checkpoint = self.context.checkpoint();
            if let Some(lexeme) = rule.try_match(&mut self.context) {
                if self.context.offset() == offset_before {
                    debug!(%position, "rule matched without consuming input");
                    return Err(LexError::NoProgress { position });
                }
                return Ok(lexeme);
            }
            self.context.restore(checkpoint);
        }

        let err = match first_char {
            Some(ch) => LexError::InvalidCharacter { ch, position },
            None => LexError::NoProgress { position },
        };
        debug!(%err, "no lexing rule matched");
        Err(err)
    }

    /// Collects every token before end of input.
    pub fn tokenize(&mut self) -> Result<Vec<Tok>, LexError> {
        self.collect()
    }
}

impl<Tok> Lexer<DefaultContext, Tok>
where
    Tok: LexToken,
{
    /// Creates a new lexer with a default context from an input string.
    pub fn from_str<S: Into<String>>(
        input: S,
        rules: Vec<Box<dyn LexingRule<DefaultContext, Tok>>>,
    ) -> Self {
        Self::new(DefaultContext::new(input), rules)
    }
}

impl<Ctx, Tok> TokenSource for Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    type Token = Tok;

    fn next_token(&mut self) -> Result<Tok, LexError> {
        Lexer::next_token(self)
    }
}

/// Yields every token up to, but not including, end of input. Stops after
/// the first error.
impl<Ctx, Tok> Iterator for Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    type Item = Result<Tok, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
