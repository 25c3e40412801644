//! Character-level rules for the list language.

use crate::token::{Token, TokenKind};
use lexer_framework::{DefaultContext, LexContext, Lexeme, Lexer, LexingRule};

/// Lexer over an in-memory string, producing list tokens.
pub type ListLexer = Lexer<DefaultContext, Token>;

pub type ListRules = Vec<Box<dyn LexingRule<DefaultContext, Token>>>;

/// Skips any run of whitespace, newlines included.
pub struct WhitespaceRule;

impl<Ctx> LexingRule<Ctx, Token> for WhitespaceRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<Token>> {
        let skipped = ctx.consume_while(char::is_whitespace);
        (!skipped.is_empty()).then_some(Lexeme::Skip)
    }

    fn priority(&self) -> i32 {
        2
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char?.is_whitespace())
    }
}

/// Single-character punctuation: `[`, `]`, `,` and `=`.
pub struct PunctuationRule;

impl PunctuationRule {
    fn kind_of(ch: char) -> Option<TokenKind> {
        match ch {
            '[' => Some(TokenKind::LBrack),
            ']' => Some(TokenKind::RBrack),
            ',' => Some(TokenKind::Comma),
            '=' => Some(TokenKind::Equals),
            _ => None,
        }
    }
}

impl<Ctx> LexingRule<Ctx, Token> for PunctuationRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<Token>> {
        let kind = Self::kind_of(ctx.peek()?)?;
        let position = ctx.position();
        let start = ctx.offset();
        ctx.advance();

        Some(Lexeme::Token(Token {
            kind,
            text: ctx.slice_from(start),
            position,
        }))
    }

    fn priority(&self) -> i32 {
        1
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(Self::kind_of(first_char?).is_some())
    }
}

/// Identifiers: one or more ASCII letters.
pub struct IdentRule;

impl<Ctx> LexingRule<Ctx, Token> for IdentRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<Token>> {
        let position = ctx.position();
        let text = ctx.consume_while(|c| c.is_ascii_alphabetic());
        if text.is_empty() {
            return None;
        }

        Some(Lexeme::Token(Token {
            kind: TokenKind::Ident,
            text,
            position,
        }))
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char?.is_ascii_alphabetic())
    }
}

pub fn default_rules() -> ListRules {
    vec![
        Box::new(WhitespaceRule),
        Box::new(PunctuationRule),
        Box::new(IdentRule),
    ]
}

/// Creates a lexer for `input` with the list rules.
pub fn list_lexer<S: Into<String>>(input: S) -> ListLexer {
    Lexer::from_str(input, default_rules())
}
