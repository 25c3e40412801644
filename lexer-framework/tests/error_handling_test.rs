//! Error handling and boundary scenario tests.

use lexer_framework::{
    DefaultContext, LexContext, LexError, LexToken, Lexeme, Lexer, LexingRule, Position,
    TextSlice,
};

type RuleSet<Tok> = Vec<Box<dyn LexingRule<DefaultContext, Tok>>>;

#[derive(Debug, Clone, PartialEq)]
enum TestToken {
    Char { ch: char, position: Position },
    Eof { position: Position },
}

impl LexToken for TestToken {
    fn eof(position: Position, _text: TextSlice) -> Self {
        TestToken::Eof { position }
    }

    fn position(&self) -> Position {
        match self {
            TestToken::Char { position, .. } | TestToken::Eof { position } => *position,
        }
    }

    fn is_eof(&self) -> bool {
        matches!(self, TestToken::Eof { .. })
    }
}

// Accepts lowercase letters only.
struct LowerRule;

impl<Ctx: LexContext> LexingRule<Ctx, TestToken> for LowerRule {
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<TestToken>> {
        let position = ctx.position();
        let ch = ctx.advance().filter(char::is_ascii_lowercase)?;
        Some(Lexeme::Token(TestToken::Char { ch, position }))
    }
}

// Matches but doesn't advance the cursor.
struct BuggyRule;

impl<Ctx: LexContext> LexingRule<Ctx, TestToken> for BuggyRule {
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<Lexeme<TestToken>> {
        Some(Lexeme::Token(TestToken::Char {
            ch: ctx.peek()?,
            position: ctx.position(),
        }))
    }

    fn priority(&self) -> i32 {
        50
    }
}

#[test]
fn test_no_rules() {
    let rules: RuleSet<TestToken> = vec![];
    let mut lexer = Lexer::from_str("a", rules);

    assert_eq!(
        lexer.next_token(),
        Err(LexError::InvalidCharacter {
            ch: 'a',
            position: Position::new(),
        })
    );
}

#[test]
fn test_invalid_character_reports_position() {
    let rules: RuleSet<TestToken> = vec![Box::new(LowerRule)];
    let mut lexer = Lexer::from_str("ab\ncD", rules);

    for _ in 0..2 {
        assert!(lexer.next_token().is_ok());
    }
    // '\n' is not accepted either.
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.position(), Position::at(1, 3, 2));
    assert!(matches!(err, LexError::InvalidCharacter { ch: '\n', .. }));
}

#[test]
fn test_rule_that_doesnt_advance() {
    let rules: RuleSet<TestToken> = vec![Box::new(BuggyRule), Box::new(LowerRule)];
    let mut lexer = Lexer::from_str("a", rules);

    assert_eq!(
        lexer.next_token(),
        Err(LexError::NoProgress {
            position: Position::new()
        })
    );
}

#[test]
fn test_iterator_stops_after_error() {
    let rules: RuleSet<TestToken> = vec![Box::new(LowerRule)];
    let lexer = Lexer::from_str("ab1cd", rules);

    let items: Vec<_> = lexer.collect();
    assert_eq!(items.len(), 3);
    assert!(items[0].is_ok());
    assert!(items[1].is_ok());
    assert!(matches!(
        items[2],
        Err(LexError::InvalidCharacter { ch: '1', .. })
    ));
}

#[test]
fn test_tokenize_propagates_error() {
    let rules: RuleSet<TestToken> = vec![Box::new(LowerRule)];
    let mut lexer = Lexer::from_str("a?", rules);

    let err = lexer.tokenize().unwrap_err();
    assert_eq!(err.to_string(), "invalid character '?' at 1:2");
}
