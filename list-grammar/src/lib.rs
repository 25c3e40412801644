//! The list language: `[a, b=c, [d]]` statements and `[a] = [b]`
//! assignments, recognized with speculative, memoized recursive descent.

pub mod grammar;
pub mod lexer;
pub mod token;

pub use lexer::{default_rules, list_lexer, ListLexer};
pub use token::{Token, TokenKind};

use common_framework::TokenSource;
use parser_framework::{ParseError, ParseStats, Parser, ParserConfig};
use tracing::debug;

/// Error type of every list parse.
pub type ListError = ParseError<TokenKind>;

/// Recognizes one statement from `source`, consuming it through end of
/// input.
pub fn parse<S>(source: S) -> Result<(), ListError>
where
    S: TokenSource<Token = Token>,
{
    parse_with(source, ParserConfig::default()).map(|_| ())
}

/// Like [`parse`], with an explicit configuration. Returns the work
/// counters of the parse on success.
pub fn parse_with<S>(source: S, config: ParserConfig) -> Result<ParseStats, ListError>
where
    S: TokenSource<Token = Token>,
{
    let mut parser = Parser::with_config(source, config);
    grammar::statement(&mut parser)?;
    let stats = parser.stats();
    debug!(?stats, "statement accepted");
    Ok(stats)
}

/// Lexes and recognizes `input`.
pub fn parse_str(input: &str) -> Result<(), ListError> {
    parse(list_lexer(input))
}
