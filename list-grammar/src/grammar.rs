//! Recognizer for the list language.
//!
//! ```text
//! statement  := list END | assignment END
//! assignment := list '=' list
//! list       := '[' elements? ']'
//! elements   := element (',' element)*
//! element    := IDENT '=' IDENT | IDENT | list
//! ```
//!
//! Both alternatives of `statement` start with a list of unbounded length,
//! so the decision is made by speculatively parsing `list END` first and
//! `assignment END` second. `list` and `assignment` are memoized, which lets
//! the second attempt and the final run reuse what the first attempt proved.

use crate::token::{Token, TokenKind};
use common_framework::TokenSource;
use parser_framework::{Alternative, ParseResult, Parser};

/// `statement := list END | assignment END`, tried in that order.
pub fn statement<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    let alternatives: [Alternative<S>; 2] = [list_statement, assignment_statement];
    p.choose("statement", &alternatives)
}

fn list_statement<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    list(p)?;
    p.expect(TokenKind::Eof)
}

fn assignment_statement<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    assignment(p)?;
    p.expect(TokenKind::Eof)
}

/// `assignment := list '=' list`
pub fn assignment<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    p.memoize("assignment", |p| {
        list(p)?;
        p.expect(TokenKind::Equals)?;
        list(p)
    })
}

/// `list := '[' elements? ']'`
pub fn list<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    p.memoize("list", |p| {
        p.expect(TokenKind::LBrack)?;
        if !p.check(TokenKind::RBrack)? {
            elements(p)?;
        }
        p.expect(TokenKind::RBrack)
    })
}

/// `elements := element (',' element)*`
pub fn elements<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    element(p)?;
    while p.check(TokenKind::Comma)? {
        p.expect(TokenKind::Comma)?;
        element(p)?;
    }
    Ok(())
}

/// `element := IDENT '=' IDENT | IDENT | list`
///
/// Two tokens of lookahead decide between the identifier forms; anything
/// else must be a nested list.
pub fn element<S>(p: &mut Parser<S>) -> ParseResult<(), S>
where
    S: TokenSource<Token = Token>,
{
    if p.check(TokenKind::Ident)? && p.peek_kind(1)? == TokenKind::Equals {
        p.expect(TokenKind::Ident)?;
        p.expect(TokenKind::Equals)?;
        p.expect(TokenKind::Ident)
    } else if p.check(TokenKind::Ident)? {
        p.expect(TokenKind::Ident)
    } else {
        list(p)
    }
}
