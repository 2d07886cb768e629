pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Byte offsets of a token in the source text
pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected input {text:?} at {}..{}", span.start, span.end)]
pub struct LexError {
    pub text: String,
    pub span: Span,
}

/// Tokenize a source string, keeping the span of every token.
/// Stops at the first character sequence no token matches.
pub fn lex(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LexError {
                    text: source[span.clone()].to_string(),
                    span,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;
