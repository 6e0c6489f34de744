//! Logos-based lexer for instruction lines.
//!
//! The token set is deliberately coarse: the three operation keywords,
//! newlines, and opaque words. SKU and amount grammar is enforced by the
//! engine one pair at a time, because a malformed pair must skip without
//! failing the instruction around it — so the lexer must not reject it.

use logos::Logos;
use std::fmt;

use crate::Span;

/// Token types produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")] // Skip horizontal whitespace
pub enum Token<'src> {
    /// The `set-stock` operation keyword.
    #[token("set-stock")]
    SetStock,

    /// The `add-stock` operation keyword.
    #[token("add-stock")]
    AddStock,

    /// The `order` operation keyword.
    #[token("order")]
    Order,

    /// Any other whitespace-free token: SKUs, amounts, order references,
    /// and malformed input alike.
    #[regex(r"[^ \t\r\n]+")]
    Word(&'src str),

    /// Newline (instruction boundary).
    #[regex(r"\r?\n")]
    Newline,
}

impl<'src> Token<'src> {
    /// Get the source text of this token.
    ///
    /// Keywords recover their spelling, so a keyword sitting in argument
    /// position (say, an order reference literally named `order`) can
    /// still be treated as an opaque word.
    #[must_use]
    pub const fn lexeme(&self) -> &'src str {
        match *self {
            Self::SetStock => "set-stock",
            Self::AddStock => "add-stock",
            Self::Order => "order",
            Self::Word(s) => s,
            Self::Newline => "\n",
        }
    }

    /// Returns true if this token is an operation keyword.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::SetStock | Self::AddStock | Self::Order)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newline => write!(f, "\\n"),
            token => write!(f, "{}", token.lexeme()),
        }
    }
}

/// Tokenize source text into a vector of (Token, Span) pairs.
///
/// The catch-all word pattern accepts every non-whitespace byte sequence,
/// so lexing cannot fail; any residual lexer error is folded into a word.
pub fn tokenize(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => tokens.push((Token::Word(lexer.slice()), span)),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("set-stock add-stock order"),
            [Token::SetStock, Token::AddStock, Token::Order]
        );
    }

    #[test]
    fn test_longer_words_are_not_keywords() {
        assert_eq!(kinds("orders"), [Token::Word("orders")]);
        assert_eq!(kinds("set-stocks"), [Token::Word("set-stocks")]);
        assert_eq!(kinds("preorder"), [Token::Word("preorder")]);
    }

    #[test]
    fn test_arguments_are_words() {
        assert_eq!(
            kinds("set-stock AB-6 100"),
            [Token::SetStock, Token::Word("AB-6"), Token::Word("100")]
        );
        // Malformed tokens lex fine; the engine decides their fate.
        assert_eq!(
            kinds("add-stock AB--6 10.5"),
            [Token::AddStock, Token::Word("AB--6"), Token::Word("10.5")]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("order ON-1 AB-6 50");
        assert_eq!(tokens[0].1, Span::new(0, 5));
        assert_eq!(tokens[1].1, Span::new(6, 10));
        assert_eq!(tokens[3].1, Span::new(16, 18));
    }

    #[test]
    fn test_newlines_and_blank_lines() {
        assert_eq!(
            kinds("order A\n\nset-stock"),
            [
                Token::Order,
                Token::Word("A"),
                Token::Newline,
                Token::Newline,
                Token::SetStock,
            ]
        );
        assert_eq!(kinds("order\r\norder"), [Token::Order, Token::Newline, Token::Order]);
    }

    #[test]
    fn test_keyword_lexeme_round_trip() {
        for source in ["set-stock", "add-stock", "order"] {
            let tokens = tokenize(source);
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].0.is_operation());
            assert_eq!(tokens[0].0.lexeme(), source);
        }
    }
}
