//! Tokens of a directive line.

use std::fmt;
use std::ops::Range;

use logos::Logos;

use crate::error::DirectiveError;

/// Token categories of the directive grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `//wrap:expr`
    #[token("//wrap:expr")]
    Keyword,

    /// A bare `:` separating host arguments from the foreign call.
    #[token(":", priority = 5)]
    Separator,

    /// Quoted code inserted verbatim into the foreign call: `"0"`
    #[regex(r#""[^"]*""#)]
    Literal,

    /// Anything else: `Eq:Bool`, `Z3_mk_eq`, `others...`, `n:c_uint`
    #[regex(r#"[^\s"]+"#)]
    Word,
}

/// A token borrowed from the directive line.
#[derive(Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    /// Contents of a literal without its quotes.
    pub fn literal_code(&self) -> &'src str {
        debug_assert_eq!(self.kind, TokenKind::Literal);
        &self.text[1..self.text.len() - 1]
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.text, self.span)
    }
}

/// Split a directive line into tokens.
pub fn tokenize(line: &str) -> Result<Vec<Token<'_>>, DirectiveError> {
    let mut lexer = TokenKind::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice(),
                span,
            }),
            // The only character no pattern accepts is an unpaired quote.
            Err(()) => return Err(DirectiveError::UnterminatedLiteral(span.start)),
        }
    }

    Ok(tokens)
}
