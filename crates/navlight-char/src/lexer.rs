use crate::span::Span;
use logos::Logos;

/// Tokens of the light-characteristic notation
///
/// The grammar is whitespace-sensitive (the space between type and colors is
/// mandatory, the one before a group parameter is forbidden), so a space is a
/// structural token here, not trivia. Input must be normalized first — see
/// [`normalize`](crate::parser::normalize) — which leaves only single spaces.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Period: decimal seconds with optional "s" suffix
    #[regex(r"[0-9]+\.?[0-9]*[sS]?", lex_number, priority = 10)]
    #[regex(r"\.[0-9]+[sS]?", lex_number)]
    Number(f64),

    // Type or color word
    #[regex(r"[A-Za-z]+", priority = 5)]
    Word,

    // Group parameter in parentheses, interior captured verbatim
    #[regex(r"\([^)]+\)", lex_group)]
    Group(String),

    #[token(" ")]
    Space,

    // Error token
    Error,
}

fn lex_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().trim_end_matches(['s', 'S']).parse().ok()
}

fn lex_group(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Token stream over a normalized code string
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: Token::lexer(source),
        }
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    pub fn slice(&self, span: Span) -> &'source str {
        &self.source()[span.to_range()]
    }
}

impl Iterator for Lexer<'_> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = Span::from(self.inner.span());
        Some((token.unwrap_or(Token::Error), span))
    }
}
