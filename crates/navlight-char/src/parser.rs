use crate::descriptor::{Descriptor, LightType};
use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Token};
use crate::span::Span;
use navlight_core::Color;

/// Parse a raw light-characteristic code into a [`Descriptor`]
///
/// The code is normalized first (trimmed, internal whitespace collapsed to
/// single spaces); the grammar is then matched anchored at both ends. There
/// is no partial parse: anything the grammar does not cover in full is an
/// error.
///
/// # Examples
///
/// ```
/// use navlight_char::parse;
/// use navlight_core::Color;
///
/// let descriptor = parse("Fl(2+1) W G 10s").unwrap();
/// assert_eq!(descriptor.group.as_deref(), Some("2+1"));
/// assert_eq!(descriptor.colors, vec![Color::White, Color::Green]);
/// assert_eq!(descriptor.period, Some(10.0));
/// ```
pub fn parse(code: &str) -> Result<Descriptor> {
    let normalized = normalize(code);
    Parser::new(&normalized).parse_descriptor()
}

/// Trim and collapse whitespace runs to single spaces
pub fn normalize(code: &str) -> String {
    code.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Descent parser over the token stream of one normalized code
pub struct Parser<'source> {
    source: &'source str,
    tokens: Vec<(Token, Span)>,
    pos: usize,
}

impl<'source> Parser<'source> {
    /// Create a parser; `source` must already be normalized
    pub fn new(source: &'source str) -> Self {
        Parser {
            source,
            tokens: Lexer::new(source).collect(),
            pos: 0,
        }
    }

    /// Parse the whole code: type, optional group, colors, optional period
    pub fn parse_descriptor(&mut self) -> Result<Descriptor> {
        let kind = self.parse_type()?;
        let group = self.parse_group();
        self.expect_space("a color list")?;
        let colors = self.parse_colors()?;
        let period = self.parse_period()?;
        self.expect_end()?;

        Ok(Descriptor {
            kind,
            group,
            colors,
            period,
        })
    }

    /// Match the type token, greedily preferring two-word compounds
    fn parse_type(&mut self) -> Result<LightType> {
        let (token, span) = self.next_or("a light type")?;
        if token != Token::Word {
            return Err(self.unexpected("a light type", span));
        }
        let first = self.slice(span).to_ascii_uppercase();

        // "Gp Fl" must not be read as bare "Fl"; the second word of a
        // compound is never a valid color, so greedy matching is safe.
        if let (Some((Token::Space, _)), Some((Token::Word, second_span))) =
            (self.peek(0), self.peek(1))
        {
            let second = self.slice(*second_span).to_ascii_uppercase();
            if let Some(kind) = LightType::from_compound(&first, &second) {
                self.pos += 2;
                return Ok(kind);
            }
        }

        LightType::from_token(&first).ok_or_else(|| ParseError::UnknownType {
            token: self.slice(span).to_string(),
            span,
        })
    }

    /// An optional group parameter directly after the type (no space)
    fn parse_group(&mut self) -> Option<String> {
        if let Some((Token::Group(group), _)) = self.peek(0) {
            let group = group.clone();
            self.pos += 1;
            Some(group)
        } else {
            None
        }
    }

    /// One mandatory color, then any further space-separated colors
    fn parse_colors(&mut self) -> Result<Vec<Color>> {
        let mut colors = vec![self.parse_color()?];

        while let (Some((Token::Space, _)), Some((Token::Word, span))) =
            (self.peek(0), self.peek(1))
        {
            match Color::from_token(self.slice(*span)) {
                Some(color) => {
                    self.pos += 2;
                    colors.push(color);
                }
                // not a color; whatever follows must be the period or nothing
                None => break,
            }
        }

        Ok(colors)
    }

    fn parse_color(&mut self) -> Result<Color> {
        let (token, span) = self.next_or("a color token")?;
        if token != Token::Word {
            return Err(self.unexpected("a color token", span));
        }
        Color::from_token(self.slice(span)).ok_or_else(|| ParseError::InvalidColor {
            token: self.slice(span).to_string(),
            span,
        })
    }

    /// An optional trailing " <seconds>" with optional "s" suffix
    fn parse_period(&mut self) -> Result<Option<f64>> {
        if !matches!(self.peek(0), Some((Token::Space, _))) {
            return Ok(None);
        }
        self.pos += 1;

        let (token, span) = self.next_or("a period in seconds")?;
        match token {
            Token::Number(seconds) => Ok(Some(seconds)),
            _ => Err(self.unexpected("a period in seconds", span)),
        }
    }

    fn expect_space(&mut self, expected: &str) -> Result<()> {
        let (token, span) = self.next_or(expected)?;
        if token == Token::Space {
            Ok(())
        } else {
            Err(self.unexpected(expected, span))
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.peek(0) {
            None => Ok(()),
            Some((_, span)) => Err(ParseError::TrailingInput { span: *span }),
        }
    }

    fn peek(&self, offset: usize) -> Option<&(Token, Span)> {
        self.tokens.get(self.pos + offset)
    }

    fn next_or(&mut self, expected: &str) -> Result<(Token, Span)> {
        match self.tokens.get(self.pos) {
            Some((token, span)) => {
                self.pos += 1;
                Ok((token.clone(), *span))
            }
            None => Err(ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    fn unexpected(&self, expected: &str, span: Span) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.slice(span).to_string(),
            span,
        }
    }

    fn slice(&self, span: Span) -> &'source str {
        &self.source[span.to_range()]
    }
}
