use crate::error::{LoxError, ScanError};
use crate::token::{Literal, Token, TokenType};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    let mut keywords = HashMap::new();
    keywords.insert("and", TokenType::And);
    keywords.insert("class", TokenType::Class);
    keywords.insert("else", TokenType::Else);
    keywords.insert("false", TokenType::False);
    keywords.insert("for", TokenType::For);
    keywords.insert("fun", TokenType::Fun);
    keywords.insert("if", TokenType::If);
    keywords.insert("nil", TokenType::Nil);
    keywords.insert("or", TokenType::Or);
    keywords.insert("print", TokenType::Print);
    keywords.insert("return", TokenType::Return);
    keywords.insert("super", TokenType::Super);
    keywords.insert("this", TokenType::This);
    keywords.insert("true", TokenType::True);
    keywords.insert("var", TokenType::Var);
    keywords.insert("while", TokenType::While);
    keywords
});

/// Reserved word spelled exactly as `text`, if any.
pub fn keyword(text: &str) -> Option<TokenType> {
    KEYWORDS.get(text).copied()
}

/// Everything one pass over a source produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<'a> {
    /// Always ends with exactly one `Eof` token.
    pub tokens: Vec<Token<'a>>,
    /// Lexical errors in source order.
    pub errors: Vec<ScanError>,
}

impl ScanOutput<'_> {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// `Err(LoxError::Scan)` when any lexical error was recorded.
    pub fn status(&self) -> Result<(), LoxError> {
        if self.had_error() {
            Err(LoxError::Scan {
                count: self.errors.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Scans `source` in one pass.
pub fn scan(source: &str) -> ScanOutput<'_> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token<'a>>,
    errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> ScanOutput<'a> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan finished"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        match self.advance() {
            b'(' => self.add_token(TokenType::LeftParen),
            b')' => self.add_token(TokenType::RightParen),
            b'{' => self.add_token(TokenType::LeftBrace),
            b'}' => self.add_token(TokenType::RightBrace),
            b',' => self.add_token(TokenType::Comma),
            b'.' => self.add_token(TokenType::Dot),
            b'-' => self.add_token(TokenType::Minus),
            b'+' => self.add_token(TokenType::Plus),
            b';' => self.add_token(TokenType::Semicolon),
            b'*' => self.add_token(TokenType::Star),

            b'!' if self.match_byte(b'=') => self.add_token(TokenType::BangEqual),
            b'!' => self.add_token(TokenType::Bang),

            b'=' if self.match_byte(b'=') => self.add_token(TokenType::EqualEqual),
            b'=' => self.add_token(TokenType::Equal),

            b'<' if self.match_byte(b'=') => self.add_token(TokenType::LessEqual),
            b'<' => self.add_token(TokenType::Less),

            b'>' if self.match_byte(b'=') => self.add_token(TokenType::GreaterEqual),
            b'>' => self.add_token(TokenType::Greater),

            b'/' if self.match_byte(b'/') => self.line_comment(),
            b'/' => self.add_token(TokenType::Slash),

            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,

            b'"' => self.string(),

            b if is_digit(b) => self.number(),

            b if is_alpha(b) => self.identifier(),

            _ => {
                self.skip_char_tail();
                self.error(ScanError::UnexpectedCharacter { line: self.line });
            }
        }
    }

    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.source.as_bytes()[self.current];
        self.current += 1;
        b
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source.as_bytes()[self.current]
        }
    }

    #[inline]
    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            0
        } else {
            self.source.as_bytes()[self.current + 1]
        }
    }

    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.source.as_bytes()[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    // Multi-byte characters are skipped whole so each one is reported once.
    fn skip_char_tail(&mut self) {
        while !self.is_at_end() && !self.source.is_char_boundary(self.current) {
            self.current += 1;
        }
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.push_token(token_type, None);
    }

    fn push_token(&mut self, token_type: TokenType, literal: Option<Literal<'a>>) {
        let lexeme = &self.source[self.start..self.current];
        let token = Token::new(token_type, lexeme, literal, self.line);

        #[cfg(feature = "debug_trace")]
        tracing::trace!(line = token.line, "{}", token);

        self.tokens.push(token);
    }

    fn error(&mut self, error: ScanError) {
        // Callers print the diagnostic lines; this event is for tracing only.
        debug!(line = error.line(), "{}", error.message());
        self.errors.push(error);
    }

    fn line_comment(&mut self) {
        while self.peek() != b'\n' && !self.is_at_end() {
            self.advance();
        }
    }

    fn string(&mut self) {
        while !self.is_at_end() && self.peek() != b'"' {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(ScanError::UnterminatedString { line: self.line });
            return;
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.push_token(TokenType::String, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A dot only belongs to the number when a digit follows it.
        if self.peek() == b'.' && is_digit(self.peek_next()) {
            self.advance();

            while is_digit(self.peek()) {
                self.advance();
            }
        }

        let lexeme = &self.source[self.start..self.current];
        let value = parse_decimal(lexeme);
        self.push_token(TokenType::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        let token_type = keyword(lexeme).unwrap_or(TokenType::Identifier);

        self.add_token(token_type);
    }
}

// `digits` is `[0-9]+(\.[0-9]+)?`, which `f64::from_str` always accepts.
fn parse_decimal(digits: &str) -> f64 {
    digits.parse().unwrap_or(f64::NAN)
}

#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase() || c == b'_'
}

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}
