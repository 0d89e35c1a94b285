//! The scanning engine: one left-to-right pass over the source text.
use super::{cursor::*, error::*, token::*};

/// Everything a single scan produced: the ordered token sequence and the
/// lexical errors encountered along the way. The token sequence always ends
/// with exactly one [`TokenKind::Eof`] token, and stays available even when
/// errors were found, so a partial stream can still be inspected.
#[derive(Debug)]
pub struct ScanOutcome {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn scan(source: &str) -> ScanOutcome {
    Scanner::new(source).run()
}

struct Scanner<'s> {
    cursor: Cursor<'s>,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'s> Scanner<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Finishes the scanner and consumes it, producing a [`ScanOutcome`]
    /// holding the tokens and errors it collected.
    fn run(mut self) -> ScanOutcome {
        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            if let Some(ch) = self.cursor.advance() {
                self.dispatch(ch, start);
            }
        }
        self.tokens.push(Token::eof(self.line));

        ScanOutcome {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Classifies a single character and runs the matching sub-scan.
    /// `start` is the byte position of `ch`, which has already been consumed.
    fn dispatch(&mut self, ch: char, start: usize) {
        match ch {
            '(' => self.symbol(Symbol::OpenParen, start),
            ')' => self.symbol(Symbol::CloseParen, start),
            '{' => self.symbol(Symbol::OpenBrace, start),
            '}' => self.symbol(Symbol::CloseBrace, start),
            ',' => self.symbol(Symbol::Comma, start),
            '.' => self.symbol(Symbol::Period, start),
            '-' => self.symbol(Symbol::Minus, start),
            '+' => self.symbol(Symbol::Plus, start),
            ';' => self.symbol(Symbol::Semicolon, start),
            '*' => self.symbol(Symbol::Asterisk, start),
            '!' => self.operator(Symbol::Neq, Symbol::Not, start),
            '=' => self.operator(Symbol::Eq, Symbol::Assign, start),
            '>' => self.operator(Symbol::Gte, Symbol::Gt, start),
            '<' => self.operator(Symbol::Lte, Symbol::Lt, start),
            '/' => self.slash(start),
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(start),
            _ if ch.is_ascii_digit() => self.number(start),
            _ if ch.is_ascii_alphabetic() => self.identifier(start),
            _ => self.error(ErrorKind::UnexpectedCharacter(ch)),
        }
    }

    /// Emits `combined` if the next character is `=`, consuming it as well;
    /// emits `single` otherwise.
    fn operator(&mut self, combined: Symbol, single: Symbol, start: usize) {
        let symbol = if self.cursor.recognise('=') {
            combined
        } else {
            single
        };
        self.symbol(symbol, start);
    }

    /// A lone `/` is division; `//` opens a comment running up to,
    /// but not including, the next newline.
    fn slash(&mut self, start: usize) {
        if self.cursor.recognise('/') {
            self.cursor.advance_while(|ch| ch != '\n');
        } else {
            self.symbol(Symbol::Slash, start);
        }
    }

    /// Scans the remainder of a string literal, the opening quote already
    /// consumed. The literal value excludes the quotes. A string missing its
    /// closing quote is reported at the line it started on; the rest of the
    /// input counts as consumed and the scan carries on to its normal end.
    fn string(&mut self, start: usize) {
        let opening_line = self.line;
        loop {
            match self.cursor.advance() {
                None => {
                    self.errors
                        .push(ScanError::new(opening_line, ErrorKind::UnterminatedString));
                    return;
                }
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
            }
        }

        let lexeme = self.cursor.slice_from(start);
        // Both quotes are a single byte wide.
        let content = lexeme[1..lexeme.len() - 1].to_string();
        self.tokens.push(Token::new(
            TokenKind::String,
            lexeme,
            Some(Literal::Text(content)),
            opening_line,
        ));
    }

    /// Scans the maximal run of digits, plus an optional fractional part
    /// introduced by a `.` that is itself followed by a digit. The literal
    /// keeps the representation its form implies: integer without a
    /// fractional part, float with one.
    fn number(&mut self, start: usize) {
        self.cursor.advance_while(|ch| ch.is_ascii_digit());

        let fractional = self.cursor.peek(0) == Some('.')
            && self.cursor.peek(1).is_some_and(|ch| ch.is_ascii_digit());
        if fractional {
            self.cursor.advance();
            self.cursor.advance_while(|ch| ch.is_ascii_digit());
        }

        let lexeme = self.cursor.slice_from(start);
        let literal = if fractional {
            lexeme
                .parse()
                .map(Literal::Float)
                .map_err(|err: std::num::ParseFloatError| err.to_string())
        } else {
            lexeme
                .parse()
                .map(Literal::Integer)
                .map_err(|err: std::num::ParseIntError| err.to_string())
        };

        match literal {
            Ok(literal) => self.push(TokenKind::Number, Some(literal), start),
            Err(err) => self.error(ErrorKind::InvalidNumber(err)),
        }
    }

    /// Scans the maximal run of alphabetic characters. Digits and
    /// underscores terminate the run. The resulting lexeme is consulted
    /// against the keyword table once.
    fn identifier(&mut self, start: usize) {
        self.cursor.advance_while(|ch| ch.is_ascii_alphabetic());

        let lexeme = self.cursor.slice_from(start);
        let kind = match Keyword::from_lexeme(lexeme) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        self.push(kind, None, start);
    }

    fn symbol(&mut self, symbol: Symbol, start: usize) {
        self.push(TokenKind::Symbol(symbol), None, start);
    }

    /// Emits a token spanning `start` up to the current cursor position.
    fn push(&mut self, kind: TokenKind, literal: Option<Literal>, start: usize) {
        let lexeme = self.cursor.slice_from(start);
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    fn error(&mut self, kind: ErrorKind) {
        self.errors.push(ScanError::new(self.line, kind));
    }
}
