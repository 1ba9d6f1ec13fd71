//! Tokenizer for C header text.
//!
//! Only the handful of token kinds a function declaration is made of are
//! distinguished; everything else becomes [`TokenKind::Other`]. Whitespace
//! other than newlines and all comments are dropped.

use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[A-Za-z0-9_]+`
    Ident,
    Star,
    Amp,
    LParen,
    RParen,
    Comma,
    Semi,
    Newline,
    /// Any other single character
    Other,
}

/// A token and its byte span in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// The source text covered by this token.
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some((start, c)) = self.chars.next() {
            let kind = match c {
                '\n' => TokenKind::Newline,
                c if c.is_whitespace() => continue,
                '/' if self.peek_is('/') => {
                    self.skip_line_comment();
                    continue;
                }
                '/' if self.peek_is('*') => {
                    self.chars.next();
                    self.skip_block_comment();
                    continue;
                }
                c if is_ident_char(c) => {
                    let end = self.eat_ident(start);
                    self.tokens.push(Token::new(TokenKind::Ident, start, end));
                    continue;
                }
                '*' => TokenKind::Star,
                '&' => TokenKind::Amp,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semi,
                _ => TokenKind::Other,
            };
            self.tokens.push(Token::new(kind, start, start + c.len_utf8()));
        }
        self.tokens
    }

    fn peek_is(&mut self, expected: char) -> bool {
        matches!(self.chars.peek(), Some((_, c)) if *c == expected)
    }

    fn eat_ident(&mut self, start: usize) -> usize {
        let mut end = start + 1;
        while let Some(&(pos, c)) = self.chars.peek() {
            if !is_ident_char(c) {
                break;
            }
            end = pos + c.len_utf8();
            self.chars.next();
        }
        end
    }

    fn skip_line_comment(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }

    /// Skip to the closing `*/`, keeping the newlines inside the comment.
    fn skip_block_comment(&mut self) {
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '\n' => self
                    .tokens
                    .push(Token::new(TokenKind::Newline, pos, pos + 1)),
                '*' if self.peek_is('/') => {
                    self.chars.next();
                    return;
                }
                _ => {}
            }
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split header text into tokens.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_declaration_tokens() {
        use TokenKind::*;

        assert_eq!(
            kinds("void lv_timer_pause(lv_timer_t * timer);\n"),
            vec![Ident, Ident, LParen, Ident, Star, Ident, RParen, Semi, Newline]
        );
    }

    #[test]
    fn test_token_spans() {
        let src = "const char *txt";
        let tokens = tokenize(src);

        let texts: Vec<_> = tokens.iter().map(|t| t.text(src)).collect();
        assert_eq!(texts, vec!["const", "char", "*", "txt"]);
        assert_eq!(tokens[2].start, 11);
    }

    #[test]
    fn test_comments_skipped() {
        use TokenKind::*;

        assert_eq!(kinds("a // b c\nd"), vec![Ident, Newline, Ident]);
        assert_eq!(kinds("a /* b\n c */ d"), vec![Ident, Newline, Ident]);
        assert_eq!(kinds("a /* unterminated"), vec![Ident]);
    }

    #[test]
    fn test_other_characters() {
        use TokenKind::*;

        assert_eq!(kinds("#define X 1"), vec![Other, Ident, Ident, Ident]);
        assert_eq!(kinds("a = b[2];"), vec![Ident, Other, Ident, Other, Ident, Other, Semi]);
        assert_eq!(kinds("a / b"), vec![Ident, Other, Ident]);
    }

    #[test]
    fn test_crlf_newlines() {
        use TokenKind::*;

        assert_eq!(kinds("a\r\nb"), vec![Ident, Newline, Ident]);
    }
}
