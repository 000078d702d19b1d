use crate::ast::{Token, lookup_keyword};

/// Pull-based lexer over an immutable input buffer.
///
/// `next_token` never fails: characters the lexer does not recognize become
/// [`Token::Unknown`] and are rejected later by the parser.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

fn is_letter(ch: char) -> bool {
    // '.' and '-' are identifier characters, so dotted field paths
    // (user.address.city) and dashed names lex as a single token.
    ch.is_ascii_alphabetic() || ch == '_' || ch == '-' || ch == '.'
}

fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

fn is_filter_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n'
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if is_filter_whitespace(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_letter(ch) || ch.is_ascii_digit() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Read a quoted string. The literal is the raw substring between the
    /// delimiters; there is no escape processing. An unterminated string
    /// scans to end of input.
    fn read_string(&mut self, quote: char) -> String {
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                break;
            }
            result.push(ch);
        }

        result
    }

    /// Read a number: optional leading `-`, then a `0b`/`0x` prefixed
    /// integer or a decimal run. The token keeps the raw text (sign and
    /// radix prefix included); the parser does the base conversion.
    fn read_number(&mut self) -> Token {
        let mut number = String::new();

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        if self.current_char() == Some('0') {
            match self.peek_char(1) {
                Some('b') => {
                    number.push_str("0b");
                    self.advance();
                    self.advance();
                    while let Some(ch) = self.current_char() {
                        if ch == '0' || ch == '1' {
                            number.push(ch);
                            self.advance();
                        } else {
                            break;
                        }
                    }
                    return Token::IntLiteral(number);
                }
                Some('x') => {
                    number.push_str("0x");
                    self.advance();
                    self.advance();
                    while let Some(ch) = self.current_char() {
                        if is_hex_digit(ch) {
                            number.push(ch);
                            self.advance();
                        } else {
                            break;
                        }
                    }
                    return Token::IntLiteral(number);
                }
                _ => {}
            }
        }

        // Decimal: float if and only if exactly one '.' is embedded. A
        // second '.' ends the number and starts the next token.
        let mut is_float = false;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !is_float {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if is_float {
            Token::FloatLiteral(number)
        } else {
            Token::IntLiteral(number)
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.current_char() {
            None => Token::Eof,
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some('=') => {
                self.advance();
                Token::Eq
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::Lte
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::Gte
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::Ne
                } else {
                    self.advance();
                    Token::Unknown("!".to_string())
                }
            }
            Some('"') => Token::StringLiteral(self.read_string('"')),
            Some('\'') => Token::StringLiteral(self.read_string('\'')),
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            // '-' followed by a digit starts a number, not an identifier
            Some('-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number()
            }
            Some(ch) if is_letter(ch) => {
                let ident = self.read_identifier();
                lookup_keyword(&ident).unwrap_or(Token::Field(ident))
            }
            Some(ch) => {
                self.advance();
                Token::Unknown(ch.to_string())
            }
        }
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    let mut lexer = Lexer::new("AND and int INT");
    assert_eq!(lexer.next_token(), Token::And);
    assert_eq!(lexer.next_token(), Token::Field("and".to_string()));
    assert_eq!(lexer.next_token(), Token::TypeName("int".to_string()));
    assert_eq!(lexer.next_token(), Token::Field("INT".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_dotted_path_is_one_token() {
    let mut lexer = Lexer::new("user.address.city > 5");
    assert_eq!(
        lexer.next_token(),
        Token::Field("user.address.city".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Gt);
    assert_eq!(lexer.next_token(), Token::IntLiteral("5".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
}
