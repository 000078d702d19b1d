use crate::{
    ast::{AstNode, Bits, BitOp, ComparisonOp, Identifier, InOp, Literal, LogicalOp, Number, Token},
    lexer::Lexer,
};
use std::fmt;
use std::mem;

/// Errors raised while parsing a filter expression.
///
/// Parsing is all-or-nothing: the first mismatch aborts with one of these
/// and no partial AST is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The current token did not match the expected kind
    UnexpectedToken { expected: Token, found: Token },

    /// A token that cannot start an expression factor
    UnexpectedFactorToken { found: Token },

    /// A stray token inside a value list or bit-value list
    UnexpectedListToken {
        context: &'static str,
        found: Token,
    },

    /// Input ended inside a value list or bit-value list
    UnexpectedEndOfInput { context: &'static str },

    /// `BIT` was not followed by `ALL_SET`, `ALL_CLEAR`, `ANY_SET` or `ANY_CLEAR`
    ExpectedBitOperator { found: Token },

    /// `BIT ALL_SET` (and friends) was not followed by an integer or a list
    ExpectedBitValues { found: Token },

    /// A numeric operand was required (`MOD`, `SIZE`)
    ExpectedNumber { found: Token },

    /// `IS` was not followed by a type keyword
    ExpectedTypeKeyword { found: Token },

    /// A suffix operator or `HAS` was applied to something that is not a field
    ExpectedField { operator: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Unexpected token: {:?}, expected: {:?}", found, expected)
            }
            ParseError::UnexpectedFactorToken { found } => {
                write!(f, "Unexpected token: {:?}", found)
            }
            ParseError::UnexpectedListToken { context, found } => {
                write!(f, "Unexpected token in {}: {:?}", context, found)
            }
            ParseError::UnexpectedEndOfInput { context } => {
                write!(f, "Unexpected end of input in {}", context)
            }
            ParseError::ExpectedBitOperator { found } => {
                write!(f, "Unexpected bit operator: {:?}", found)
            }
            ParseError::ExpectedBitValues { found } => {
                write!(f, "Expected bit values, but got: {:?}", found)
            }
            ParseError::ExpectedNumber { found } => {
                write!(f, "Expected a number, but got: {:?}", found)
            }
            ParseError::ExpectedTypeKeyword { found } => {
                write!(f, "Expected a type keyword, but got: {:?}", found)
            }
            ParseError::ExpectedField { operator } => {
                write!(f, "Expected a field name for {}", operator)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Convert an integer literal's raw text, handling `0b`/`0x` radix prefixes.
/// The sign is applied separately so `-0x10` converts as `-(0x10)`.
fn integer_from_literal(text: &str) -> i64 {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let value = if let Some(digits) = body.strip_prefix("0b") {
        i64::from_str_radix(digits, 2).unwrap_or(0)
    } else if let Some(digits) = body.strip_prefix("0x") {
        i64::from_str_radix(digits, 16).unwrap_or(0)
    } else {
        body.parse::<i64>().unwrap_or(0)
    };

    if negative { -value } else { value }
}

fn float_from_literal(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

fn comparison_op(token: &Token) -> Option<ComparisonOp> {
    match token {
        Token::Eq => Some(ComparisonOp::Eq),
        Token::Ne => Some(ComparisonOp::Ne),
        Token::Lt => Some(ComparisonOp::Lt),
        Token::Lte => Some(ComparisonOp::Lte),
        Token::Gt => Some(ComparisonOp::Gt),
        Token::Gte => Some(ComparisonOp::Gte),
        _ => None,
    }
}

/// Suffix operators and `HAS` require a plain field on their left.
fn expect_field(node: AstNode, operator: &'static str) -> Result<Identifier, ParseError> {
    match node {
        AstNode::Identifier(field) => Ok(field),
        _ => Err(ParseError::ExpectedField { operator }),
    }
}

/// Recursive-descent parser over the lexer's token stream.
///
/// Consumes tokens eagerly in a single pass with one token of state and no
/// backtracking; every production strictly advances the cursor.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if mem::discriminant(&self.current_token) != mem::discriminant(&expected) {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: self.current_token.clone(),
            });
        }
        self.advance();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    /// Parse a complete filter expression.
    ///
    /// Trailing tokens after a complete expression are not rejected; the
    /// caller sees only the expression parsed from the front of the input.
    pub fn parse(&mut self) -> Result<AstNode, ParseError> {
        self.parse_expression()
    }

    /// `Expression := Term ((AND | OR | NOR) Term)*`, left-associative, so
    /// chains of three or more connectives nest as left-leaning binary trees.
    fn parse_expression(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_term()?;

        loop {
            let operator = match &self.current_token {
                Token::And => LogicalOp::And,
                Token::Or => LogicalOp::Or,
                Token::Nor => LogicalOp::Nor,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;

            node = AstNode::Logical {
                operator,
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// `Term := NotAndHas (ComparisonOp Factor)*`
    ///
    /// The trailing loop only fires after a `HAS` factor (`HAS x > 5`),
    /// since `parse_comparison` already drains adjacent comparison
    /// operators everywhere else. Kept for compatibility with existing
    /// inputs rather than folded away.
    fn parse_term(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_not_and_has()?;

        while let Some(operator) = comparison_op(&self.current_token) {
            self.advance();
            let right = self.parse_factor()?;

            node = AstNode::Comparison {
                operator,
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    fn parse_not_and_has(&mut self) -> Result<AstNode, ParseError> {
        if self.check(&Token::Not) {
            self.advance();
            let argument = self.parse_has_or_deeper()?;
            return Ok(AstNode::Not {
                argument: Box::new(argument),
            });
        }
        self.parse_has_or_deeper()
    }

    fn parse_has_or_deeper(&mut self) -> Result<AstNode, ParseError> {
        if self.check(&Token::Has) {
            self.advance();
            let factor = self.parse_factor()?;
            let field = expect_field(factor, "HAS")?;
            return Ok(AstNode::Has { field });
        }
        self.parse_comparison()
    }

    /// `Comparison := Factor (SuffixOp ...)*`
    ///
    /// The suffix operator after a parsed left operand decides which
    /// expression variant is built. `NOT` in suffix position is only valid
    /// as the first half of `NOT IN`.
    fn parse_comparison(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_factor()?;

        loop {
            if let Some(operator) = comparison_op(&self.current_token) {
                self.advance();
                let right = self.parse_factor()?;

                node = AstNode::Comparison {
                    operator,
                    left: Box::new(node),
                    right: Box::new(right),
                };
                continue;
            }

            match &self.current_token {
                Token::In => {
                    self.advance();
                    let field = expect_field(node, "IN")?;
                    self.expect(Token::LParen)?;
                    let values = self.parse_value_list()?;
                    self.expect(Token::RParen)?;

                    node = AstNode::In {
                        operator: InOp::In,
                        field,
                        values,
                    };
                }
                Token::Not => {
                    self.advance();
                    self.expect(Token::In)?;
                    let field = expect_field(node, "NOT IN")?;
                    self.expect(Token::LParen)?;
                    let values = self.parse_value_list()?;
                    self.expect(Token::RParen)?;

                    node = AstNode::In {
                        operator: InOp::NotIn,
                        field,
                        values,
                    };
                }
                Token::Mod => {
                    self.advance();
                    let field = expect_field(node, "MOD")?;
                    let divisor = self.parse_number()?;
                    self.expect(Token::Eq)?;
                    let remainder = self.parse_number()?;

                    node = AstNode::Mod {
                        field,
                        divisor,
                        remainder,
                    };
                }
                Token::Matches => {
                    self.advance();
                    let field = expect_field(node, "MATCHES")?;
                    let pattern = self.parse_string()?;
                    // A second quoted string is the regex options; absent
                    // means no options.
                    let options = if matches!(self.current_token, Token::StringLiteral(_)) {
                        self.parse_string()?
                    } else {
                        String::new()
                    };

                    node = AstNode::Matches {
                        field,
                        pattern,
                        options,
                    };
                }
                Token::Contains => {
                    self.advance();
                    let field = expect_field(node, "CONTAINS")?;
                    self.expect(Token::LParen)?;
                    let values = self.parse_value_list()?;
                    self.expect(Token::RParen)?;

                    node = AstNode::Contains { field, values };
                }
                Token::Size => {
                    self.advance();
                    let field = expect_field(node, "SIZE")?;
                    let size = self.parse_number()?;

                    node = AstNode::Size { field, size };
                }
                Token::Bit => {
                    self.advance();
                    let field = expect_field(node, "BIT")?;
                    let operator = match &self.current_token {
                        Token::AllSet => BitOp::AllSet,
                        Token::AllClear => BitOp::AllClear,
                        Token::AnySet => BitOp::AnySet,
                        Token::AnyClear => BitOp::AnyClear,
                        found => {
                            return Err(ParseError::ExpectedBitOperator {
                                found: found.clone(),
                            });
                        }
                    };
                    self.advance();
                    let bits = self.parse_bit_values()?;

                    node = AstNode::Bit {
                        field,
                        operator,
                        bits,
                    };
                }
                _ => break,
            }
        }

        Ok(node)
    }

    /// Parse primary expressions: prefix `NOT`, field identifiers (with
    /// their `ANY` / `IS` forms), literals, and parenthesized expressions.
    fn parse_factor(&mut self) -> Result<AstNode, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Not => {
                self.advance();
                let argument = self.parse_factor()?;
                Ok(AstNode::Not {
                    argument: Box::new(argument),
                })
            }

            Token::Field(name) => {
                self.advance();

                if self.check(&Token::Any) {
                    self.advance();
                    let condition = self.parse_comparison()?;
                    return Ok(AstNode::Any {
                        field: Identifier { name },
                        condition: Box::new(condition),
                    });
                }

                if self.check(&Token::Is) {
                    self.advance();
                    return match mem::replace(&mut self.current_token, Token::Eof) {
                        Token::TypeName(type_keyword) => {
                            self.advance();
                            Ok(AstNode::Is {
                                field: Identifier { name },
                                type_keyword,
                            })
                        }
                        found => Err(ParseError::ExpectedTypeKeyword { found }),
                    };
                }

                Ok(AstNode::Identifier(Identifier { name }))
            }

            Token::IntLiteral(text) => {
                self.advance();
                Ok(AstNode::Literal(Literal::Integer(integer_from_literal(
                    &text,
                ))))
            }
            Token::FloatLiteral(text) => {
                self.advance();
                Ok(AstNode::Literal(Literal::Float(float_from_literal(&text))))
            }
            Token::StringLiteral(s) => {
                self.advance();
                Ok(AstNode::Literal(Literal::String(s)))
            }
            Token::BoolLiteral(b) => {
                self.advance();
                Ok(AstNode::Literal(Literal::Boolean(b)))
            }

            Token::LParen => {
                self.advance();
                let node = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(node)
            }

            found => Err(ParseError::UnexpectedFactorToken { found }),
        }
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::StringLiteral(s) => {
                self.advance();
                Ok(s)
            }
            found => Err(ParseError::UnexpectedToken {
                expected: Token::StringLiteral(String::new()),
                found,
            }),
        }
    }

    fn parse_number(&mut self) -> Result<Number, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::IntLiteral(text) => {
                self.advance();
                Ok(Number::Integer(integer_from_literal(&text)))
            }
            Token::FloatLiteral(text) => {
                self.advance();
                Ok(Number::Float(float_from_literal(&text)))
            }
            found => Err(ParseError::ExpectedNumber { found }),
        }
    }

    /// Comma-separated literal list between parentheses; the parentheses
    /// themselves belong to the caller.
    fn parse_value_list(&mut self) -> Result<Vec<Literal>, ParseError> {
        let mut values = Vec::new();

        while !self.check(&Token::RParen) {
            match &self.current_token {
                Token::IntLiteral(text) => {
                    values.push(Literal::Integer(integer_from_literal(text)));
                    self.advance();
                }
                Token::FloatLiteral(text) => {
                    values.push(Literal::Float(float_from_literal(text)));
                    self.advance();
                }
                Token::StringLiteral(s) => {
                    values.push(Literal::String(s.clone()));
                    self.advance();
                }
                Token::Comma => self.advance(),
                Token::Eof => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        context: "value list",
                    });
                }
                found => {
                    return Err(ParseError::UnexpectedListToken {
                        context: "value list",
                        found: found.clone(),
                    });
                }
            }
        }

        Ok(values)
    }

    /// Either a single integer or a parenthesized comma-separated integer list.
    fn parse_bit_values(&mut self) -> Result<Bits, ParseError> {
        if self.check(&Token::LParen) {
            self.advance();
            let mut bits = Vec::new();

            while !self.check(&Token::RParen) {
                match &self.current_token {
                    Token::IntLiteral(text) => {
                        bits.push(integer_from_literal(text));
                        self.advance();
                    }
                    Token::Comma => self.advance(),
                    Token::Eof => {
                        return Err(ParseError::UnexpectedEndOfInput {
                            context: "bit values",
                        });
                    }
                    found => {
                        return Err(ParseError::UnexpectedListToken {
                            context: "bit values",
                            found: found.clone(),
                        });
                    }
                }
            }

            self.expect(Token::RParen)?;
            return Ok(Bits::Mask(bits));
        }

        if let Token::IntLiteral(text) = &self.current_token {
            let bit = integer_from_literal(text);
            self.advance();
            return Ok(Bits::Single(bit));
        }

        Err(ParseError::ExpectedBitValues {
            found: self.current_token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::integer_from_literal;

    #[test]
    fn test_integer_from_literal_radixes() {
        assert_eq!(integer_from_literal("42"), 42);
        assert_eq!(integer_from_literal("-58"), -58);
        assert_eq!(integer_from_literal("0b1011"), 11);
        assert_eq!(integer_from_literal("0xff0"), 4080);
        assert_eq!(integer_from_literal("-0x10"), -16);
        assert_eq!(integer_from_literal("-0b101"), -5);
    }
}
