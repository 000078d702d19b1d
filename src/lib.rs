//! Sieve - a filter expression language for document databases.
//!
//! Compiles human-readable filter strings like `age > 18 AND HAS email` into
//! structured, nested query documents, so callers can accept textual filters
//! without exposing the query engine's native syntax.
//!
//! Pipeline: [`Lexer`] (pull-based token stream) → [`Parser`] (single-pass
//! recursive descent into an [`AstNode`]) → [`generate`] (tree walk emitting
//! the [`FilterDocument`]). [`compile`] wires the three together.

pub mod ast;
pub mod generator;
pub mod lexer;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{AstNode, Token};
pub use generator::{FilterDocument, generate};
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};

/// Compile a filter expression into a query document.
///
/// Empty or whitespace-only input is an empty query, returned without
/// invoking the scanner or parser. Syntax errors surface as [`ParseError`];
/// there is no partial output.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sieve_lang::compile;
///
/// let doc = compile("age > 18").unwrap();
/// assert_eq!(serde_json::Value::Object(doc), json!({"age": {"gt": 18}}));
///
/// let doc = compile("NOT HAS deleted_at").unwrap();
/// assert_eq!(
///     serde_json::Value::Object(doc),
///     json!({"deleted_at": {"exists": false}}),
/// );
/// ```
pub fn compile(input: &str) -> Result<FilterDocument, ParseError> {
    if input.trim().is_empty() {
        return Ok(FilterDocument::new());
    }

    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let tree = parser.parse()?;

    Ok(generate(&tree))
}

/// Tokenize a filter expression, draining the lexer through [`Token::Eof`]
/// (which is included as the final element).
///
/// The lexer never fails; unrecognized characters come back as
/// [`Token::Unknown`].
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
