//! # Sieve Filter Language - Abstract Syntax Tree
//!
//! This module defines the token model and the Abstract Syntax Tree (AST) for
//! the sieve filter language, a small expression language for writing
//! human-readable filters that compile into document-database query documents.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer, plus the keyword table
//! - **[nodes]** - AST nodes (identifiers, literals, expression variants)
//! - **[operators]** - Comparison, logical, set and bit operators
//!
//! ## Quick Start
//!
//! ```text
//! age > 18 AND name MATCHES "^A" OR tags CONTAINS ("rust", "query")
//! ```
//!
//! This filter compiles into a nested query document:
//!
//! ```text
//! {"or": [{"and": [{"age": {"gt": 18}}, {"name": {"regex": "^A", "options": ""}}]},
//!         {"tags": {"all": ["rust", "query"]}}]}
//! ```
//!
//! ## Core Concepts
//!
//! ### Suffix Operators
//!
//! A field identifier followed by a suffix operator selects the expression
//! variant that is built:
//!
//! - `field = 1`, `field >= 2` - comparisons
//! - `field IN (1, 2)`, `field NOT IN (1, 2)` - set membership
//! - `field MOD 2 = 0` - modular arithmetic
//! - `field MATCHES "^a" "i"` - regex match with optional options
//! - `field CONTAINS (1, 2)` - array containment
//! - `field SIZE 3` - array length
//! - `field BIT ALL_SET (1, 5)` - bitmask tests
//!
//! ### Prefix Keywords
//!
//! - `NOT expr` - negation (supported for comparisons, `MATCHES`, `IN`, `HAS`)
//! - `HAS field` - existence check
//!
//! ### Field Tests
//!
//! - `field IS int` - type check against a type keyword
//! - `field ANY sub > 5` - element match over array fields
//!
//! ### Logical Connectives
//!
//! `AND`, `OR` and `NOR` chain left-associatively, each node holding exactly
//! two branches.

pub mod tokens;
pub mod nodes;
pub mod operators;

pub use tokens::{Token, lookup_keyword};
pub use nodes::{AstNode, Bits, Identifier, Literal, Number};
pub use operators::{BitOp, ComparisonOp, InOp, LogicalOp};
