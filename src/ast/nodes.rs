use crate::ast::{BitOp, ComparisonOp, InOp, LogicalOp};

/// A field name, including dotted paths for nested-document access.
///
/// The lexer admits `.`, `-` and `_` inside identifiers, so `user.address`
/// arrives as a single identifier and is emitted verbatim as a document key.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

/// A literal value appearing in a filter expression.
///
/// The runtime type is fixed at parse time and never re-typed: `42` stays an
/// integer, `42.0` stays a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl Literal {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Literal::Integer(n) => serde_json::Value::Number((*n).into()),
            Literal::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Literal::String(s) => serde_json::Value::String(s.clone()),
            Literal::Boolean(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// A numeric operand of `MOD` or `SIZE`.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Number::Integer(n) => serde_json::Value::Number((*n).into()),
            Number::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

/// The operand of a `BIT` test: a single bitmask or a list of bit positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Bits {
    Single(i64),
    Mask(Vec<i64>),
}

impl Bits {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Bits::Single(n) => serde_json::Value::Number((*n).into()),
            Bits::Mask(bits) => serde_json::Value::Array(
                bits.iter()
                    .map(|b| serde_json::Value::Number((*b).into()))
                    .collect(),
            ),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed filter expression.
///
/// Nodes are built bottom-up in a single parser pass and are immutable
/// afterwards; the generator only reads them. Every `field` slot holds an
/// [`Identifier`] by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A bare field name, used as a comparison operand
    Identifier(Identifier),

    /// A literal value, used as a comparison operand or list element
    Literal(Literal),

    /// Comparison between a field and a literal, or between two fields
    ///
    /// # Examples
    /// ```text
    /// age > 18
    /// field1 != field2
    /// ```
    Comparison {
        operator: ComparisonOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// `AND` / `OR` / `NOR` connective; chains nest as left-leaning binary trees
    Logical {
        operator: LogicalOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// `NOT` prefix
    ///
    /// Negation is generated only for comparison, `MATCHES`, `IN` and `HAS`
    /// arguments; other argument shapes compile to an empty document.
    Not { argument: Box<AstNode> },

    /// `field IN (...)` / `field NOT IN (...)`
    In {
        operator: InOp,
        field: Identifier,
        values: Vec<Literal>,
    },

    /// `field MOD divisor = remainder`
    Mod {
        field: Identifier,
        divisor: Number,
        remainder: Number,
    },

    /// `field MATCHES "pattern"` with optional regex options string
    Matches {
        field: Identifier,
        pattern: String,
        options: String,
    },

    /// `field ANY condition` - element match over an array field
    Any {
        field: Identifier,
        condition: Box<AstNode>,
    },

    /// `field CONTAINS (...)`
    Contains {
        field: Identifier,
        values: Vec<Literal>,
    },

    /// `field SIZE n`
    Size { field: Identifier, size: Number },

    /// `HAS field`
    Has { field: Identifier },

    /// `field BIT ALL_SET bits` and friends
    Bit {
        field: Identifier,
        operator: BitOp,
        bits: Bits,
    },

    /// `field IS typeKeyword`
    Is {
        field: Identifier,
        type_keyword: String,
    },
}
