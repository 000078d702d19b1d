//! Tree-walking generator from the filter AST to a query document.
//!
//! The output is a nested `serde_json` map mirroring a document-database
//! query engine's operator grammar. Key spelling and nesting shape are part
//! of the contract: `age > 18` becomes `{"age": {"gt": 18}}`, field-vs-field
//! comparisons become `{"expr": {"gt": ["field1", "field2"]}}`, and so on.
//!
//! Generation is total and infallible. AST shapes with no defined output
//! (negating a logical expression, a bare identifier at the root) produce an
//! empty document rather than an error; that is a documented limitation of
//! the language, not an error channel.

use serde_json::{Map, Value};

use crate::ast::{AstNode, BitOp, ComparisonOp, Identifier, InOp, Literal, LogicalOp};

/// The structured filter document emitted by [`generate`].
///
/// Keys are field paths (verbatim, including dotted access) or one of the
/// fixed operator keys; values are literals, nested documents, or arrays of
/// either. The map serializes directly as a query-engine filter.
pub type FilterDocument = Map<String, Value>;

// Engine operator keys for each DSL operator. With the operators modeled as
// closed enums these lookups are exhaustive and cannot fail.

fn comparison_key(operator: ComparisonOp) -> &'static str {
    match operator {
        ComparisonOp::Lt => "lt",
        ComparisonOp::Lte => "lte",
        ComparisonOp::Gt => "gt",
        ComparisonOp::Gte => "gte",
        ComparisonOp::Eq => "eq",
        ComparisonOp::Ne => "ne",
    }
}

fn in_key(operator: InOp) -> &'static str {
    match operator {
        InOp::In => "in",
        InOp::NotIn => "nin",
    }
}

fn logical_key(operator: LogicalOp) -> &'static str {
    match operator {
        LogicalOp::And => "and",
        LogicalOp::Or => "or",
        LogicalOp::Nor => "nor",
    }
}

fn bit_key(operator: BitOp) -> &'static str {
    match operator {
        BitOp::AllSet => "bitsAllSet",
        BitOp::AllClear => "bitsAllClear",
        BitOp::AnySet => "bitsAnySet",
        BitOp::AnyClear => "bitsAnyClear",
    }
}

/// `{field: {key: value}}`
fn field_doc(field: &Identifier, key: &str, value: Value) -> FilterDocument {
    let mut inner = Map::new();
    inner.insert(key.to_string(), value);

    let mut doc = Map::new();
    doc.insert(field.name.clone(), Value::Object(inner));
    doc
}

/// Compile an AST into a filter document.
///
/// Dispatches once per node; `NOT` dispatches on its argument's variant and
/// supports exactly comparisons, `MATCHES`, `IN` and `HAS`. Everything the
/// generator does not support compiles to an empty document.
pub fn generate(tree: &AstNode) -> FilterDocument {
    match tree {
        AstNode::Not { argument } => match &**argument {
            AstNode::Comparison {
                operator,
                left,
                right,
            } => generate_comparison(*operator, left, right, true),
            AstNode::Matches {
                field,
                pattern,
                options,
            } => generate_matches(field, pattern, options, true),
            AstNode::In {
                operator,
                field,
                values,
            } => generate_in(*operator, field, values, true),
            AstNode::Has { field } => field_doc(field, "exists", Value::Bool(false)),
            // Negating logical, MOD, SIZE, CONTAINS, BIT, ANY and IS
            // expressions has no defined output
            _ => FilterDocument::new(),
        },

        AstNode::Is {
            field,
            type_keyword,
        } => field_doc(field, "type", Value::String(type_keyword.clone())),

        AstNode::Has { field } => field_doc(field, "exists", Value::Bool(true)),

        AstNode::Matches {
            field,
            pattern,
            options,
        } => generate_matches(field, pattern, options, false),

        AstNode::Bit {
            field,
            operator,
            bits,
        } => field_doc(field, bit_key(*operator), bits.to_json()),

        AstNode::Contains { field, values } => field_doc(
            field,
            "all",
            Value::Array(values.iter().map(Literal::to_json).collect()),
        ),

        AstNode::Size { field, size } => field_doc(field, "size", size.to_json()),

        AstNode::Mod {
            field,
            divisor,
            remainder,
        } => field_doc(
            field,
            "mod",
            Value::Array(vec![divisor.to_json(), remainder.to_json()]),
        ),

        AstNode::Any { field, condition } => {
            field_doc(field, "elemMatch", Value::Object(generate(condition)))
        }

        AstNode::Logical {
            operator,
            left,
            right,
        } => {
            let mut doc = Map::new();
            doc.insert(
                logical_key(*operator).to_string(),
                Value::Array(vec![
                    Value::Object(generate(left)),
                    Value::Object(generate(right)),
                ]),
            );
            doc
        }

        AstNode::Comparison {
            operator,
            left,
            right,
        } => generate_comparison(*operator, left, right, false),

        AstNode::In {
            operator,
            field,
            values,
        } => generate_in(*operator, field, values, false),

        // A bare identifier or literal at the root has no query meaning
        AstNode::Identifier(_) | AstNode::Literal(_) => FilterDocument::new(),
    }
}

fn generate_comparison(
    operator: ComparisonOp,
    left: &AstNode,
    right: &AstNode,
    negated: bool,
) -> FilterDocument {
    let key = comparison_key(operator);

    // Both sides are fields: expression-evaluation form. Negation wraps the
    // whole comparison object in the `not` array form.
    if let (AstNode::Identifier(l), AstNode::Identifier(r)) = (left, right) {
        let mut comparison = Map::new();
        comparison.insert(
            key.to_string(),
            Value::Array(vec![
                Value::String(l.name.clone()),
                Value::String(r.name.clone()),
            ]),
        );

        let expression = if negated {
            let mut wrapper = Map::new();
            wrapper.insert(
                "not".to_string(),
                Value::Array(vec![Value::Object(comparison)]),
            );
            wrapper
        } else {
            comparison
        };

        let mut doc = Map::new();
        doc.insert("expr".to_string(), Value::Object(expression));
        return doc;
    }

    // One field and one literal, in either order
    let (field, value) = match (left, right) {
        (AstNode::Identifier(field), AstNode::Literal(value)) => (field, value),
        (AstNode::Literal(value), AstNode::Identifier(field)) => (field, value),
        // No field operand; nothing sensible to emit
        _ => return FilterDocument::new(),
    };

    let mut comparison = Map::new();
    comparison.insert(key.to_string(), value.to_json());

    if negated {
        field_doc(field, "not", Value::Object(comparison))
    } else {
        let mut doc = Map::new();
        doc.insert(field.name.clone(), Value::Object(comparison));
        doc
    }
}

fn generate_matches(
    field: &Identifier,
    pattern: &str,
    options: &str,
    negated: bool,
) -> FilterDocument {
    let mut expression = Map::new();
    expression.insert("regex".to_string(), Value::String(pattern.to_string()));
    expression.insert("options".to_string(), Value::String(options.to_string()));

    if negated {
        field_doc(field, "not", Value::Object(expression))
    } else {
        let mut doc = Map::new();
        doc.insert(field.name.clone(), Value::Object(expression));
        doc
    }
}

fn generate_in(
    operator: InOp,
    field: &Identifier,
    values: &[Literal],
    negated: bool,
) -> FilterDocument {
    let mut expression = Map::new();
    expression.insert(
        in_key(operator).to_string(),
        Value::Array(values.iter().map(Literal::to_json).collect()),
    );

    if negated {
        field_doc(field, "not", Value::Object(expression))
    } else {
        let mut doc = Map::new();
        doc.insert(field.name.clone(), Value::Object(expression));
        doc
    }
}
