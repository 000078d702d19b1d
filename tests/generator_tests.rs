// tests/generator_tests.rs

use serde_json::{Value, json};
use sieve_lang::compile;

fn compile_json(input: &str) -> Value {
    Value::Object(
        compile(input).unwrap_or_else(|e| panic!("Failed to compile {:?}: {}", input, e)),
    )
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_basic_comparison_queries() {
    let test_cases = vec![
        ("age > 18", json!({"age": {"gt": 18}})),
        ("age >= 18", json!({"age": {"gte": 18}})),
        ("age < 18.11", json!({"age": {"lt": 18.11}})),
        ("age <= 18", json!({"age": {"lte": 18}})),
        ("age = 18", json!({"age": {"eq": 18}})),
        ("age != 18", json!({"age": {"ne": 18}})),
    ];

    for (input, expected) in test_cases {
        assert_eq!(compile_json(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_field_vs_field_comparison_queries() {
    let test_cases = vec![
        (
            "field1 > field2",
            json!({"expr": {"gt": ["field1", "field2"]}}),
        ),
        (
            "field1 >= field2",
            json!({"expr": {"gte": ["field1", "field2"]}}),
        ),
        (
            "field1 < field2",
            json!({"expr": {"lt": ["field1", "field2"]}}),
        ),
        (
            "field1 <= field2",
            json!({"expr": {"lte": ["field1", "field2"]}}),
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(compile_json(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_literal_value_is_reversed_when_written_first() {
    assert_eq!(compile_json("18 < age"), json!({"age": {"lt": 18}}));
}

#[test]
fn test_string_and_boolean_comparisons() {
    assert_eq!(
        compile_json("name = 'Alice'"),
        json!({"name": {"eq": "Alice"}})
    );
    assert_eq!(
        compile_json("active = TRUE"),
        json!({"active": {"eq": true}})
    );
    assert_eq!(
        compile_json("active != FALSE"),
        json!({"active": {"ne": false}})
    );
}

#[test]
fn test_dotted_path_key_is_verbatim() {
    assert_eq!(
        compile_json("user.address.city = 'Oslo'"),
        json!({"user.address.city": {"eq": "Oslo"}})
    );
}

#[test]
fn test_radix_literal_values() {
    assert_eq!(compile_json("f = 0b1011"), json!({"f": {"eq": 11}}));
    assert_eq!(compile_json("f = 0xff0"), json!({"f": {"eq": 4080}}));
    assert_eq!(compile_json("f = -58"), json!({"f": {"eq": -58}}));
}

// ============================================================================
// Logical connectives
// ============================================================================

#[test]
fn test_logical_queries() {
    assert_eq!(
        compile_json("a = 1 AND b = 2"),
        json!({"and": [{"a": {"eq": 1}}, {"b": {"eq": 2}}]})
    );
    assert_eq!(
        compile_json("a = 1 OR b = 2"),
        json!({"or": [{"a": {"eq": 1}}, {"b": {"eq": 2}}]})
    );
    assert_eq!(
        compile_json("a = 1 NOR b = 2"),
        json!({"nor": [{"a": {"eq": 1}}, {"b": {"eq": 2}}]})
    );
}

#[test]
fn test_logical_chain_nests_left_leaning() {
    assert_eq!(
        compile_json("a>1 AND b>2 AND c>3"),
        json!({"and": [
            {"and": [{"a": {"gt": 1}}, {"b": {"gt": 2}}]},
            {"c": {"gt": 3}},
        ]})
    );
}

#[test]
fn test_parentheses_shape_the_tree() {
    assert_eq!(
        compile_json("a>1 AND (b>2 OR c>3)"),
        json!({"and": [
            {"a": {"gt": 1}},
            {"or": [{"b": {"gt": 2}}, {"c": {"gt": 3}}]},
        ]})
    );
}

// ============================================================================
// Negation
// ============================================================================

#[test]
fn test_not_comparison() {
    assert_eq!(
        compile_json("NOT foo = 5"),
        json!({"foo": {"not": {"eq": 5}}})
    );
}

#[test]
fn test_not_field_vs_field_comparison() {
    assert_eq!(
        compile_json("NOT field1 > field2"),
        json!({"expr": {"not": [{"gt": ["field1", "field2"]}]}})
    );
}

#[test]
fn test_not_has() {
    assert_eq!(
        compile_json("NOT HAS x"),
        json!({"x": {"exists": false}})
    );
}

#[test]
fn test_not_matches() {
    assert_eq!(
        compile_json("NOT name MATCHES '^A'"),
        json!({"name": {"not": {"regex": "^A", "options": ""}}})
    );
}

#[test]
fn test_not_in() {
    assert_eq!(
        compile_json("NOT f IN (1, 2)"),
        json!({"f": {"not": {"in": [1, 2]}}})
    );
}

#[test]
fn test_not_of_unsupported_shapes_is_empty() {
    // Negating logical, array, bit and type expressions has no defined output
    let test_cases = vec![
        "NOT (a = 1 AND b = 2)",
        "NOT f MOD 2 = 0",
        "NOT arr SIZE 3",
        "NOT arr CONTAINS (1)",
        "NOT f BIT ALL_SET 5",
        "NOT f IS int",
    ];

    for input in test_cases {
        assert_eq!(compile_json(input), json!({}), "Failed for input: {}", input);
    }
}

// ============================================================================
// Existence, type and regex
// ============================================================================

#[test]
fn test_has_query() {
    assert_eq!(compile_json("HAS email"), json!({"email": {"exists": true}}));
}

#[test]
fn test_is_query() {
    assert_eq!(compile_json("age IS int"), json!({"age": {"type": "int"}}));
    assert_eq!(
        compile_json("id IS objectId"),
        json!({"id": {"type": "objectId"}})
    );
}

#[test]
fn test_matches_query() {
    assert_eq!(
        compile_json("name MATCHES '^A'"),
        json!({"name": {"regex": "^A", "options": ""}})
    );
    assert_eq!(
        compile_json("name MATCHES '^a' 'i'"),
        json!({"name": {"regex": "^a", "options": "i"}})
    );
}

// ============================================================================
// Set, array and bit predicates
// ============================================================================

#[test]
fn test_in_queries() {
    assert_eq!(
        compile_json("field IN (11, 123.1, 'string')"),
        json!({"field": {"in": [11, 123.1, "string"]}})
    );
    assert_eq!(
        compile_json("field NOT IN (11, 123.1, 'string')"),
        json!({"field": {"nin": [11, 123.1, "string"]}})
    );
}

#[test]
fn test_contains_query() {
    assert_eq!(
        compile_json("tags CONTAINS ('a', 'b')"),
        json!({"tags": {"all": ["a", "b"]}})
    );
}

#[test]
fn test_size_query() {
    assert_eq!(compile_json("arr SIZE 10"), json!({"arr": {"size": 10}}));
}

#[test]
fn test_mod_query() {
    assert_eq!(
        compile_json("field MOD 2 = 0"),
        json!({"field": {"mod": [2, 0]}})
    );
}

#[test]
fn test_bit_queries() {
    assert_eq!(
        compile_json("f BIT ALL_SET (1,5)"),
        json!({"f": {"bitsAllSet": [1, 5]}})
    );
    assert_eq!(
        compile_json("f BIT ALL_CLEAR 5"),
        json!({"f": {"bitsAllClear": 5}})
    );
    assert_eq!(
        compile_json("f BIT ANY_SET (0b10, 0x0f)"),
        json!({"f": {"bitsAnySet": [2, 15]}})
    );
    assert_eq!(
        compile_json("f BIT ANY_CLEAR 3"),
        json!({"f": {"bitsAnyClear": 3}})
    );
}

#[test]
fn test_any_query() {
    assert_eq!(
        compile_json("grades ANY score > 90"),
        json!({"grades": {"elemMatch": {"score": {"gt": 90}}}})
    );
}

#[test]
fn test_any_query_with_nested_suffix() {
    assert_eq!(
        compile_json("items ANY qty IN (1, 2)"),
        json!({"items": {"elemMatch": {"qty": {"in": [1, 2]}}}})
    );
}

// ============================================================================
// Shapes with no query meaning
// ============================================================================

#[test]
fn test_bare_identifier_root_is_empty() {
    assert_eq!(compile_json("field"), json!({}));
}

#[test]
fn test_bare_literal_root_is_empty() {
    assert_eq!(compile_json("5"), json!({}));
}

#[test]
fn test_comparison_without_identifier_operand_is_empty() {
    assert_eq!(compile_json("5 = 3"), json!({}));
}
