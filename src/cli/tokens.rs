//! Token-stream dump for debugging filter expressions

/// Render the token stream of a filter, one token per line, in the order the
/// parser would consume them. The trailing `Eof` is included.
pub fn token_lines(filter: &str) -> Vec<String> {
    crate::tokenize(filter)
        .iter()
        .map(|token| format!("{:?}", token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::token_lines;

    #[test]
    fn test_token_lines_ends_with_eof() {
        let lines = token_lines("age > 18");
        assert_eq!(
            lines,
            vec![
                "Field(\"age\")".to_string(),
                "Gt".to_string(),
                "IntLiteral(\"18\")".to_string(),
                "Eof".to_string(),
            ]
        );
    }
}
