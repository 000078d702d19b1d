//! Compile filter expressions into query documents

use super::CliError;

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// The filter expression to compile
    pub filter: String,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't emit a document
    pub syntax_only: bool,
}

/// Result of a compile operation
#[derive(Debug)]
pub enum CompileResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Filter compiled successfully into a query document
    Document(serde_json::Value),
}

/// Execute a sieve compile operation
pub fn execute_compile(options: &CompileOptions) -> Result<CompileResult, CliError> {
    let document = crate::compile(options.filter.trim_end())?;

    if options.syntax_only {
        return Ok(CompileResult::SyntaxValid);
    }

    Ok(CompileResult::Document(serde_json::Value::Object(document)))
}
