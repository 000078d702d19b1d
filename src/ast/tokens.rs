/// Lexical tokens produced by the lexer.
///
/// Tokens that carry source text (literals, field names, type names) hold it
/// as a payload; literal number tokens keep the raw text, including any sign
/// and `0b`/`0x` radix prefix, and are base-converted by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Punctuation
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Comparison operators
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,

    /// Set membership (`field IN (1, 2)`)
    In,

    // Logical connectives
    And,
    Or,
    Nor,
    Not,

    // Field-test keywords
    /// Type check (`field IS int`)
    Is,
    /// Existence check (`HAS field`)
    Has,
    /// Modular arithmetic (`field MOD 2 = 0`)
    Mod,
    /// Regex match (`field MATCHES "^a"`)
    Matches,
    /// Array containment (`field CONTAINS (1, 2)`)
    Contains,
    /// Element match (`field ANY sub > 5`)
    Any,
    /// Array length (`field SIZE 3`)
    Size,
    /// Bitmask test (`field BIT ALL_SET 5`)
    Bit,

    // Bit-test sub-operators
    AllSet,
    AllClear,
    AnySet,
    AnyClear,

    // Literals
    /// Integer literal text, possibly signed, possibly `0b`/`0x` prefixed
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -58
    /// 0b1011
    /// 0xff0
    /// ```
    IntLiteral(String),

    /// Decimal float literal text (exactly one embedded `.`)
    FloatLiteral(String),

    /// String literal content, quotes stripped, no escape processing
    StringLiteral(String),

    /// `TRUE` or `FALSE`
    BoolLiteral(bool),

    /// A lowercase type keyword (`int`, `string`, `objectId`, ...)
    TypeName(String),

    /// Any identifier that is not a reserved word; field names, including
    /// dotted paths (`user.address.city`) which lex as a single token
    Field(String),

    /// A character the lexer does not recognize; rejected by the parser
    Unknown(String),

    /// End of input
    Eof,
}

/// Look up reserved text in the fixed keyword table.
///
/// The table is case-sensitive: `AND` is a connective, `and` is a plain
/// field name; `int` is a type keyword, `INT` is a field name. Returns
/// `None` for anything that should lex as [`Token::Field`].
pub fn lookup_keyword(ident: &str) -> Option<Token> {
    match ident {
        "AND" => Some(Token::And),
        "NOT" => Some(Token::Not),
        "OR" => Some(Token::Or),
        "NOR" => Some(Token::Nor),
        "IN" => Some(Token::In),
        "IS" => Some(Token::Is),
        "HAS" => Some(Token::Has),
        "MOD" => Some(Token::Mod),
        "MATCHES" => Some(Token::Matches),
        "CONTAINS" => Some(Token::Contains),
        "ANY" => Some(Token::Any),
        "SIZE" => Some(Token::Size),
        "BIT" => Some(Token::Bit),
        "ALL_SET" => Some(Token::AllSet),
        "ALL_CLEAR" => Some(Token::AllClear),
        "ANY_SET" => Some(Token::AnySet),
        "ANY_CLEAR" => Some(Token::AnyClear),
        "TRUE" => Some(Token::BoolLiteral(true)),
        "FALSE" => Some(Token::BoolLiteral(false)),

        // Type keywords accepted after IS
        "double" | "string" | "object" | "array" | "binData" | "objectId" | "bool" | "date"
        | "null" | "regex" | "javascript" | "int" | "timestamp" | "long" | "decimal"
        | "minKey" | "maxKey" => Some(Token::TypeName(ident.to_string())),

        _ => None,
    }
}
