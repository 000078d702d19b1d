/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonOp {
    /// Equal (`=`)
    Eq,
    /// Not equal (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
}

/// Logical connectives (`AND`, `OR`, `NOR`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicalOp {
    And,
    Or,
    Nor,
}

/// Set membership operators (`IN`, `NOT IN`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InOp {
    In,
    NotIn,
}

/// Bit-test sub-operators following `BIT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BitOp {
    /// `ALL_SET`
    AllSet,
    /// `ALL_CLEAR`
    AllClear,
    /// `ANY_SET`
    AnySet,
    /// `ANY_CLEAR`
    AnyClear,
}
