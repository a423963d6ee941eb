//! AST construction error type.

/// Error raised by a constructor when a node cannot be built.
///
/// `SortMismatch` has no variant here: sort correctness is enforced by
/// Rust's type system (see [`crate::node`]) rather than checked and
/// reported at runtime, so there is nothing for this type to represent.
/// Likewise there is no `CompositionMismatch` — every `MNode` shares one
/// Kleisli arrow shape, so `compose` never fails.
#[derive(Debug)]
pub enum AstError {
    /// A node was constructed with an empty symbol name.
    EmptySymbol,
    /// A symbol failed validation (length bound, character set).
    InvalidArgument(String),
}

impl std::fmt::Display for AstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AstError::EmptySymbol => write!(f, "node constructed without a symbol"),
            AstError::InvalidArgument(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for AstError {}

impl From<String> for AstError {
    fn from(s: String) -> Self {
        AstError::InvalidArgument(s)
    }
}
