//! Wire-format constants shared by the Argument/Descriptor types.

/// Number of argument slots carried by every descriptor.
pub const MAX_ARGS: usize = 4;

/// Upper bound on a descriptor's `symbol` length.
///
/// The kernel resolves `symbol` against a fixed-size registry key; this
/// mirrors that budget so oversized names are rejected at construction
/// rather than silently truncated on the wire.
pub const MAX_SYMBOL_LEN: usize = 64;

/// Validate that a symbol is non-empty, within the length budget, and safe
/// to carry across the wire (printable ASCII only — the kernel symbol
/// table keys on exact byte match, so anything else can never resolve).
///
/// Mirrors `ExternalBuiltin::validate_symbol`'s shape: a single pass over
/// the characters, first error wins.
pub fn validate_symbol(symbol: &str) -> Result<(), String> {
    if symbol.is_empty() {
        return Err("symbol must not be empty".to_string());
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(format!(
            "symbol '{symbol}' exceeds the {MAX_SYMBOL_LEN}-byte bound"
        ));
    }
    for c in symbol.chars() {
        if !c.is_ascii_graphic() {
            return Err(format!(
                "symbol '{symbol}' contains non-printable-ASCII character {c:?}"
            ));
        }
    }
    Ok(())
}
