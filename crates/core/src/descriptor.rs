//! The Descriptor flat record.
//!
//! A `Descriptor` is one row of the serialized array the compiler hands to
//! the kernel: a symbol name, up to [`MAX_ARGS`](crate::limits::MAX_ARGS)
//! arguments, and a `next` index chaining it to the following step in the
//! pipeline.

use std::fmt;

use crate::argument::Argument;
use crate::limits::MAX_ARGS;

/// Sentinel `next` value meaning "this is the last descriptor".
pub const TERMINAL: usize = usize::MAX;

/// One row of the lowered descriptor array.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Registered kernel symbol this descriptor invokes.
    pub symbol: String,
    /// Up to [`MAX_ARGS`] arguments, left-packed with [`Argument::Null`]
    /// trailing slots.
    pub arg: [Argument; MAX_ARGS],
    /// Index of the next descriptor in this chain, or [`TERMINAL`].
    pub next: usize,
}

impl Descriptor {
    /// Build a descriptor with up to `MAX_ARGS` arguments, padding the rest
    /// with `Argument::Null`. Panics if `args.len() > MAX_ARGS` — callers in
    /// this crate always pass a statically bounded slice, so this is a
    /// programmer error, not a runtime condition.
    pub fn new(symbol: impl Into<String>, args: Vec<Argument>, next: usize) -> Self {
        assert!(
            args.len() <= MAX_ARGS,
            "descriptor '{}' has {} args, max is {MAX_ARGS}",
            symbol.into(),
            args.len()
        );
        let mut arg: [Argument; MAX_ARGS] = Default::default();
        for (slot, a) in arg.iter_mut().zip(args) {
            *slot = a;
        }
        Descriptor {
            symbol: symbol.into(),
            arg,
            next,
        }
    }

    /// Number of non-`Null` leading arguments actually in use.
    pub fn arity(&self) -> usize {
        self.arg.iter().filter(|a| !matches!(a, Argument::Null)).count()
    }

    /// `true` if this descriptor terminates its chain.
    pub fn is_terminal(&self) -> bool {
        self.next == TERMINAL
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        for a in self.arg.iter().take(self.arity()) {
            write!(f, " {a}")?;
        }
        if self.is_terminal() {
            write!(f, " -> .")
        } else {
            write!(f, " -> {}", self.next)
        }
    }
}
