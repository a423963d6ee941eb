//! Wire-level types shared between the PFQ userspace DSL and the kernel
//! descriptor array it compiles down to: [`Argument`] and [`Descriptor`].

pub mod argument;
pub mod descriptor;
pub mod limits;

pub use argument::{Argument, Datum, NOT_A_COLLECTION};
pub use descriptor::{Descriptor, TERMINAL};
pub use limits::{validate_symbol, MAX_ARGS, MAX_SYMBOL_LEN};
