//! The in-kernel action contract: the per-packet control block and the
//! pure mutators/predicates a function implementation uses to observe and
//! change it.

pub mod control_block;
pub mod counters;
pub mod diagnostics;
pub mod mutators;
pub mod predicates;

pub use control_block::{ActionKind, AttrFlags, ControlBlock, Packet, PerGroupContext};
pub use counters::{get_counter, get_state, set_state, Q_MAX_COUNTERS};
pub use mutators::{broadcast, class, class_steering, copy, drop, steal, steering, stop, to_kernel};
pub use predicates::{has_ret_to_kernel, has_stolen, has_stop, is_copy, is_drop, is_steering, is_stolen};
