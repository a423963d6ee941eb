//! Per-packet scratch access: state slot and group counters.
//!
//! The counters themselves — their allocation, their lifecycle across group
//! join/leave — belong to a subsystem this crate does not implement; what's
//! here is exactly the contract a kernel-side function sees: bounds-checked
//! read access to `ctx.counter[n]`, and the packet's `state` slot.

use std::sync::atomic::AtomicU64;

use crate::control_block::Packet;

/// Number of sparse counters referenced by a group's context.
///
/// Not present in the filtered kernel header this crate is grounded on;
/// assumed from the historical PFQ default.
pub const Q_MAX_COUNTERS: usize = 64;

/// `get_counter(pkt, n)`: a reference to `ctx.counter[n]` when `ctx` is
/// bound and `0 <= n < Q_MAX_COUNTERS`, `None` (the null sentinel)
/// otherwise.
pub fn get_counter(pkt: &Packet, n: usize) -> Option<&AtomicU64> {
    if n >= Q_MAX_COUNTERS {
        return None;
    }
    pkt.ctx.as_ref().map(|ctx| &ctx.counters[n])
}

/// `get_state(pkt)`: read the packet's 64-bit scratch slot.
pub fn get_state(pkt: &Packet) -> u64 {
    pkt.action.state
}

/// `set_state(pkt, v)`: write the packet's 64-bit scratch slot.
pub fn set_state(pkt: &mut Packet, v: u64) {
    pkt.action.state = v;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_block::PerGroupContext;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[test]
    fn get_counter_rejects_out_of_range_index() {
        let pkt = Packet::new(Some(Arc::new(PerGroupContext::default())));
        assert!(get_counter(&pkt, Q_MAX_COUNTERS).is_none());
    }

    #[test]
    fn get_counter_returns_none_without_a_bound_context() {
        let pkt = Packet::new(None);
        assert!(get_counter(&pkt, 0).is_none());
    }

    #[test]
    fn get_counter_reads_through_to_the_group_context() {
        let ctx = Arc::new(PerGroupContext::default());
        ctx.counters[3].store(42, Ordering::Relaxed);
        let pkt = Packet::new(Some(ctx));
        let counter = get_counter(&pkt, 3).unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn state_round_trips() {
        let mut pkt = Packet::new(None);
        assert_eq!(get_state(&pkt), 0);
        set_state(&mut pkt, 7);
        assert_eq!(get_state(&pkt), 7);
    }
}
