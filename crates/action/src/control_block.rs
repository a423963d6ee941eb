//! The per-packet control block: the scratch region every kernel-side
//! function implementation reads and mutates through `Packet`.
//!
//! `ControlBlock` mirrors the historical in-packet layout's fixed-width
//! fields and is size-asserted against the platform's scratch budget. The
//! block is never serialized across a boundary — it lives in kernel memory
//! for the duration of one packet's evaluation — so natural alignment
//! (`repr(C)`) is used rather than byte packing; the size budget is still
//! enforced. The per-group counters context (`ctx`) is deliberately kept
//! outside this struct — it is a handle to a subsystem this crate does not
//! own, not part of the size-budgeted scratch area.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use bitflags::bitflags;
use static_assertions::const_assert;

use crate::counters::Q_MAX_COUNTERS;

/// Historical budget for the in-packet scratch region.
pub const CONTROL_BLOCK_BUDGET: usize = 48;

/// `type` field of the action: drop, copy, or steer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActionKind {
    Drop = 0,
    Copy = 1,
    Steer = 2,
}

bitflags! {
    /// `attr` bitset: mutually-informative flags on the action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttrFlags: u8 {
        const STOP = 0b001;
        const STOLEN = 0b010;
        const RET_TO_KERNEL = 0b100;
    }
}

/// The fixed-layout per-packet action scratch area.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ControlBlock {
    pub class_mask: u64,
    pub hash: u32,
    pub kind: ActionKind,
    pub attr: AttrFlags,
    pub group_mask: u64,
    pub state: u64,
    pub direct_skb: bool,
    pub right: bool,
}

const_assert!(std::mem::size_of::<ControlBlock>() <= CONTROL_BLOCK_BUDGET);

impl Default for ControlBlock {
    fn default() -> Self {
        ControlBlock {
            class_mask: 0,
            hash: 0,
            kind: ActionKind::Drop,
            attr: AttrFlags::empty(),
            group_mask: 0,
            state: 0,
            direct_skb: false,
            right: false,
        }
    }
}

/// Per-group counters referenced by a packet's control block through
/// `ctx`. Sparse in the sense that increments may race across CPUs without
/// coordination; plain atomics stand in for that tolerance here.
#[derive(Debug)]
pub struct PerGroupContext {
    pub counters: [AtomicU64; Q_MAX_COUNTERS],
}

impl Default for PerGroupContext {
    fn default() -> Self {
        // `std` only derives `Default` for arrays up to length 32; at
        // `Q_MAX_COUNTERS = 64` that impl doesn't apply, so build it by hand.
        Self {
            counters: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

/// A packet under evaluation: the wire-shaped control block plus a handle
/// to the group it is being evaluated against.
///
/// Initial state at the start of a group's evaluation: `kind = Drop`,
/// `class_mask = 0`, `attr` empty, `state = 0`, `right = false`, `ctx`
/// bound to the group's counters.
#[derive(Debug, Clone)]
pub struct Packet {
    pub action: ControlBlock,
    pub ctx: Option<Arc<PerGroupContext>>,
}

impl Packet {
    /// A freshly initialized packet bound to `ctx` (or none, for a group
    /// with no counters attached).
    pub fn new(ctx: Option<Arc<PerGroupContext>>) -> Self {
        Packet {
            action: ControlBlock::default(),
            ctx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_block_fits_the_historical_budget() {
        assert!(std::mem::size_of::<ControlBlock>() <= CONTROL_BLOCK_BUDGET);
    }

    #[test]
    fn fresh_packet_starts_in_drop_state() {
        let pkt = Packet::new(None);
        assert_eq!(pkt.action.kind, ActionKind::Drop);
        assert_eq!(pkt.action.class_mask, 0);
        assert!(pkt.action.attr.is_empty());
        assert_eq!(pkt.action.state, 0);
        assert!(!pkt.action.right);
    }
}
