//! Boolean tests over an action or a packet, built on top of the mutators'
//! vocabulary (`kind`/`attr`).

use crate::control_block::{ActionKind, AttrFlags, ControlBlock, Packet};

pub fn is_drop(a: &ControlBlock) -> bool {
    a.kind == ActionKind::Drop
}

pub fn is_copy(a: &ControlBlock) -> bool {
    a.kind == ActionKind::Copy
}

pub fn is_steering(a: &ControlBlock) -> bool {
    a.kind == ActionKind::Steer
}

pub fn has_stolen(a: &ControlBlock) -> bool {
    a.attr.contains(AttrFlags::STOLEN)
}

pub fn has_stop(a: &ControlBlock) -> bool {
    a.attr.contains(AttrFlags::STOP)
}

pub fn has_ret_to_kernel(a: &ControlBlock) -> bool {
    a.attr.contains(AttrFlags::RET_TO_KERNEL)
}

/// `is_stolen(pkt) == has_stolen(pkt.action)`.
pub fn is_stolen(pkt: &Packet) -> bool {
    has_stolen(&pkt.action)
}
