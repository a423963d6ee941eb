//! The pure mutators a kernel-side function implementation applies to a
//! packet's action. Each mirrors one inline function from the original
//! kernel module, including the steal/to_kernel precedence rule.

use crate::control_block::{ActionKind, AttrFlags, Packet};
use crate::diagnostics::{STEAL_AFTER_TO_KERNEL, TO_KERNEL_AFTER_STOLEN};

/// Mark the packet for delivery to subscribed sockets.
pub fn copy(pkt: &mut Packet) {
    pkt.action.kind = ActionKind::Copy;
}

/// Mark the packet to be ignored for this group.
pub fn drop(pkt: &mut Packet) {
    pkt.action.kind = ActionKind::Drop;
}

/// Deliver the packet to every class.
pub fn broadcast(pkt: &mut Packet) {
    pkt.action.kind = ActionKind::Copy;
    pkt.action.class_mask = u64::MAX;
}

/// Restrict delivery to the given class mask without changing the action
/// kind.
pub fn class(pkt: &mut Packet, class_mask: u64) {
    pkt.action.class_mask = class_mask;
}

/// Steer the packet across subscribed sockets by `hash`.
pub fn steering(pkt: &mut Packet, hash: u32) {
    pkt.action.kind = ActionKind::Steer;
    pkt.action.hash = hash;
}

/// Steer the packet, restricted to `class_mask`, by `hash`.
pub fn class_steering(pkt: &mut Packet, class_mask: u64, hash: u32) {
    pkt.action.kind = ActionKind::Steer;
    pkt.action.class_mask = class_mask;
    pkt.action.hash = hash;
}

/// Mark the packet as stolen (forwarded elsewhere, leaving the capture
/// path), unless it is already marked `RET_TO_KERNEL` — applying both is a
/// contradiction, so the second mutator to run is a no-op with a
/// rate-limited diagnostic instead of silently overwriting the first.
pub fn steal(pkt: &mut Packet) {
    if pkt.action.attr.contains(AttrFlags::RET_TO_KERNEL) {
        if STEAL_AFTER_TO_KERNEL.allow() {
            tracing::warn!("steal applied to a packet already marked ret-to-kernel");
        }
        return;
    }
    pkt.action.attr |= AttrFlags::STOLEN;
}

/// Mark the packet to be passed back to the kernel's normal stack, unless
/// it has already been stolen.
pub fn to_kernel(pkt: &mut Packet) {
    if pkt.action.attr.contains(AttrFlags::STOLEN) {
        if TO_KERNEL_AFTER_STOLEN.allow() {
            tracing::warn!("to_kernel applied to an already-stolen packet");
        }
        return;
    }
    pkt.action.attr |= AttrFlags::RET_TO_KERNEL;
}

/// Request that evaluation stop at the first boundary that observes it;
/// does not itself change the action kind.
pub fn stop(pkt: &mut Packet) {
    pkt.action.attr |= AttrFlags::STOP;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steal_after_to_kernel_leaves_ret_to_kernel_only() {
        let mut pkt = Packet::new(None);
        to_kernel(&mut pkt);
        steal(&mut pkt);
        assert_eq!(pkt.action.attr, AttrFlags::RET_TO_KERNEL);
    }

    #[test]
    fn to_kernel_after_steal_leaves_stolen_only() {
        let mut pkt = Packet::new(None);
        steal(&mut pkt);
        to_kernel(&mut pkt);
        assert_eq!(pkt.action.attr, AttrFlags::STOLEN);
    }

    #[test]
    fn broadcast_sets_copy_and_all_classes() {
        let mut pkt = Packet::new(None);
        broadcast(&mut pkt);
        assert_eq!(pkt.action.kind, ActionKind::Copy);
        assert_eq!(pkt.action.class_mask, u64::MAX);
    }

    #[test]
    fn class_does_not_change_action_kind() {
        let mut pkt = Packet::new(None);
        copy(&mut pkt);
        class(&mut pkt, 0b1010);
        assert_eq!(pkt.action.kind, ActionKind::Copy);
        assert_eq!(pkt.action.class_mask, 0b1010);
    }

    #[test]
    fn class_steering_sets_steer_mask_and_hash() {
        let mut pkt = Packet::new(None);
        class_steering(&mut pkt, 0b11, 99);
        assert_eq!(pkt.action.kind, ActionKind::Steer);
        assert_eq!(pkt.action.class_mask, 0b11);
        assert_eq!(pkt.action.hash, 99);
    }

    #[test]
    fn stop_sets_the_flag_without_touching_kind() {
        let mut pkt = Packet::new(None);
        drop(&mut pkt);
        stop(&mut pkt);
        assert_eq!(pkt.action.kind, ActionKind::Drop);
        assert!(pkt.action.attr.contains(AttrFlags::STOP));
    }
}
