//! Kleisli composition over monadic-function nodes.

use std::ops::Shr;

use crate::node::MNode;

/// `f >-> g`: apply `f`, then `g`, to the same packet. Associative; the
/// serializer realizes associativity by flattening nested `Comp` nodes into
/// a linear descriptor sequence rather than by rebalancing the tree.
pub fn compose(f: MNode, g: MNode) -> MNode {
    MNode::comp(f, g)
}

/// `f >> g` spells Kleisli composition the way the original eDSL's
/// `operator>>` does.
impl Shr for MNode {
    type Output = MNode;

    fn shr(self, rhs: MNode) -> MNode {
        compose(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shr_operator_builds_comp() {
        let f = MNode::mf0("ip").unwrap();
        let g = MNode::mf0("udp").unwrap();
        match f >> g {
            MNode::Comp { .. } => {}
            _ => panic!("expected Comp"),
        }
    }

    #[test]
    fn compose_matches_shr() {
        let f = MNode::mf0("ip").unwrap();
        let g = MNode::mf0("udp").unwrap();
        match compose(f, g) {
            MNode::Comp { .. } => {}
            _ => panic!("expected Comp"),
        }
    }
}
