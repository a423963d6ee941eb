//! Property-based tests over the serializer's correctness invariants.

use pfq_core::{Argument, Descriptor, TERMINAL};
use pfq_lang::node::{MNode, PNode};
use pfq_lang::{serialize, serialize_p};
use proptest::prelude::*;

fn fun_ref_indices(d: &Descriptor) -> impl Iterator<Item = usize> + '_ {
    d.arg.iter().filter_map(|a| match a {
        Argument::FunRef(i) => Some(*i),
        _ => None,
    })
}

fn arb_mnode(depth: u32) -> BoxedStrategy<MNode> {
    let leaf = "[a-z][a-z0-9_]{0,7}"
        .prop_map(|sym| MNode::mf0(sym).unwrap())
        .boxed();
    if depth == 0 {
        return leaf;
    }
    let smaller = arb_mnode(depth - 1);
    prop_oneof![
        leaf,
        (smaller.clone(), smaller.clone())
            .prop_map(|(f, g)| MNode::comp(f, g)),
        (arb_pnode(depth - 1), smaller.clone())
            .prop_map(|(p, c)| MNode::mfpf("when", p, c).unwrap()),
    ]
    .boxed()
}

fn arb_pnode(depth: u32) -> BoxedStrategy<PNode> {
    let leaf = "[a-z][a-z0-9_]{0,7}"
        .prop_map(|sym| PNode::p0(sym).unwrap())
        .boxed();
    if depth == 0 {
        return leaf;
    }
    let smaller = arb_pnode(depth - 1);
    prop_oneof![
        leaf,
        (smaller.clone(), smaller.clone())
            .prop_map(|(a, b)| PNode::cmb2("and", a, b).unwrap()),
    ]
    .boxed()
}

proptest! {
    #[test]
    fn index_containment_holds_for_arbitrary_trees(node in arb_mnode(3)) {
        let (descriptors, size) = serialize(&node, 0);
        prop_assert_eq!(descriptors.len(), size);
        for d in &descriptors {
            for i in fun_ref_indices(d) {
                prop_assert!(i < size);
            }
            prop_assert!(d.next == TERMINAL || d.next < size);
        }
    }

    #[test]
    fn kleisli_associativity_of_layout(
        f in arb_mnode(1), g in arb_mnode(1), h in arb_mnode(1)
    ) {
        let left = MNode::comp(f.clone(), MNode::comp(g.clone(), h.clone()));
        let right = MNode::comp(MNode::comp(f, g), h);
        let (dl, nl) = serialize(&left, 0);
        let (dr, nr) = serialize(&right, 0);
        prop_assert_eq!(nl, nr);
        prop_assert_eq!(dl.len(), dr.len());
        for (a, b) in dl.iter().zip(dr.iter()) {
            prop_assert_eq!(&a.symbol, &b.symbol);
            prop_assert_eq!(a.next, b.next);
        }
    }

    #[test]
    fn composition_concatenates(f in arb_mnode(2), g in arb_mnode(2)) {
        let (vf, n1) = serialize(&f, 0);
        let (vg, n2) = serialize(&g, n1);
        let (vcomp, ncomp) = serialize(&MNode::comp(f, g), 0);
        prop_assert_eq!(ncomp, n2);
        let mut expected = vf;
        expected.extend(vg);
        prop_assert_eq!(expected.len(), vcomp.len());
        for (a, b) in expected.iter().zip(vcomp.iter()) {
            prop_assert_eq!(&a.symbol, &b.symbol);
            prop_assert_eq!(a.next, b.next);
        }
    }

    #[test]
    fn predicate_subtrees_always_terminate(node in arb_pnode(3)) {
        let (descriptors, _) = serialize_p(&node, 0);
        for d in &descriptors {
            prop_assert_eq!(d.next, TERMINAL);
        }
    }
}

#[test]
fn leaf_link_matches_successor_index() {
    let node = MNode::mf0("drop").unwrap();
    let (d, n) = serialize(&node, 5);
    assert_eq!(n, 6);
    assert_eq!(d[0].next, 6);
}
