//! Lowering the typed AST to a flat, index-addressed descriptor array.
//!
//! `serialize(node, n)` returns `(descriptors, n')`: the node rooted at the
//! call always lands at index `n`, children are assigned `n+1, n+2, …` in
//! preorder, and `n'` is the first index not used by this subtree. Callers
//! compose subtrees by threading `n'` into the next call — this is what
//! makes `Comp`'s concatenation and `serialize_seq`'s fold both just work.

use pfq_core::{Argument, Descriptor, TERMINAL};

use crate::node::{MNode, PNode, QNode};

fn terminate_last(mut v: Vec<Descriptor>) -> Vec<Descriptor> {
    if let Some(last) = v.last_mut() {
        last.next = TERMINAL;
    }
    v
}

/// Serialize a monadic-function node at index `n`.
pub fn serialize(node: &MNode, n: usize) -> (Vec<Descriptor>, usize) {
    let span = tracing::debug_span!("serialize", start = n);
    let _guard = span.enter();
    let (descriptors, end) = serialize_inner(node, n);
    tracing::debug!(count = descriptors.len(), end, "serialized program");
    (descriptors, end)
}

fn serialize_inner(node: &MNode, n: usize) -> (Vec<Descriptor>, usize) {
    match node {
        MNode::MF0 { sym } => {
            let d = Descriptor::new(sym.as_ref(), vec![], n + 1);
            (vec![d], n + 1)
        }
        MNode::MF1 { sym, a } => {
            let d = Descriptor::new(sym.as_ref(), vec![a.clone()], n + 1);
            (vec![d], n + 1)
        }
        MNode::MF2 { sym, a, b } => {
            let d = Descriptor::new(sym.as_ref(), vec![a.clone(), b.clone()], n + 1);
            (vec![d], n + 1)
        }
        MNode::MFp { sym, p } => {
            let (vp, n1) = serialize_p(p, n + 1);
            let d = Descriptor::new(sym.as_ref(), vec![Argument::fun(n + 1)], n1);
            (prepend(d, vp), n1)
        }
        MNode::MF1p { sym, a, p } => {
            let (vp, n1) = serialize_p(p, n + 1);
            let d = Descriptor::new(sym.as_ref(), vec![a.clone(), Argument::fun(n + 1)], n1);
            (prepend(d, vp), n1)
        }
        MNode::MFpf { sym, p, c } => {
            let (vp, n1) = serialize_p(p, n + 1);
            let (vc, n2) = serialize_inner(c, n1);
            let vc = terminate_last(vc);
            let d = Descriptor::new(
                sym.as_ref(),
                vec![Argument::fun(n + 1), Argument::fun(n1)],
                n2,
            );
            (prepend(d, concat(vp, vc)), n2)
        }
        MNode::MFpff { sym, p, t, f } => {
            let (vp, n1) = serialize_p(p, n + 1);
            let (vt, n2) = serialize_inner(t, n1);
            let vt = terminate_last(vt);
            let (vf, n3) = serialize_inner(f, n2);
            let vf = terminate_last(vf);
            let d = Descriptor::new(
                sym.as_ref(),
                vec![Argument::fun(n + 1), Argument::fun(n1), Argument::fun(n2)],
                n3,
            );
            (prepend(d, concat(concat(vp, vt), vf)), n3)
        }
        MNode::MFf { sym, c } => {
            let (vc, n1) = serialize_inner(c, n + 1);
            let vc = terminate_last(vc);
            let d = Descriptor::new(sym.as_ref(), vec![Argument::fun(n + 1)], n1);
            (prepend(d, vc), n1)
        }
        MNode::MFff { sym, c1, c2 } => {
            let (vc1, n1) = serialize_inner(c1, n + 1);
            let vc1 = terminate_last(vc1);
            let (vc2, n2) = serialize_inner(c2, n1);
            let vc2 = terminate_last(vc2);
            let d = Descriptor::new(
                sym.as_ref(),
                vec![Argument::fun(n + 1), Argument::fun(n1)],
                n2,
            );
            (prepend(d, concat(vc1, vc2)), n2)
        }
        MNode::Comp { f, g } => {
            let (vf, n1) = serialize_inner(f, n);
            let (vg, n2) = serialize_inner(g, n1);
            (concat(vf, vg), n2)
        }
    }
}

/// Serialize a sequence of monadic nodes end to end, threading the index
/// the way repeated `Comp` would. Equivalent to folding `serialize` over
/// the slice with `>->`, without building the intermediate `Comp` tree.
pub fn serialize_seq(nodes: &[MNode], n: usize) -> (Vec<Descriptor>, usize) {
    let mut out = Vec::new();
    let mut cursor = n;
    for node in nodes {
        let (v, next) = serialize(node, cursor);
        out.extend(v);
        cursor = next;
    }
    (out, cursor)
}

/// Serialize a predicate node at index `n`. Every descriptor in a
/// predicate subtree has `next == TERMINAL` — predicates are evaluated,
/// not sequenced.
pub fn serialize_p(node: &PNode, n: usize) -> (Vec<Descriptor>, usize) {
    match node {
        PNode::P0 { sym } => {
            let d = Descriptor::new(sym.as_ref(), vec![], TERMINAL);
            (vec![d], n + 1)
        }
        PNode::P1 { sym, a } => {
            let d = Descriptor::new(sym.as_ref(), vec![a.clone()], TERMINAL);
            (vec![d], n + 1)
        }
        PNode::P2 { sym, a, b } => {
            let d = Descriptor::new(sym.as_ref(), vec![a.clone(), b.clone()], TERMINAL);
            (vec![d], n + 1)
        }
        PNode::Pr { sym, q } => {
            let (vq, n1) = serialize_q(q, n + 1);
            let d = Descriptor::new(sym.as_ref(), vec![Argument::fun(n + 1)], TERMINAL);
            (prepend(d, vq), n1)
        }
        PNode::Pr1 { sym, q, a } => {
            let (vq, n1) = serialize_q(q, n + 1);
            let d = Descriptor::new(
                sym.as_ref(),
                vec![Argument::fun(n + 1), a.clone()],
                TERMINAL,
            );
            (prepend(d, vq), n1)
        }
        PNode::Cmb1 { sym, p } => {
            let (vp, n1) = serialize_p(p, n + 1);
            let d = Descriptor::new(sym.as_ref(), vec![Argument::fun(n + 1)], TERMINAL);
            (prepend(d, vp), n1)
        }
        PNode::Cmb2 { sym, p1, p2 } => {
            let (vp1, n1) = serialize_p(p1, n + 1);
            let (vp2, n2) = serialize_p(p2, n1);
            let d = Descriptor::new(
                sym.as_ref(),
                vec![Argument::fun(n + 1), Argument::fun(n1)],
                TERMINAL,
            );
            (prepend(d, concat(vp1, vp2)), n2)
        }
    }
}

/// Serialize a property node at index `n`. Always a single descriptor,
/// `next == TERMINAL`.
pub fn serialize_q(node: &QNode, n: usize) -> (Vec<Descriptor>, usize) {
    match node {
        QNode::Q0 { sym } => {
            let d = Descriptor::new(sym.as_ref(), vec![], TERMINAL);
            (vec![d], n + 1)
        }
        QNode::Q1 { sym, a } => {
            let d = Descriptor::new(sym.as_ref(), vec![a.clone()], TERMINAL);
            (vec![d], n + 1)
        }
    }
}

fn prepend(d: Descriptor, mut rest: Vec<Descriptor>) -> Vec<Descriptor> {
    rest.insert(0, d);
    rest
}

fn concat(mut a: Vec<Descriptor>, b: Vec<Descriptor>) -> Vec<Descriptor> {
    a.extend(b);
    a
}
