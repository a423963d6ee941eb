//! The typed AST: three sorts, each a distinct sum type.
//!
//! The original eDSL enforces sort correctness with compile-time template
//! traits and static assertions. Here each sort is instead its own enum —
//! `MNode` (monadic function), `PNode` (predicate), `QNode` (property) — so
//! a predicate slot that only accepts `PNode` rejects a `QNode` at the type
//! level, with no reflection or runtime tag-check involved.

use std::sync::Arc;

use pfq_core::{validate_symbol, Argument};

use crate::error::AstError;

/// A monadic-function node: transforms a packet, may be sequenced with
/// other `MNode`s via Kleisli composition, and may embed predicates or
/// other monadic nodes as higher-order children.
#[derive(Debug, Clone)]
pub enum MNode {
    /// `sym()` — no children.
    MF0 { sym: Arc<str> },
    /// `sym(a)` — one plain argument.
    MF1 { sym: Arc<str>, a: Argument },
    /// `sym(a, b)` — two plain arguments.
    MF2 { sym: Arc<str>, a: Argument, b: Argument },
    /// `sym` guarded by a predicate (e.g. a filter).
    MFp { sym: Arc<str>, p: Box<PNode> },
    /// `sym(a)` guarded by a predicate.
    MF1p {
        sym: Arc<str>,
        a: Argument,
        p: Box<PNode>,
    },
    /// `sym` applying a monadic continuation `c` when a predicate holds.
    MFpf {
        sym: Arc<str>,
        p: Box<PNode>,
        c: Box<MNode>,
    },
    /// `sym` branching between two monadic continuations on a predicate
    /// (if-then-else).
    MFpff {
        sym: Arc<str>,
        p: Box<PNode>,
        t: Box<MNode>,
        f: Box<MNode>,
    },
    /// `sym` wrapping a single monadic continuation.
    MFf { sym: Arc<str>, c: Box<MNode> },
    /// `sym` wrapping two monadic continuations.
    MFff {
        sym: Arc<str>,
        c1: Box<MNode>,
        c2: Box<MNode>,
    },
    /// Kleisli sequence `f >-> g`: apply `f`, then `g`, to the same packet.
    Comp { f: Box<MNode>, g: Box<MNode> },
}

/// A predicate node: packet → bool. Feeds combinators and the guarded
/// `MNode` variants above.
#[derive(Debug, Clone)]
pub enum PNode {
    /// `sym()` — no children.
    P0 { sym: Arc<str> },
    /// `sym(a)` — one plain argument.
    P1 { sym: Arc<str>, a: Argument },
    /// `sym(a, b)` — two plain arguments.
    P2 { sym: Arc<str>, a: Argument, b: Argument },
    /// A predicate lifted from a scalar property (e.g. `length >= 64`).
    Pr { sym: Arc<str>, q: Box<QNode> },
    /// A property-lifted predicate with an extra comparison argument.
    Pr1 {
        sym: Arc<str>,
        q: Box<QNode>,
        a: Argument,
    },
    /// A unary combinator over one predicate (e.g. `not`).
    Cmb1 { sym: Arc<str>, p: Box<PNode> },
    /// A binary combinator over two predicates (e.g. `and`, `or`, `xor`).
    Cmb2 {
        sym: Arc<str>,
        p1: Box<PNode>,
        p2: Box<PNode>,
    },
}

/// A property node: packet → 64-bit scalar. Feeds `Pr`/`Pr1` predicates.
#[derive(Debug, Clone)]
pub enum QNode {
    /// `sym()` — no children.
    Q0 { sym: Arc<str> },
    /// `sym(a)` — one plain argument.
    Q1 { sym: Arc<str>, a: Argument },
}

fn checked_sym(sym: impl Into<Arc<str>>) -> Result<Arc<str>, AstError> {
    let sym: Arc<str> = sym.into();
    if sym.is_empty() {
        return Err(AstError::EmptySymbol);
    }
    validate_symbol(&sym).map_err(AstError::InvalidArgument)?;
    Ok(sym)
}

impl MNode {
    pub fn mf0(sym: impl Into<Arc<str>>) -> Result<Self, AstError> {
        Ok(MNode::MF0 {
            sym: checked_sym(sym)?,
        })
    }

    pub fn mf1(sym: impl Into<Arc<str>>, a: Argument) -> Result<Self, AstError> {
        Ok(MNode::MF1 {
            sym: checked_sym(sym)?,
            a,
        })
    }

    pub fn mf2(sym: impl Into<Arc<str>>, a: Argument, b: Argument) -> Result<Self, AstError> {
        Ok(MNode::MF2 {
            sym: checked_sym(sym)?,
            a,
            b,
        })
    }

    pub fn mfp(sym: impl Into<Arc<str>>, p: PNode) -> Result<Self, AstError> {
        Ok(MNode::MFp {
            sym: checked_sym(sym)?,
            p: Box::new(p),
        })
    }

    pub fn mf1p(sym: impl Into<Arc<str>>, a: Argument, p: PNode) -> Result<Self, AstError> {
        Ok(MNode::MF1p {
            sym: checked_sym(sym)?,
            a,
            p: Box::new(p),
        })
    }

    pub fn mfpf(sym: impl Into<Arc<str>>, p: PNode, c: MNode) -> Result<Self, AstError> {
        Ok(MNode::MFpf {
            sym: checked_sym(sym)?,
            p: Box::new(p),
            c: Box::new(c),
        })
    }

    pub fn mfpff(
        sym: impl Into<Arc<str>>,
        p: PNode,
        t: MNode,
        f: MNode,
    ) -> Result<Self, AstError> {
        Ok(MNode::MFpff {
            sym: checked_sym(sym)?,
            p: Box::new(p),
            t: Box::new(t),
            f: Box::new(f),
        })
    }

    pub fn mff(sym: impl Into<Arc<str>>, c: MNode) -> Result<Self, AstError> {
        Ok(MNode::MFf {
            sym: checked_sym(sym)?,
            c: Box::new(c),
        })
    }

    pub fn mfff(sym: impl Into<Arc<str>>, c1: MNode, c2: MNode) -> Result<Self, AstError> {
        Ok(MNode::MFff {
            sym: checked_sym(sym)?,
            c1: Box::new(c1),
            c2: Box::new(c2),
        })
    }

    /// `Comp(f, g)`. Always well-typed in this model: every `MNode` shares
    /// one Kleisli arrow shape (`packet -> Action<packet>`), so there is no
    /// sort mismatch to reject here — the type system already guarantees
    /// both operands are monadic.
    pub fn comp(f: MNode, g: MNode) -> Self {
        MNode::Comp {
            f: Box::new(f),
            g: Box::new(g),
        }
    }
}

impl PNode {
    pub fn p0(sym: impl Into<Arc<str>>) -> Result<Self, AstError> {
        Ok(PNode::P0 {
            sym: checked_sym(sym)?,
        })
    }

    pub fn p1(sym: impl Into<Arc<str>>, a: Argument) -> Result<Self, AstError> {
        Ok(PNode::P1 {
            sym: checked_sym(sym)?,
            a,
        })
    }

    pub fn p2(sym: impl Into<Arc<str>>, a: Argument, b: Argument) -> Result<Self, AstError> {
        Ok(PNode::P2 {
            sym: checked_sym(sym)?,
            a,
            b,
        })
    }

    pub fn pr(sym: impl Into<Arc<str>>, q: QNode) -> Result<Self, AstError> {
        Ok(PNode::Pr {
            sym: checked_sym(sym)?,
            q: Box::new(q),
        })
    }

    pub fn pr1(sym: impl Into<Arc<str>>, q: QNode, a: Argument) -> Result<Self, AstError> {
        Ok(PNode::Pr1 {
            sym: checked_sym(sym)?,
            q: Box::new(q),
            a,
        })
    }

    pub fn cmb1(sym: impl Into<Arc<str>>, p: PNode) -> Result<Self, AstError> {
        Ok(PNode::Cmb1 {
            sym: checked_sym(sym)?,
            p: Box::new(p),
        })
    }

    pub fn cmb2(sym: impl Into<Arc<str>>, p1: PNode, p2: PNode) -> Result<Self, AstError> {
        Ok(PNode::Cmb2 {
            sym: checked_sym(sym)?,
            p1: Box::new(p1),
            p2: Box::new(p2),
        })
    }
}

impl QNode {
    pub fn q0(sym: impl Into<Arc<str>>) -> Result<Self, AstError> {
        Ok(QNode::Q0 {
            sym: checked_sym(sym)?,
        })
    }

    pub fn q1(sym: impl Into<Arc<str>>, a: Argument) -> Result<Self, AstError> {
        Ok(QNode::Q1 {
            sym: checked_sym(sym)?,
            a,
        })
    }
}
