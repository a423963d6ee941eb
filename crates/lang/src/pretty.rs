//! `Display` impls mirroring the eDSL's own pretty-printer: bare names for
//! arity-0 nodes, parenthesized `(symbol args...)` for the rest, `!p` for
//! negation, infix `&`/`|`/`^` for the binary predicate combinators, and
//! `f >-> g` for Kleisli sequences.

use std::fmt;

use crate::node::{MNode, PNode, QNode};

impl fmt::Display for QNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QNode::Q0 { sym } => write!(f, "{sym}"),
            QNode::Q1 { sym, a } => write!(f, "({sym} {a})"),
        }
    }
}

impl fmt::Display for PNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PNode::P0 { sym } => write!(f, "{sym}"),
            PNode::P1 { sym, a } => write!(f, "({sym} {a})"),
            PNode::P2 { sym, a, b } => write!(f, "({sym} {a} {b})"),
            PNode::Pr { sym, q } => write!(f, "({sym} {q})"),
            PNode::Pr1 { sym, q, a } => write!(f, "({sym} {q} {a})"),
            PNode::Cmb1 { sym, p } if sym.as_ref() == "not" => write!(f, "!{p}"),
            PNode::Cmb1 { sym, p } => write!(f, "({sym} {p})"),
            PNode::Cmb2 { sym, p1, p2 } => match sym.as_ref() {
                "and" => write!(f, "({p1} & {p2})"),
                "or" => write!(f, "({p1} | {p2})"),
                "xor" => write!(f, "({p1} ^ {p2})"),
                _ => write!(f, "({sym} {p1} {p2})"),
            },
        }
    }
}

impl fmt::Display for MNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MNode::MF0 { sym } => write!(f, "{sym}"),
            MNode::MF1 { sym, a } => write!(f, "({sym} {a})"),
            MNode::MF2 { sym, a, b } => write!(f, "({sym} {a} {b})"),
            MNode::MFp { sym, p } => write!(f, "({sym} {p})"),
            MNode::MF1p { sym, a, p } => write!(f, "({sym} {a} {p})"),
            MNode::MFpf { sym, p, c } => write!(f, "({sym} {p} {c})"),
            MNode::MFpff { sym, p, t, f: e } => write!(f, "({sym} {p} {t} {e})"),
            MNode::MFf { sym, c } => write!(f, "({sym} {c})"),
            MNode::MFff { sym, c1, c2 } => write!(f, "({sym} {c1} {c2})"),
            MNode::Comp { f: lhs, g } => write!(f, "{lhs} >-> {g}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfq_core::Argument;

    #[test]
    fn zero_arity_prints_bare_symbol() {
        assert_eq!(MNode::mf0("drop").unwrap().to_string(), "drop");
        assert_eq!(PNode::p0("is_ip").unwrap().to_string(), "is_ip");
        assert_eq!(QNode::q0("length").unwrap().to_string(), "length");
    }

    #[test]
    fn negation_uses_bang_prefix() {
        let p = PNode::cmb1("not", PNode::p0("is_ip").unwrap()).unwrap();
        assert_eq!(p.to_string(), "!is_ip");
    }

    #[test]
    fn binary_combinators_use_infix_symbols() {
        let and = PNode::cmb2("and", PNode::p0("is_ip").unwrap(), PNode::p0("is_udp").unwrap())
            .unwrap();
        assert_eq!(and.to_string(), "(is_ip & is_udp)");
        let or = PNode::cmb2("or", PNode::p0("is_ip").unwrap(), PNode::p0("is_udp").unwrap())
            .unwrap();
        assert_eq!(or.to_string(), "(is_ip | is_udp)");
    }

    #[test]
    fn composition_uses_arrow() {
        let f = MNode::mf0("ip").unwrap();
        let g = MNode::mf0("udp").unwrap();
        assert_eq!(MNode::comp(f, g).to_string(), "ip >-> udp");
    }

    #[test]
    fn property_predicate_with_argument() {
        let p = PNode::pr1("ge", QNode::q0("length").unwrap(), Argument::data::<u32>(64)).unwrap();
        assert_eq!(p.to_string(), "(ge length 64)");
    }
}
