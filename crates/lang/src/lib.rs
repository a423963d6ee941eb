//! The typed embedded DSL: a three-sort AST (monadic function, predicate,
//! property), Kleisli composition over monadic nodes, and the serializer
//! that lowers a composed pipeline to a flat descriptor array.

pub mod compose;
pub mod error;
pub mod node;
pub mod pretty;
pub mod serializer;

pub use compose::compose;
pub use error::AstError;
pub use node::{MNode, PNode, QNode};
pub use serializer::{serialize, serialize_p, serialize_q, serialize_seq};
