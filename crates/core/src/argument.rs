//! The Argument tagged union carried by a descriptor's `arg` slots.
//!
//! Of the five shapes below, exactly one is ever valid for a given value.
//! Each is distinguished by a `size`/`nelem` pair recorded alongside it,
//! mirroring how the kernel side reads the wire format; the Rust side makes
//! that distinction a closed enum instead, so shape exclusivity is a
//! type-system fact rather than a runtime convention.

use std::fmt;

use bytemuck::Pod;

/// A POD value sized and laid out for raw byte serialization.
///
/// Any `bytemuck::Pod` type qualifies: fixed layout, no padding surprises,
/// safe to reinterpret as bytes.
pub trait Datum: Pod + fmt::Debug + Send + Sync + 'static {}
impl<T: Pod + fmt::Debug + Send + Sync + 'static> Datum for T {}

/// Sentinel used in the `nelem` field of `Data`/`String`/`FunRef` shapes,
/// meaning "not a collection".
pub const NOT_A_COLLECTION: usize = usize::MAX;

/// The five mutually exclusive Argument shapes.
///
/// `Null`, `String`, and `FunRef` carry no POD payload; `Data`/`Vector` box
/// a type-erased POD value so `Argument` itself stays a plain, `Clone`-able
/// value type without a generic parameter.
#[derive(Debug, Clone)]
pub enum Argument {
    /// No payload. `size = 0`, `nelem = 0`.
    Null,
    /// A single POD value. `size = sizeof(T)`, `nelem` = [`NOT_A_COLLECTION`].
    Data {
        bytes: std::sync::Arc<dyn ErasedPodBytes>,
        size: usize,
    },
    /// A POD vector. `size = sizeof(T)`, `nelem = len`.
    Vector {
        bytes: std::sync::Arc<dyn ErasedPodBytes>,
        size: usize,
        nelem: usize,
    },
    /// An owned byte string. `size = 0`, `nelem` = [`NOT_A_COLLECTION`].
    String(std::sync::Arc<str>),
    /// A reference to a descriptor position assigned during serialization.
    /// `size = i`, `nelem` = [`NOT_A_COLLECTION`].
    FunRef(usize),
}

/// Object-safe view over an erased POD payload: a byte rendering for wire
/// serialization, and a pretty rendering for diagnostics.
pub trait ErasedPodBytes: fmt::Debug + Send + Sync {
    fn pretty(&self) -> String;
    fn raw_bytes(&self) -> Vec<u8>;
}

/// Wraps a single POD value for storage behind `dyn ErasedPodBytes`.
///
/// A dedicated wrapper (rather than a blanket impl over `T` directly) keeps
/// this impl and [`CollectionPayload`]'s from ever being mistaken for
/// overlapping instances of the same generic parameter.
#[derive(Debug)]
struct ScalarPayload<T>(T);

#[derive(Debug)]
struct CollectionPayload<T>(Vec<T>);

impl<T: Datum> ErasedPodBytes for ScalarPayload<T> {
    fn pretty(&self) -> String {
        format!("{:?}", self.0)
    }
    fn raw_bytes(&self) -> Vec<u8> {
        bytemuck::bytes_of(&self.0).to_vec()
    }
}

impl<T: Datum> ErasedPodBytes for CollectionPayload<T> {
    fn pretty(&self) -> String {
        let inner: Vec<String> = self.0.iter().map(|v| format!("{v:?}")).collect();
        format!("{{{}}}", inner.join(" "))
    }
    fn raw_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(self.0.as_slice()).to_vec()
    }
}

impl Argument {
    /// No payload.
    pub fn null() -> Self {
        Argument::Null
    }

    /// A single POD value. Records `sizeof(T)`, `nelem = sentinel`.
    pub fn data<T: Datum>(value: T) -> Self {
        Argument::Data {
            size: std::mem::size_of::<T>(),
            bytes: std::sync::Arc::new(ScalarPayload(value)),
        }
    }

    /// A POD vector. Records `sizeof(T)`, `nelem = len(v)`.
    pub fn vector<T: Datum>(values: Vec<T>) -> Self {
        let nelem = values.len();
        Argument::Vector {
            size: std::mem::size_of::<T>(),
            nelem,
            bytes: std::sync::Arc::new(CollectionPayload(values)),
        }
    }

    /// An owned string. `size = 0`, `nelem = sentinel`.
    pub fn string(s: impl Into<std::sync::Arc<str>>) -> Self {
        Argument::String(s.into())
    }

    /// A reference to a descriptor position. `size = i`, `nelem = sentinel`.
    ///
    /// `i` is a 0-based index into the descriptor array assigned during
    /// serialization; it shares the same index space as `Descriptor::next`.
    pub fn fun(i: usize) -> Self {
        Argument::FunRef(i)
    }

    /// `true` iff this argument denotes a reference to another descriptor.
    pub fn is_fun_ref(&self) -> bool {
        matches!(self, Argument::FunRef(_))
    }

    /// The byte size recorded for this argument's element type.
    pub fn size(&self) -> usize {
        match self {
            Argument::Null => 0,
            Argument::Data { size, .. } => *size,
            Argument::Vector { size, .. } => *size,
            Argument::String(_) => 0,
            Argument::FunRef(i) => *i,
        }
    }

    /// The element count recorded for this argument. Data/String/FunRef use
    /// the `NOT_A_COLLECTION` sentinel since the field isn't a count there;
    /// Null uses 0.
    pub fn nelem(&self) -> usize {
        match self {
            Argument::Null => 0,
            Argument::Data { .. } => NOT_A_COLLECTION,
            Argument::Vector { nelem, .. } => *nelem,
            Argument::String(_) => NOT_A_COLLECTION,
            Argument::FunRef(_) => NOT_A_COLLECTION,
        }
    }

    /// Raw little-endian byte view of the payload, for wire serialization.
    /// Empty for `Null`/`String`/`FunRef` — those shapes carry no POD bytes.
    pub fn raw_bytes(&self) -> Vec<u8> {
        match self {
            Argument::Null | Argument::String(_) | Argument::FunRef(_) => Vec::new(),
            Argument::Data { bytes, .. } => bytes.raw_bytes(),
            Argument::Vector { bytes, .. } => bytes.raw_bytes(),
        }
    }
}

impl Default for Argument {
    fn default() -> Self {
        Argument::Null
    }
}

/// Null prints as empty; Data/Vector print their value; String is quoted;
/// FunRef prints as `f[i]`. Diagnostics only, not part of the wire format.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Null => Ok(()),
            Argument::Data { bytes, .. } => write!(f, "{}", bytes.pretty()),
            Argument::Vector { bytes, .. } => write!(f, "{}", bytes.pretty()),
            Argument::String(s) => write!(f, "\"{s}\""),
            Argument::FunRef(i) => write!(f, "f[{i}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_shape() {
        let a = Argument::null();
        assert_eq!(a.size(), 0);
        assert_eq!(a.nelem(), 0);
        assert_eq!(a.to_string(), "");
    }

    #[test]
    fn data_shape_records_size_and_sentinel() {
        let a = Argument::data::<u16>(53);
        assert_eq!(a.size(), 2);
        assert_eq!(a.nelem(), NOT_A_COLLECTION);
        assert_eq!(a.to_string(), "53");
    }

    #[test]
    fn vector_shape_records_size_and_len() {
        let a = Argument::vector::<u32>(vec![1, 2, 3]);
        assert_eq!(a.size(), 4);
        assert_eq!(a.nelem(), 3);
    }

    #[test]
    fn string_shape_zero_size_sentinel_nelem() {
        let a = Argument::string("eth0");
        assert_eq!(a.size(), 0);
        assert_eq!(a.nelem(), NOT_A_COLLECTION);
        assert_eq!(a.to_string(), "\"eth0\"");
    }

    #[test]
    fn fun_ref_shape_uses_size_slot_as_index() {
        let a = Argument::fun(7);
        assert!(a.is_fun_ref());
        assert_eq!(a.size(), 7);
        assert_eq!(a.nelem(), NOT_A_COLLECTION);
        assert_eq!(a.to_string(), "f[7]");
    }
}
