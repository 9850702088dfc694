//! Type node handle.
//!
//! A `TypeId` names one node in a [`TypePool`](crate::TypePool). It is the
//! node's identity: two handles are equal only if they name the same node,
//! never because two nodes happen to have the same shape. Substitution
//! compression keys on this identity.

use std::fmt;

use crate::primitive::Primitive;

/// A 32-bit index into a type pool.
///
/// Primitive kinds are pre-allocated at fixed indices `0..Primitive::COUNT`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// First index handed out to compound nodes.
    #[allow(clippy::cast_possible_truncation)] // COUNT is a small constant
    pub const FIRST_COMPOUND: u32 = Primitive::COUNT as u32;

    /// The pre-allocated node for a primitive kind.
    #[inline]
    pub const fn primitive(kind: Primitive) -> Self {
        Self(kind as u32)
    }

    /// Create a handle from a raw index. Only a pool hands out valid ones.
    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this handle names a pre-allocated primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_COMPOUND
    }

    /// The primitive kind this handle names, if any.
    #[inline]
    pub fn as_primitive(self) -> Option<Primitive> {
        if self.is_primitive() {
            Primitive::from_index(self.index())
        } else {
            None
        }
    }
}

impl From<Primitive> for TypeId {
    fn from(kind: Primitive) -> Self {
        Self::primitive(kind)
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_primitive() {
            Some(kind) => write!(f, "TypeId::{kind:?}"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}
