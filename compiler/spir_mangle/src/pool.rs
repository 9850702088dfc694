//! Type node arena.
//!
//! All parameter types live in a `TypePool` and are referenced by
//! [`TypeId`]. Building a compound type always allocates a fresh node: the
//! pool never deduplicates. Sharing a subtree between parameters means
//! reusing its `TypeId`, and that reuse is what substitution compression
//! sees. Primitive nodes are the one exception; they are pre-allocated once
//! per pool since they never take part in substitution.
//!
//! # Example
//!
//! ```
//! use spir_mangle::{AddressSpace, Primitive, Qualifiers, TypeId, TypePool};
//!
//! let mut pool = TypePool::new();
//! let float = TypeId::primitive(Primitive::Float);
//! let ptr = pool.pointer(float);
//! let global = pool.pointer_with(float, AddressSpace::Global, Qualifiers::CONST);
//!
//! assert_ne!(ptr, global);
//! assert_eq!(pool.format_type(global), "const __global float *");
//! ```

mod format;

use smallvec::SmallVec;

use crate::attr::{AddressSpace, Qualifiers};
use crate::primitive::Primitive;
use crate::type_id::TypeId;
use crate::version::{SpirVersion, Versioned};

/// Vector lengths OpenCL C allows.
pub const VECTOR_LENGTHS: [u8; 5] = [2, 3, 4, 8, 16];

/// Parameter list of a block type. Most blocks take a handful of arguments.
pub type BlockParams = SmallVec<[TypeId; 4]>;

/// The contents of one type node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    Primitive(Primitive),
    Pointer {
        pointee: TypeId,
        address_space: AddressSpace,
        qualifiers: Qualifiers,
    },
    Vector {
        element: TypeId,
        length: u8,
    },
    /// `_Atomic` wrapper around a primitive or pointer.
    Atomic {
        base: TypeId,
    },
    /// Pointer to a block (closure) returning `void`. An empty list means
    /// a `void` parameter list, the same as `[void]`.
    Block {
        params: BlockParams,
    },
    /// An opaque or struct type known only by name.
    UserDefined {
        name: String,
    },
}

/// The variant of a [`TypeData`], without payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Primitive,
    Pointer,
    Vector,
    Atomic,
    Block,
    UserDefined,
}

impl TypeData {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeData::Primitive(_) => TypeKind::Primitive,
            TypeData::Pointer { .. } => TypeKind::Pointer,
            TypeData::Vector { .. } => TypeKind::Vector,
            TypeData::Atomic { .. } => TypeKind::Atomic,
            TypeData::Block { .. } => TypeKind::Block,
            TypeData::UserDefined { .. } => TypeKind::UserDefined,
        }
    }
}

impl Versioned for TypeKind {
    fn since(&self) -> SpirVersion {
        match self {
            TypeKind::Atomic | TypeKind::Block => SpirVersion::V2_0,
            TypeKind::Primitive | TypeKind::Pointer | TypeKind::Vector | TypeKind::UserDefined => {
                SpirVersion::V1_2
            }
        }
    }
}

/// Arena owning every type node referenced by a set of prototypes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypePool {
    types: Vec<TypeData>,
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

impl TypePool {
    /// Create a pool holding only the pre-allocated primitives.
    pub fn new() -> Self {
        let mut types = Vec::with_capacity(Primitive::COUNT + 32);
        types.extend(Primitive::ALL.into_iter().map(TypeData::Primitive));
        Self { types }
    }

    /// Number of nodes, including the pre-allocated primitives.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A pool is never empty: primitives are always present.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Get the node for `id`, or `None` if `id` was not allocated here.
    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.index())
    }

    /// Get the node for `id`.
    ///
    /// `id` must come from this pool.
    #[inline]
    pub fn data(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    #[allow(clippy::cast_possible_truncation)] // checked by the debug assertion
    fn alloc(&mut self, data: TypeData) -> TypeId {
        debug_assert!(self.types.len() < u32::MAX as usize, "type pool overflow");
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.push(data);
        id
    }

    /// A private, unqualified pointer to `pointee`.
    pub fn pointer(&mut self, pointee: TypeId) -> TypeId {
        self.pointer_with(pointee, AddressSpace::Private, Qualifiers::empty())
    }

    /// A pointer to `pointee` with explicit attributes.
    pub fn pointer_with(
        &mut self,
        pointee: TypeId,
        address_space: AddressSpace,
        qualifiers: Qualifiers,
    ) -> TypeId {
        self.alloc(TypeData::Pointer {
            pointee,
            address_space,
            qualifiers,
        })
    }

    /// A vector of `length` scalar `element`s.
    ///
    /// `element` must be a scalar primitive and `length` one of
    /// [`VECTOR_LENGTHS`].
    pub fn vector(&mut self, element: TypeId, length: u8) -> TypeId {
        debug_assert!(
            VECTOR_LENGTHS.contains(&length),
            "invalid vector length {length}"
        );
        debug_assert!(
            element.as_primitive().is_some_and(Primitive::is_scalar),
            "vector element must be a scalar primitive"
        );
        self.alloc(TypeData::Vector { element, length })
    }

    /// An `_Atomic` wrapper. `base` must be a primitive or a pointer.
    pub fn atomic(&mut self, base: TypeId) -> TypeId {
        debug_assert!(
            matches!(
                self.get(base).map(TypeData::kind),
                Some(TypeKind::Primitive | TypeKind::Pointer)
            ),
            "atomic base must be a primitive or pointer"
        );
        self.alloc(TypeData::Atomic { base })
    }

    /// A block pointer taking `params`, in order.
    pub fn block(&mut self, params: impl IntoIterator<Item = TypeId>) -> TypeId {
        self.alloc(TypeData::Block {
            params: params.into_iter().collect(),
        })
    }

    /// An opaque type identified by `name`.
    pub fn user_defined(&mut self, name: impl Into<String>) -> TypeId {
        self.alloc(TypeData::UserDefined { name: name.into() })
    }

    /// Compare two trees by shape, attributes and names, ignoring identity.
    pub fn structurally_eq(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }

        match (self.data(a), self.data(b)) {
            (TypeData::Primitive(x), TypeData::Primitive(y)) => x == y,
            (
                TypeData::Pointer {
                    pointee: pa,
                    address_space: sa,
                    qualifiers: qa,
                },
                TypeData::Pointer {
                    pointee: pb,
                    address_space: sb,
                    qualifiers: qb,
                },
            ) => sa == sb && qa == qb && self.structurally_eq(*pa, *pb),
            (
                TypeData::Vector {
                    element: ea,
                    length: la,
                },
                TypeData::Vector {
                    element: eb,
                    length: lb,
                },
            ) => la == lb && self.structurally_eq(*ea, *eb),
            (TypeData::Atomic { base: ba }, TypeData::Atomic { base: bb }) => {
                self.structurally_eq(*ba, *bb)
            }
            (TypeData::Block { params: pa }, TypeData::Block { params: pb }) => {
                pa.len() == pb.len()
                    && pa
                        .iter()
                        .zip(pb.iter())
                        .all(|(x, y)| self.structurally_eq(*x, *y))
            }
            (TypeData::UserDefined { name: na }, TypeData::UserDefined { name: nb }) => na == nb,
            _ => false,
        }
    }
}
