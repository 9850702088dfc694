//! Prototype Mangling
//!
//! Encodes a [`FunctionDescriptor`] into its SPIR symbol name.
//!
//! # Mangling Scheme
//!
//! The scheme is the Itanium C++ ABI with OpenCL vendor extensions:
//!
//! ```text
//! _Z <name-length> <name> <param>*
//! ```
//!
//! | Parameter | Encoding |
//! |-----------|----------|
//! | primitive | table code (`i`, `Dh`, `11ocl_image2d`) |
//! | pointer | `P` qualifiers (`r`, `V`, `K`) address-space pointee |
//! | vector | `Dv` length `_` element |
//! | atomic | `U7_Atomic` base |
//! | block | `U13block_pointerFv` param* `E` (`v` when empty) |
//! | user-defined | length name |
//! | repeated node | `S` seq `_` |
//!
//! Address spaces other than private are vendor qualifiers `U3AS1` (global)
//! through `U3AS4` (generic).
//!
//! # Substitutions
//!
//! Pointer and user-defined nodes are numbered densely from 0 in the order
//! they are first reached by a left-to-right pre-order walk of the
//! parameters. A pointer takes its number before its pointee is encoded.
//! When the same node is reached again it is written as `S<seq>_`, where
//! `seq` is base 36 with digits `0-9A-Z`.
//!
//! Numbers key on node identity ([`TypeId`]), not structure: two separately
//! built but identical trees are both encoded in full.
//!
//! # Usage
//!
//! ```
//! use spir_mangle::{FunctionDescriptor, NameMangler, Primitive, SpirVersion, TypeId, TypePool};
//!
//! let mut pool = TypePool::new();
//! let float = TypeId::primitive(Primitive::Float);
//! let ptr = pool.pointer(float);
//!
//! let fd = FunctionDescriptor::new("fract_ret2ptr", [float, ptr, ptr]);
//! let mangler = NameMangler::new(SpirVersion::V1_2);
//!
//! assert_eq!(mangler.mangle(&pool, &fd).unwrap(), "_Z13fract_ret2ptrfPfS0_");
//! ```

use std::fmt::Write;

use rustc_hash::FxHashMap;

use crate::descriptor::FunctionDescriptor;
use crate::error::MangleError;
use crate::pool::{TypeData, TypePool};
use crate::primitive::Primitive;
use crate::type_id::TypeId;
use crate::version::SpirVersion;

/// The prefix of every mangled name.
pub const MANGLE_PREFIX: &str = "_Z";

/// Fixed token for `_Atomic` types.
const ATOMIC_TOKEN: &str = "U7_Atomic";

/// Fixed token opening a block type; `Fv` is the `void` return.
const BLOCK_TOKEN: &str = "U13block_pointerFv";

/// Token closing a block's parameter list.
const BLOCK_END: char = 'E';

/// Digits of a substitution sequence number.
const SEQ_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mangles prototypes for one SPIR revision.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NameMangler {
    version: SpirVersion,
}

impl NameMangler {
    pub fn new(version: SpirVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> SpirVersion {
        self.version
    }

    /// Mangle `descriptor`, whose parameter types live in `pool`.
    ///
    /// # Panics
    ///
    /// Every [`TypeId`] reachable from `descriptor` must have been returned
    /// by `pool` (or be a primitive id). A handle from another pool may be
    /// out of range.
    ///
    /// Fails with [`MangleError::NullFunctionDescriptor`] for the null
    /// descriptor, and with [`MangleError::TypeNotSupported`] naming the
    /// first parameter that uses something this revision lacks.
    #[tracing::instrument(level = "debug", skip_all, fields(
        name = descriptor.name(),
        params = descriptor.params().len(),
        version = %self.version,
    ))]
    pub fn mangle(
        &self,
        pool: &TypePool,
        descriptor: &FunctionDescriptor,
    ) -> Result<String, MangleError> {
        if descriptor.is_null() {
            tracing::debug!("null function descriptor");
            return Err(MangleError::NullFunctionDescriptor);
        }

        let name = descriptor.name();
        let mut out = String::with_capacity(MANGLE_PREFIX.len() + name.len() + 32);
        out.push_str(MANGLE_PREFIX);
        let _ = write!(out, "{}{name}", name.len());

        let mut encoder = Encoder::new(pool, self.version, &mut out);
        for (index, &param) in descriptor.params().iter().enumerate() {
            if encoder.encode(param).is_err() {
                let ty = pool.format_type(param);
                tracing::debug!(index, %ty, "parameter type not supported");
                return Err(MangleError::TypeNotSupported {
                    ty,
                    version: self.version,
                });
            }
        }

        Ok(out)
    }
}

/// Mangle `descriptor` for `version`.
pub fn mangle(
    pool: &TypePool,
    descriptor: &FunctionDescriptor,
    version: SpirVersion,
) -> Result<String, MangleError> {
    NameMangler::new(version).mangle(pool, descriptor)
}

/// A type or attribute outside the active revision was reached.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Unsupported;

/// Sequence numbers of substitutable nodes seen so far in one mangle call.
#[derive(Debug, Default)]
struct SubstitutionTable {
    seqs: FxHashMap<TypeId, u32>,
}

impl SubstitutionTable {
    fn get(&self, id: TypeId) -> Option<u32> {
        self.seqs.get(&id).copied()
    }

    /// Give `id` the next sequence number.
    #[allow(clippy::cast_possible_truncation)] // a prototype never has 2^32 nodes
    fn insert(&mut self, id: TypeId) {
        debug_assert!(!self.seqs.contains_key(&id), "substitution already exists");
        let seq = self.seqs.len() as u32;
        self.seqs.insert(id, seq);
    }
}

/// Serializes type trees into one output buffer, sharing a substitution
/// table across every parameter of the prototype.
struct Encoder<'a> {
    pool: &'a TypePool,
    version: SpirVersion,
    out: &'a mut String,
    substitutions: SubstitutionTable,
}

impl<'a> Encoder<'a> {
    fn new(pool: &'a TypePool, version: SpirVersion, out: &'a mut String) -> Self {
        Self {
            pool,
            version,
            out,
            substitutions: SubstitutionTable::default(),
        }
    }

    /// Append the encoding of `id`. On failure the buffer holds a partial
    /// encoding and must be discarded.
    fn encode(&mut self, id: TypeId) -> Result<(), Unsupported> {
        let pool = self.pool;
        let data = pool.data(id);

        if !self.version.supports(&data.kind()) {
            return Err(Unsupported);
        }

        match data {
            TypeData::Primitive(kind) => {
                if !self.version.supports(kind) {
                    return Err(Unsupported);
                }
                self.out.push_str(kind.mangled());
                Ok(())
            }
            TypeData::Pointer {
                pointee,
                address_space,
                qualifiers,
            } => {
                if self.substitute(id) {
                    return Ok(());
                }
                if !self.version.supports(address_space) {
                    return Err(Unsupported);
                }

                self.out.push('P');
                for qualifier in qualifiers.iter_canonical() {
                    self.out.push_str(qualifier.mangled());
                }
                self.out.push_str(address_space.mangled());
                self.substitutions.insert(id);
                self.encode(*pointee)
            }
            TypeData::Vector { element, length } => {
                let _ = write!(self.out, "Dv{length}_");
                self.encode(*element)
            }
            TypeData::Atomic { base } => {
                self.out.push_str(ATOMIC_TOKEN);
                self.encode(*base)
            }
            TypeData::Block { params } => {
                self.out.push_str(BLOCK_TOKEN);
                // An empty list is a `void` list.
                if params.is_empty() {
                    self.out.push_str(Primitive::Void.mangled());
                }
                for &param in params {
                    self.encode(param)?;
                }
                self.out.push(BLOCK_END);
                Ok(())
            }
            TypeData::UserDefined { name } => {
                if self.substitute(id) {
                    return Ok(());
                }
                let _ = write!(self.out, "{}{name}", name.len());
                self.substitutions.insert(id);
                Ok(())
            }
        }
    }

    /// Write a back-reference if `id` was already encoded.
    fn substitute(&mut self, id: TypeId) -> bool {
        let Some(seq) = self.substitutions.get(id) else {
            return false;
        };

        tracing::trace!(?id, seq, "substitution");
        self.out.push('S');
        push_seq_id(self.out, seq);
        self.out.push('_');
        true
    }
}

/// Append `seq` in base 36, most significant digit first.
fn push_seq_id(out: &mut String, mut seq: u32) {
    // u32::MAX is 7 digits in base 36.
    let mut buf = [0u8; 7];
    let mut pos = buf.len();

    loop {
        pos -= 1;
        buf[pos] = SEQ_DIGITS[(seq % 36) as usize];
        seq /= 36;
        if seq == 0 {
            break;
        }
    }

    out.extend(buf[pos..].iter().map(|&b| char::from(b)));
}

#[cfg(test)]
mod tests;
