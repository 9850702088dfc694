//! Pointer attributes: address spaces and cv/restrict qualifiers.

use bitflags::bitflags;

use crate::version::{SpirVersion, Versioned};

/// The memory region a pointer's pointee lives in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressSpace {
    #[default]
    Private,
    Global,
    Constant,
    Local,
    /// Only available from SPIR 2.0.
    Generic,
}

impl AddressSpace {
    pub const ALL: [AddressSpace; 5] = [
        AddressSpace::Private,
        AddressSpace::Global,
        AddressSpace::Constant,
        AddressSpace::Local,
        AddressSpace::Generic,
    ];

    /// The vendor-qualifier code. Private is the default and has none.
    pub const fn mangled(self) -> &'static str {
        match self {
            AddressSpace::Private => "",
            AddressSpace::Global => "U3AS1",
            AddressSpace::Constant => "U3AS2",
            AddressSpace::Local => "U3AS3",
            AddressSpace::Generic => "U3AS4",
        }
    }

    pub const fn readable(self) -> &'static str {
        match self {
            AddressSpace::Private => "__private",
            AddressSpace::Global => "__global",
            AddressSpace::Constant => "__constant",
            AddressSpace::Local => "__local",
            AddressSpace::Generic => "__generic",
        }
    }
}

impl Versioned for AddressSpace {
    fn since(&self) -> SpirVersion {
        match self {
            AddressSpace::Generic => SpirVersion::V2_0,
            AddressSpace::Private
            | AddressSpace::Global
            | AddressSpace::Constant
            | AddressSpace::Local => SpirVersion::V1_2,
        }
    }
}

/// A single pointer qualifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Qualifier {
    Restrict,
    Volatile,
    Const,
}

impl Qualifier {
    /// All qualifiers in canonical mangling order.
    pub const ALL: [Qualifier; 3] = [Qualifier::Restrict, Qualifier::Volatile, Qualifier::Const];

    pub const fn mangled(self) -> &'static str {
        match self {
            Qualifier::Restrict => "r",
            Qualifier::Volatile => "V",
            Qualifier::Const => "K",
        }
    }

    pub const fn readable(self) -> &'static str {
        match self {
            Qualifier::Restrict => "restrict",
            Qualifier::Volatile => "volatile",
            Qualifier::Const => "const",
        }
    }

    /// The flag for this qualifier in a [`Qualifiers`] set.
    pub const fn flag(self) -> Qualifiers {
        match self {
            Qualifier::Restrict => Qualifiers::RESTRICT,
            Qualifier::Volatile => Qualifiers::VOLATILE,
            Qualifier::Const => Qualifiers::CONST,
        }
    }
}

bitflags! {
    /// The set of qualifiers on a pointer.
    ///
    /// A set has no insertion order; the encoding always walks it in
    /// [`Qualifier::ALL`] order.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Qualifiers: u8 {
        const RESTRICT = 1 << 0;
        const VOLATILE = 1 << 1;
        const CONST = 1 << 2;
    }
}

impl Qualifiers {
    /// Iterate the qualifiers present, in canonical order.
    pub fn iter_canonical(self) -> impl Iterator<Item = Qualifier> {
        Qualifier::ALL
            .into_iter()
            .filter(move |q| self.contains(q.flag()))
    }
}

impl From<Qualifier> for Qualifiers {
    fn from(q: Qualifier) -> Self {
        q.flag()
    }
}

impl FromIterator<Qualifier> for Qualifiers {
    fn from_iter<I: IntoIterator<Item = Qualifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Qualifiers::empty(), |acc, q| acc | q.flag())
    }
}
