//! Mangling failures.

use crate::descriptor::NULL_FUNCTION_STRING;
use crate::version::SpirVersion;

/// Why a prototype could not be mangled.
///
/// The `Display` output is the diagnostic that replaces the symbol name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MangleError {
    /// The descriptor was the null descriptor.
    #[error("{}", NULL_FUNCTION_STRING)]
    NullFunctionDescriptor,

    /// A parameter uses a type or attribute the target revision lacks.
    ///
    /// `ty` is the readable spelling of the whole offending parameter.
    #[error("Type {ty} is not supported in {version}")]
    TypeNotSupported { ty: String, version: SpirVersion },
}

/// Payload-free discriminant of a [`MangleError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MangleErrorKind {
    NullFunctionDescriptor,
    TypeNotSupported,
}

impl MangleError {
    pub fn kind(&self) -> MangleErrorKind {
        match self {
            MangleError::NullFunctionDescriptor => MangleErrorKind::NullFunctionDescriptor,
            MangleError::TypeNotSupported { .. } => MangleErrorKind::TypeNotSupported,
        }
    }
}
