//! SPIR name mangling.
//!
//! Encodes builtin function prototypes into the symbol names SPIR
//! front-ends and linkers agree on: Itanium C++ ABI mangling with OpenCL
//! vendor types and address-space qualifiers.
//!
//! - [`TypePool`] / [`TypeId`]: arena of parameter type nodes
//! - [`Primitive`], [`AddressSpace`], [`Qualifiers`]: the closed vocabulary
//!   and its spellings
//! - [`SpirVersion`]: target revision, gating newer types
//! - [`FunctionDescriptor`]: a name plus parameter types
//! - [`NameMangler`] / [`mangle`]: the encoder
//!
//! # Example
//!
//! ```
//! use spir_mangle::{
//!     mangle, AddressSpace, FunctionDescriptor, MangleErrorKind, Primitive, Qualifiers,
//!     SpirVersion, TypeId, TypePool,
//! };
//!
//! let mut pool = TypePool::new();
//! let int = TypeId::primitive(Primitive::Int);
//! let atomic = pool.atomic(int);
//! let ptr = pool.pointer_with(atomic, AddressSpace::Global, Qualifiers::VOLATILE);
//! let fd = FunctionDescriptor::new("myfunc", [ptr, int]);
//!
//! assert_eq!(
//!     mangle(&pool, &fd, SpirVersion::V2_0).unwrap(),
//!     "_Z6myfuncPVU3AS1U7_Atomicii"
//! );
//!
//! let err = mangle(&pool, &fd, SpirVersion::V1_2).unwrap_err();
//! assert_eq!(err.kind(), MangleErrorKind::TypeNotSupported);
//! ```

mod attr;
mod descriptor;
mod error;
mod mangle;
mod pool;
mod primitive;
mod type_id;
mod version;

pub use attr::{AddressSpace, Qualifier, Qualifiers};
pub use descriptor::{FunctionDescriptor, NULL_FUNCTION_STRING};
pub use error::{MangleError, MangleErrorKind};
pub use mangle::{mangle, NameMangler, MANGLE_PREFIX};
pub use pool::{BlockParams, TypeData, TypeKind, TypePool, VECTOR_LENGTHS};
pub use primitive::Primitive;
pub use type_id::TypeId;
pub use version::{is_supported, ParseVersionError, SpirVersion, Versioned};

use std::sync::Once;

/// Compile-time assertion that a type has a specific size.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

// Handles are passed by value everywhere; keep them register-sized.
static_assert_size!(TypeId, 4);
static_assert_size!(Primitive, 1);
static_assert_size!(Qualifiers, 1);

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=spir_mangle=debug`
/// (rejections) or `RUST_LOG=spir_mangle=trace` (every substitution).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
