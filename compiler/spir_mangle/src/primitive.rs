//! Primitive kinds and their spellings.
//!
//! Each kind has one row in [`Primitive::row`]: the human-readable OpenCL C
//! spelling used in diagnostics, the mangled code, and the first revision
//! that accepts it. The match is exhaustive, so a new kind cannot be added
//! without a row.
//!
//! Mangled codes follow the Itanium ABI for builtin scalars (`i`, `f`,
//! `Dh`, ...). Opaque OpenCL types use a length-prefixed vendor name
//! (`11ocl_image2d`), exactly like a user-defined type.

use crate::version::{SpirVersion, Versioned};

/// A primitive (leaf) type kind.
///
/// The discriminant doubles as the fixed pool index of the pre-allocated
/// node for this kind, see [`TypeId::primitive`](crate::TypeId::primitive).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Primitive {
    // === Scalars ===
    Bool = 0,
    UChar = 1,
    Char = 2,
    UShort = 3,
    Short = 4,
    UInt = 5,
    Int = 6,
    ULong = 7,
    Long = 8,
    Half = 9,
    Float = 10,
    Double = 11,

    // === Special ===
    Void = 12,
    /// The `...` marker of a variadic prototype.
    VarArg = 13,

    // === Images ===
    Image1d = 14,
    Image2d = 15,
    Image2dDepth = 16,
    Image2dMsaa = 17,
    Image2dMsaaDepth = 18,
    Image3d = 19,
    Image1dBuffer = 20,
    Image1dArray = 21,
    Image2dArray = 22,
    Image2dArrayDepth = 23,
    Image2dArrayMsaa = 24,
    Image2dArrayMsaaDepth = 25,

    // === Opaque handles ===
    Event = 26,
    Sampler = 27,
    /// Device-side enqueue event (`clk_event_t`).
    ClkEvent = 28,
    Pipe = 29,
    ReserveId = 30,
    Queue = 31,
    NdRange = 32,
}

/// One row of the primitive code table.
#[derive(Copy, Clone, Debug)]
struct Row {
    readable: &'static str,
    mangled: &'static str,
    since: SpirVersion,
}

const fn row(readable: &'static str, mangled: &'static str, since: SpirVersion) -> Row {
    Row {
        readable,
        mangled,
        since,
    }
}

impl Primitive {
    /// Number of primitive kinds.
    pub const COUNT: usize = 33;

    /// Every primitive kind, in discriminant order.
    pub const ALL: [Primitive; Self::COUNT] = [
        Primitive::Bool,
        Primitive::UChar,
        Primitive::Char,
        Primitive::UShort,
        Primitive::Short,
        Primitive::UInt,
        Primitive::Int,
        Primitive::ULong,
        Primitive::Long,
        Primitive::Half,
        Primitive::Float,
        Primitive::Double,
        Primitive::Void,
        Primitive::VarArg,
        Primitive::Image1d,
        Primitive::Image2d,
        Primitive::Image2dDepth,
        Primitive::Image2dMsaa,
        Primitive::Image2dMsaaDepth,
        Primitive::Image3d,
        Primitive::Image1dBuffer,
        Primitive::Image1dArray,
        Primitive::Image2dArray,
        Primitive::Image2dArrayDepth,
        Primitive::Image2dArrayMsaa,
        Primitive::Image2dArrayMsaaDepth,
        Primitive::Event,
        Primitive::Sampler,
        Primitive::ClkEvent,
        Primitive::Pipe,
        Primitive::ReserveId,
        Primitive::Queue,
        Primitive::NdRange,
    ];

    #[allow(clippy::enum_glob_use)]
    const fn row(self) -> Row {
        use Primitive::*;
        use SpirVersion::{V1_2, V2_0};

        match self {
            Bool => row("bool", "b", V1_2),
            UChar => row("uchar", "h", V1_2),
            Char => row("char", "c", V1_2),
            UShort => row("ushort", "t", V1_2),
            Short => row("short", "s", V1_2),
            UInt => row("uint", "j", V1_2),
            Int => row("int", "i", V1_2),
            ULong => row("ulong", "m", V1_2),
            Long => row("long", "l", V1_2),
            Half => row("half", "Dh", V1_2),
            Float => row("float", "f", V1_2),
            Double => row("double", "d", V1_2),
            Void => row("void", "v", V1_2),
            VarArg => row("...", "z", V1_2),
            Image1d => row("image1d_t", "11ocl_image1d", V1_2),
            Image2d => row("image2d_t", "11ocl_image2d", V1_2),
            Image2dDepth => row("image2d_depth_t", "16ocl_image2ddepth", V1_2),
            Image2dMsaa => row("image2d_msaa_t", "15ocl_image2dmsaa", V1_2),
            Image2dMsaaDepth => row("image2d_msaa_depth_t", "20ocl_image2dmsaadepth", V1_2),
            Image3d => row("image3d_t", "11ocl_image3d", V1_2),
            Image1dBuffer => row("image1d_buffer_t", "17ocl_image1dbuffer", V1_2),
            Image1dArray => row("image1d_array_t", "16ocl_image1darray", V1_2),
            Image2dArray => row("image2d_array_t", "16ocl_image2darray", V1_2),
            Image2dArrayDepth => row("image2d_array_depth_t", "21ocl_image2darraydepth", V1_2),
            Image2dArrayMsaa => row("image2d_array_msaa_t", "20ocl_image2darraymsaa", V1_2),
            Image2dArrayMsaaDepth => row(
                "image2d_array_msaa_depth_t",
                "25ocl_image2darraymsaadepth",
                V1_2,
            ),
            Event => row("event_t", "9ocl_event", V1_2),
            Sampler => row("sampler_t", "11ocl_sampler", V1_2),
            ClkEvent => row("clk_event_t", "12ocl_clkevent", V2_0),
            Pipe => row("pipe_t", "8ocl_pipe", V2_0),
            ReserveId => row("reserve_id_t", "13ocl_reserveid", V2_0),
            Queue => row("queue_t", "9ocl_queue", V2_0),
            NdRange => row("ndrange_t", "9ndrange_t", V2_0),
        }
    }

    /// The mangled code, e.g. `"i"` for `int` or `"9ocl_event"` for `event_t`.
    #[inline]
    pub const fn mangled(self) -> &'static str {
        self.row().mangled
    }

    /// The OpenCL C spelling used in diagnostics, e.g. `"uint"`.
    #[inline]
    pub const fn readable(self) -> &'static str {
        self.row().readable
    }

    /// Check if this kind can be a vector element.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        (self as u8) <= (Primitive::Double as u8)
    }

    /// Look up a kind by its fixed index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl Versioned for Primitive {
    fn since(&self) -> SpirVersion {
        self.row().since
    }
}
