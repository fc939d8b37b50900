//! Metadata-level type tags.

use std::fmt;

/// The metadata-level kind of a type, as carried in `Il2CppType::type`.
///
/// Tag values are the ECMA-335 element types the IL2CPP runtime stores
/// verbatim. The set is closed for any given runtime build, but newer runtimes
/// may introduce tags this crate has never seen; those arrive as
/// [`TypeEnum::Unknown`] with the raw value preserved, so the caller can still
/// log or degrade rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEnum {
    /// End-of-list sentinel inside signatures.
    End,
    Void,
    Boolean,
    /// `System.Char`. Two bytes in memory, one byte at the native ABI boundary.
    Char,
    /// Signed 8-bit integer.
    I1,
    /// Unsigned 8-bit integer.
    U1,
    /// Signed 16-bit integer.
    I2,
    /// Unsigned 16-bit integer.
    U2,
    /// Signed 32-bit integer.
    I4,
    /// Unsigned 32-bit integer.
    U4,
    /// Signed 64-bit integer.
    I8,
    /// Unsigned 64-bit integer.
    U8,
    /// Single-precision float.
    R4,
    /// Double-precision float.
    R8,
    String,
    /// Unmanaged pointer (`T*`).
    Pointer,
    /// By-reference passing mode (`ref`/`out` parameters).
    ByReference,
    ValueType,
    Class,
    /// Generic type parameter of a class (`!T`).
    GenericParameter,
    /// Multi-dimensional or non-zero-lower-bound array.
    Array,
    /// Instantiated generic type (`List<int>`).
    GenericInstance,
    /// `System.TypedReference`.
    TypedReference,
    /// `System.IntPtr` / native-width signed integer.
    NativeInteger,
    /// `System.UIntPtr` / native-width unsigned integer.
    UnsignedNativeInteger,
    FunctionPointer,
    Object,
    /// Single-dimensional, zero-lower-bound array (`T[]`).
    SingleDimensionalZeroLowerBoundArray,
    /// Generic type parameter of a method (`!!T`).
    MethodGenericParameter,
    RequiredModifier,
    OptionalModifier,
    Internal,
    Modifier,
    Sentinel,
    Pinned,
    Enum,
    /// A tag this crate does not recognize; the raw value is preserved.
    Unknown(u32),
}

impl TypeEnum {
    /// Decode a raw metadata tag.
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0x00 => Self::End,
            0x01 => Self::Void,
            0x02 => Self::Boolean,
            0x03 => Self::Char,
            0x04 => Self::I1,
            0x05 => Self::U1,
            0x06 => Self::I2,
            0x07 => Self::U2,
            0x08 => Self::I4,
            0x09 => Self::U4,
            0x0a => Self::I8,
            0x0b => Self::U8,
            0x0c => Self::R4,
            0x0d => Self::R8,
            0x0e => Self::String,
            0x0f => Self::Pointer,
            0x10 => Self::ByReference,
            0x11 => Self::ValueType,
            0x12 => Self::Class,
            0x13 => Self::GenericParameter,
            0x14 => Self::Array,
            0x15 => Self::GenericInstance,
            0x16 => Self::TypedReference,
            0x18 => Self::NativeInteger,
            0x19 => Self::UnsignedNativeInteger,
            0x1b => Self::FunctionPointer,
            0x1c => Self::Object,
            0x1d => Self::SingleDimensionalZeroLowerBoundArray,
            0x1e => Self::MethodGenericParameter,
            0x1f => Self::RequiredModifier,
            0x20 => Self::OptionalModifier,
            0x21 => Self::Internal,
            0x40 => Self::Modifier,
            0x41 => Self::Sentinel,
            0x45 => Self::Pinned,
            0x55 => Self::Enum,
            other => Self::Unknown(other),
        }
    }

    /// The raw metadata tag value.
    pub const fn raw(self) -> u32 {
        match self {
            Self::End => 0x00,
            Self::Void => 0x01,
            Self::Boolean => 0x02,
            Self::Char => 0x03,
            Self::I1 => 0x04,
            Self::U1 => 0x05,
            Self::I2 => 0x06,
            Self::U2 => 0x07,
            Self::I4 => 0x08,
            Self::U4 => 0x09,
            Self::I8 => 0x0a,
            Self::U8 => 0x0b,
            Self::R4 => 0x0c,
            Self::R8 => 0x0d,
            Self::String => 0x0e,
            Self::Pointer => 0x0f,
            Self::ByReference => 0x10,
            Self::ValueType => 0x11,
            Self::Class => 0x12,
            Self::GenericParameter => 0x13,
            Self::Array => 0x14,
            Self::GenericInstance => 0x15,
            Self::TypedReference => 0x16,
            Self::NativeInteger => 0x18,
            Self::UnsignedNativeInteger => 0x19,
            Self::FunctionPointer => 0x1b,
            Self::Object => 0x1c,
            Self::SingleDimensionalZeroLowerBoundArray => 0x1d,
            Self::MethodGenericParameter => 0x1e,
            Self::RequiredModifier => 0x1f,
            Self::OptionalModifier => 0x20,
            Self::Internal => 0x21,
            Self::Modifier => 0x40,
            Self::Sentinel => 0x41,
            Self::Pinned => 0x45,
            Self::Enum => 0x55,
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<u32> for TypeEnum {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for TypeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "Unknown(0x{raw:02x})"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[(u32, TypeEnum)] = &[
        (0x00, TypeEnum::End),
        (0x01, TypeEnum::Void),
        (0x02, TypeEnum::Boolean),
        (0x03, TypeEnum::Char),
        (0x04, TypeEnum::I1),
        (0x05, TypeEnum::U1),
        (0x06, TypeEnum::I2),
        (0x07, TypeEnum::U2),
        (0x08, TypeEnum::I4),
        (0x09, TypeEnum::U4),
        (0x0a, TypeEnum::I8),
        (0x0b, TypeEnum::U8),
        (0x0c, TypeEnum::R4),
        (0x0d, TypeEnum::R8),
        (0x0e, TypeEnum::String),
        (0x0f, TypeEnum::Pointer),
        (0x10, TypeEnum::ByReference),
        (0x11, TypeEnum::ValueType),
        (0x12, TypeEnum::Class),
        (0x13, TypeEnum::GenericParameter),
        (0x14, TypeEnum::Array),
        (0x15, TypeEnum::GenericInstance),
        (0x16, TypeEnum::TypedReference),
        (0x18, TypeEnum::NativeInteger),
        (0x19, TypeEnum::UnsignedNativeInteger),
        (0x1b, TypeEnum::FunctionPointer),
        (0x1c, TypeEnum::Object),
        (0x1d, TypeEnum::SingleDimensionalZeroLowerBoundArray),
        (0x1e, TypeEnum::MethodGenericParameter),
        (0x1f, TypeEnum::RequiredModifier),
        (0x20, TypeEnum::OptionalModifier),
        (0x21, TypeEnum::Internal),
        (0x40, TypeEnum::Modifier),
        (0x41, TypeEnum::Sentinel),
        (0x45, TypeEnum::Pinned),
        (0x55, TypeEnum::Enum),
    ];

    #[test]
    fn known_tags_decode() {
        for &(raw, expected) in KNOWN {
            assert_eq!(TypeEnum::from_raw(raw), expected, "tag 0x{raw:02x}");
        }
    }

    #[test]
    fn known_tags_round_trip() {
        for &(raw, tag) in KNOWN {
            assert_eq!(tag.raw(), raw);
        }
    }

    #[test]
    fn unrecognized_tag_preserves_raw_value() {
        let tag = TypeEnum::from_raw(0x77);
        assert_eq!(tag, TypeEnum::Unknown(0x77));
        assert_eq!(tag.raw(), 0x77);
    }

    #[test]
    fn gaps_in_tag_space_are_unknown() {
        // 0x17 and 0x1a are unassigned in the element-type table.
        assert_eq!(TypeEnum::from_raw(0x17), TypeEnum::Unknown(0x17));
        assert_eq!(TypeEnum::from_raw(0x1a), TypeEnum::Unknown(0x1a));
    }

    #[test]
    fn display_unknown() {
        assert_eq!(format!("{}", TypeEnum::Unknown(0x77)), "Unknown(0x77)");
        assert_eq!(format!("{}", TypeEnum::ValueType), "ValueType");
    }
}
