//! Native ABI representations.
//!
//! A [`NativeType`] is what a marshalled argument looks like to native code:
//! a scalar of a fixed width, an address, or an ordered composite of those.
//! It carries no connection back to the runtime metadata it was derived from;
//! two types with the same shape get equal representations.
//!
//! # Example
//!
//! ```
//! use il2cpp_reflect::NativeType;
//!
//! let vec2 = NativeType::Composite(vec![NativeType::Float, NativeType::Float]);
//! assert_eq!(vec2.to_string(), "[float, float]");
//! assert!(!vec2.is_scalar());
//! ```

use std::fmt;

/// The native calling-convention representation of a managed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeType {
    Void,
    Bool,
    /// Unsigned 8-bit character. The runtime's char narrows to one byte at the
    /// ABI boundary.
    UChar,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    /// Address-sized value: reference types, strings, arrays, raw and native
    /// pointers, and anything passed by reference.
    Pointer,
    /// A value type passed by value: its non-static fields' representations in
    /// declaration order. Empty composites are valid (a value type with only
    /// static fields).
    Composite(Vec<NativeType>),
}

impl NativeType {
    /// True for fixed-width scalar kinds, including `Void`.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Pointer | Self::Composite(_))
    }

    /// The alias string used when describing this representation to a
    /// NativeCallback-style FFI layer. Composites have no single alias; they
    /// render through `Display` instead.
    pub const fn alias(&self) -> Option<&'static str> {
        match self {
            Self::Void => Some("void"),
            Self::Bool => Some("bool"),
            Self::UChar => Some("uchar"),
            Self::Int8 => Some("int8"),
            Self::UInt8 => Some("uint8"),
            Self::Int16 => Some("int16"),
            Self::UInt16 => Some("uint16"),
            Self::Int32 => Some("int32"),
            Self::UInt32 => Some("uint32"),
            Self::Int64 => Some("int64"),
            Self::UInt64 => Some("uint64"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Pointer => Some("pointer"),
            Self::Composite(_) => None,
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Composite(fields) => {
                write!(f, "[")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{field}")?;
                }
                write!(f, "]")
            }
            // alias() covers every non-composite variant
            other => write!(f, "{}", other.alias().unwrap_or("?")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_aliases() {
        assert_eq!(NativeType::Void.alias(), Some("void"));
        assert_eq!(NativeType::Bool.alias(), Some("bool"));
        assert_eq!(NativeType::UChar.alias(), Some("uchar"));
        assert_eq!(NativeType::Int8.alias(), Some("int8"));
        assert_eq!(NativeType::UInt8.alias(), Some("uint8"));
        assert_eq!(NativeType::Int16.alias(), Some("int16"));
        assert_eq!(NativeType::UInt16.alias(), Some("uint16"));
        assert_eq!(NativeType::Int32.alias(), Some("int32"));
        assert_eq!(NativeType::UInt32.alias(), Some("uint32"));
        assert_eq!(NativeType::Int64.alias(), Some("int64"));
        assert_eq!(NativeType::UInt64.alias(), Some("uint64"));
        assert_eq!(NativeType::Float.alias(), Some("float"));
        assert_eq!(NativeType::Double.alias(), Some("double"));
        assert_eq!(NativeType::Pointer.alias(), Some("pointer"));
    }

    #[test]
    fn composite_has_no_alias() {
        assert_eq!(NativeType::Composite(vec![]).alias(), None);
    }

    #[test]
    fn is_scalar() {
        assert!(NativeType::Void.is_scalar());
        assert!(NativeType::Double.is_scalar());
        assert!(!NativeType::Pointer.is_scalar());
        assert!(!NativeType::Composite(vec![]).is_scalar());
    }

    #[test]
    fn display_scalar() {
        assert_eq!(NativeType::Int32.to_string(), "int32");
        assert_eq!(NativeType::Pointer.to_string(), "pointer");
    }

    #[test]
    fn display_composite() {
        let sig = NativeType::Composite(vec![NativeType::Int32, NativeType::Float]);
        assert_eq!(sig.to_string(), "[int32, float]");
    }

    #[test]
    fn display_empty_composite() {
        assert_eq!(NativeType::Composite(vec![]).to_string(), "[]");
    }

    #[test]
    fn display_nested_composite() {
        let inner = NativeType::Composite(vec![NativeType::Float, NativeType::Float]);
        let outer = NativeType::Composite(vec![NativeType::Int32, inner]);
        assert_eq!(outer.to_string(), "[int32, [float, float]]");
    }

    #[test]
    fn equality_is_structural() {
        let a = NativeType::Composite(vec![NativeType::Int32]);
        let b = NativeType::Composite(vec![NativeType::Int32]);
        assert_eq!(a, b);
        assert_ne!(a, NativeType::Composite(vec![NativeType::UInt32]));
    }
}
