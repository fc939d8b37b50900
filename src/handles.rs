//! Opaque handle types for runtime-owned metadata.
//!
//! Every handle wraps a non-zero process address owned by the IL2CPP runtime.
//! The non-null invariant is enforced at construction, so a handle in hand is
//! always safe to pass back to the metadata provider. Handles are plain values:
//! copying one copies a view, never ownership.

use std::fmt;
use std::num::NonZeroUsize;

/// Handle to a type's runtime metadata (`Il2CppType*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(NonZeroUsize);

impl TypeHandle {
    /// Wrap a raw address, rejecting null.
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    /// Get the underlying address.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

/// Handle to a class's runtime metadata (`Il2CppClass*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassHandle(NonZeroUsize);

impl ClassHandle {
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for ClassHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

/// Handle to a field's runtime metadata (`FieldInfo*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(NonZeroUsize);

impl FieldHandle {
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

/// Handle to a reflection object (`Il2CppObject*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(NonZeroUsize);

impl ObjectHandle {
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

/// Handle to a transient native string buffer allocated by the runtime.
///
/// The caller that receives one of these owes the runtime a free; see
/// [`crate::api::NativeString`] for the guard that guarantees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeStringHandle(NonZeroUsize);

impl NativeStringHandle {
    #[inline]
    pub const fn new(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(addr) => Some(Self(addr)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for NativeStringHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn null_address_rejected() {
        assert!(TypeHandle::new(0).is_none());
        assert!(ClassHandle::new(0).is_none());
        assert!(FieldHandle::new(0).is_none());
        assert!(ObjectHandle::new(0).is_none());
        assert!(NativeStringHandle::new(0).is_none());
    }

    #[test]
    fn round_trip() {
        let handle = TypeHandle::new(0xdead_beef).unwrap();
        assert_eq!(handle.get(), 0xdead_beef);
    }

    #[test]
    fn copy_semantics() {
        let a = TypeHandle::new(1).unwrap();
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn display_is_hex() {
        let handle = ClassHandle::new(0xff).unwrap();
        assert_eq!(format!("{handle}"), "0xff");
    }

    #[test]
    fn hash_in_set() {
        let mut set = HashSet::new();
        set.insert(TypeHandle::new(1).unwrap());
        set.insert(TypeHandle::new(2).unwrap());
        set.insert(TypeHandle::new(1).unwrap());
        assert_eq!(set.len(), 2);
    }
}
