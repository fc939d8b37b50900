use bitflags::bitflags;
use once_cell::unsync::OnceCell;
use std::fmt;

use crate::api::Il2CppApi;
use crate::core::ty::Type;
use crate::handles::FieldHandle;

bitflags! {
    /// ECMA-335 field attribute bits, as stored in `FieldInfo::token` metadata.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldAttributes: u32 {
        const ACCESS_MASK = 0x0007;
        const STATIC = 0x0010;
        const INIT_ONLY = 0x0020;
        /// Compile-time constant; implies STATIC in the metadata.
        const LITERAL = 0x0040;
        const NOT_SERIALIZED = 0x0080;
        const HAS_FIELD_RVA = 0x0100;
        const SPECIAL_NAME = 0x0200;
        const RT_SPECIAL_NAME = 0x0400;
        const HAS_FIELD_MARSHAL = 0x1000;
        const PINVOKE_IMPL = 0x2000;
        const HAS_DEFAULT = 0x8000;
    }
}

/// A view over one `FieldInfo`.
pub struct Field<'a> {
    api: &'a dyn Il2CppApi,
    handle: FieldHandle,
    attributes: OnceCell<FieldAttributes>,
    ty: OnceCell<Type<'a>>,
}

impl<'a> Field<'a> {
    pub fn new(api: &'a dyn Il2CppApi, handle: FieldHandle) -> Self {
        Self {
            api,
            handle,
            attributes: OnceCell::new(),
            ty: OnceCell::new(),
        }
    }

    pub fn handle(&self) -> FieldHandle {
        self.handle
    }

    /// The field's raw attribute bits.
    pub fn attributes(&self) -> FieldAttributes {
        *self
            .attributes
            .get_or_init(|| FieldAttributes::from_bits_retain(self.api.field_get_flags(self.handle)))
    }

    /// Whether the field belongs to the class rather than its instances.
    /// Static fields do not participate in by-value marshalling.
    pub fn is_static(&self) -> bool {
        self.attributes().contains(FieldAttributes::STATIC)
    }

    /// The field's declared type.
    pub fn ty(&self) -> &Type<'a> {
        self.ty
            .get_or_init(|| Type::new(self.api, self.api.field_type(self.handle)))
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("handle", &self.handle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bit() {
        let public_static = FieldAttributes::from_bits_retain(0x0016);
        assert!(public_static.contains(FieldAttributes::STATIC));

        let public_instance = FieldAttributes::from_bits_retain(0x0006);
        assert!(!public_instance.contains(FieldAttributes::STATIC));
    }

    #[test]
    fn unknown_bits_are_retained() {
        let flags = FieldAttributes::from_bits_retain(0x0001_0010);
        assert!(flags.contains(FieldAttributes::STATIC));
        assert_eq!(flags.bits(), 0x0001_0010);
    }
}
