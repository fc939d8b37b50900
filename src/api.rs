//! The metadata provider boundary.
//!
//! Everything this crate knows about a running IL2CPP process arrives through
//! [`Il2CppApi`]. A production provider forwards each method to the exported
//! `il2cpp_*` functions of the instrumented process; tests substitute an
//! in-memory stub. The wrappers in [`crate::core`] never reach around this trait.

use crate::error::Il2CppResult;
use crate::handles::{ClassHandle, FieldHandle, NativeStringHandle, ObjectHandle, TypeHandle};

/// Narrow view of the IL2CPP metadata API consumed by the type wrappers.
///
/// All methods are deterministic reads of process-wide metadata: calling one
/// twice with the same handle yields the same answer, which is what makes the
/// wrappers' memoization an optimization rather than a correctness requirement.
pub trait Il2CppApi {
    /// `il2cpp_class_from_type`: the class describing a type.
    fn class_from_type(&self, ty: TypeHandle) -> ClassHandle;

    /// `il2cpp_type_get_data_type`: the element type of an array-like type,
    /// or `None` for everything else.
    fn type_get_data_type(&self, ty: TypeHandle) -> Option<TypeHandle>;

    /// Whether values of this type are passed as an address.
    fn type_is_by_ref(&self, ty: TypeHandle) -> bool;

    /// Whether this is one of the runtime's built-in scalar types.
    fn type_is_primitive(&self, ty: TypeHandle) -> bool;

    /// `il2cpp_type_get_name`: allocates a transient string the caller must
    /// free through [`Il2CppApi::string_free`]. Wrap the result in a
    /// [`NativeString`] immediately.
    fn type_get_name(&self, ty: TypeHandle) -> NativeStringHandle;

    /// `il2cpp_type_get_object`: the `System.Type` reflection object.
    fn type_get_object(&self, ty: TypeHandle) -> ObjectHandle;

    /// Raw metadata-level type tag; decoded by [`crate::types::TypeEnum::from_raw`].
    fn type_get_type_enum(&self, ty: TypeHandle) -> u32;

    /// Whether instances of the class are passed and copied by value.
    fn class_is_value_type(&self, class: ClassHandle) -> bool;

    /// The class's fields, in declaration (memory layout) order.
    fn class_fields(&self, class: ClassHandle) -> Vec<FieldHandle>;

    /// Raw ECMA-335 field attribute bits; decoded by
    /// [`crate::core::FieldAttributes`].
    fn field_get_flags(&self, field: FieldHandle) -> u32;

    /// The field's declared type.
    fn field_type(&self, field: FieldHandle) -> TypeHandle;

    /// Decode a transient native string as UTF-8.
    fn string_read(&self, string: NativeStringHandle) -> Il2CppResult<String>;

    /// Return a transient native string buffer to the runtime.
    fn string_free(&self, string: NativeStringHandle);
}

/// Scope guard for a transient native string buffer.
///
/// The runtime allocates the buffer behind `type_get_name`; the guard frees it
/// when dropped, so the buffer is released on every exit path, including a
/// failed decode.
pub struct NativeString<'a> {
    api: &'a dyn Il2CppApi,
    handle: NativeStringHandle,
}

impl<'a> NativeString<'a> {
    pub fn new(api: &'a dyn Il2CppApi, handle: NativeStringHandle) -> Self {
        Self { api, handle }
    }

    /// Decode the buffer as UTF-8.
    pub fn read(&self) -> Il2CppResult<String> {
        self.api.string_read(self.handle)
    }
}

impl Drop for NativeString<'_> {
    fn drop(&mut self) {
        self.api.string_free(self.handle);
    }
}
