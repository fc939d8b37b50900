use once_cell::unsync::OnceCell;
use std::fmt;
use tracing::warn;

use crate::api::{Il2CppApi, NativeString};
use crate::core::class::Class;
use crate::core::object::Object;
use crate::error::{Il2CppError, Il2CppResult};
use crate::handles::TypeHandle;
use crate::types::{NativeType, TypeEnum};

/// A view over one `Il2CppType` in the target process.
///
/// Every derived property is a pure function of the handle plus process-wide
/// metadata, computed on first access and memoized per instance. The memo
/// cells are an optimization: a fresh `Type` over the same handle answers
/// identically. Instances are never explicitly destroyed; the underlying
/// metadata lives as long as the loaded type.
///
/// The wrapper is single-threaded by construction (`!Sync`); a concurrent host
/// gives each thread its own instances, and recomputation is always safe.
pub struct Type<'a> {
    api: &'a dyn Il2CppApi,
    handle: TypeHandle,
    class: OnceCell<Class<'a>>,
    data_type: OnceCell<Option<Box<Type<'a>>>>,
    is_by_ref: OnceCell<bool>,
    is_primitive: OnceCell<bool>,
    name: OnceCell<String>,
    object: OnceCell<Object>,
    type_enum: OnceCell<TypeEnum>,
    native_signature: OnceCell<NativeType>,
}

impl<'a> Type<'a> {
    pub fn new(api: &'a dyn Il2CppApi, handle: TypeHandle) -> Self {
        Self {
            api,
            handle,
            class: OnceCell::new(),
            data_type: OnceCell::new(),
            is_by_ref: OnceCell::new(),
            is_primitive: OnceCell::new(),
            name: OnceCell::new(),
            object: OnceCell::new(),
            type_enum: OnceCell::new(),
            native_signature: OnceCell::new(),
        }
    }

    /// Wrap a raw type address, rejecting null.
    pub fn from_raw(api: &'a dyn Il2CppApi, raw: usize) -> Il2CppResult<Self> {
        let handle = TypeHandle::new(raw).ok_or(Il2CppError::NullHandle)?;
        Ok(Self::new(api, handle))
    }

    pub fn handle(&self) -> TypeHandle {
        self.handle
    }

    /// The class describing this type.
    pub fn class(&self) -> &Class<'a> {
        self.class
            .get_or_init(|| Class::new(self.api, self.api.class_from_type(self.handle)))
    }

    /// The element type of this array type, if any.
    pub fn data_type(&self) -> Option<&Type<'a>> {
        self.data_type
            .get_or_init(|| {
                self.api
                    .type_get_data_type(self.handle)
                    .map(|handle| Box::new(Type::new(self.api, handle)))
            })
            .as_deref()
    }

    /// Whether this type is passed by reference.
    pub fn is_by_ref(&self) -> bool {
        *self
            .is_by_ref
            .get_or_init(|| self.api.type_is_by_ref(self.handle))
    }

    /// Whether this type is one of the built-in scalar kinds.
    pub fn is_primitive(&self) -> bool {
        *self
            .is_primitive
            .get_or_init(|| self.api.type_is_primitive(self.handle))
    }

    /// The type's name.
    ///
    /// The runtime hands back a transient buffer; it is freed before this
    /// returns, on the failure path included.
    pub fn name(&self) -> Il2CppResult<&str> {
        self.name
            .get_or_try_init(|| {
                let buffer = NativeString::new(self.api, self.api.type_get_name(self.handle));
                buffer.read()
            })
            .map(String::as_str)
    }

    /// The `System.Type` reflection object for this type.
    pub fn object(&self) -> Object {
        *self
            .object
            .get_or_init(|| Object::new(self.api.type_get_object(self.handle)))
    }

    /// The metadata-level kind of this type.
    pub fn type_enum(&self) -> TypeEnum {
        *self
            .type_enum
            .get_or_init(|| TypeEnum::from_raw(self.api.type_get_type_enum(self.handle)))
    }

    /// The native calling-convention representation of this type.
    ///
    /// By-reference types are always an address, whatever their underlying
    /// kind. Value types flatten into an ordered composite of their non-static
    /// fields. Unrecognized tags degrade to a pointer with a warning rather
    /// than failing: a newer runtime must never crash the host.
    pub fn native_signature(&self) -> &NativeType {
        self.native_signature.get_or_init(|| self.derive_signature())
    }

    fn derive_signature(&self) -> NativeType {
        if self.is_by_ref() {
            return NativeType::Pointer;
        }

        match self.type_enum() {
            TypeEnum::Void => NativeType::Void,
            TypeEnum::Boolean => NativeType::Bool,
            TypeEnum::Char => NativeType::UChar,
            TypeEnum::I1 => NativeType::Int8,
            TypeEnum::U1 => NativeType::UInt8,
            TypeEnum::I2 => NativeType::Int16,
            TypeEnum::U2 => NativeType::UInt16,
            TypeEnum::I4 => NativeType::Int32,
            TypeEnum::U4 => NativeType::UInt32,
            TypeEnum::I8 => NativeType::Int64,
            TypeEnum::U8 => NativeType::UInt64,
            TypeEnum::R4 => NativeType::Float,
            TypeEnum::R8 => NativeType::Double,
            TypeEnum::ValueType => flatten_value_type(self),
            TypeEnum::NativeInteger
            | TypeEnum::UnsignedNativeInteger
            | TypeEnum::Pointer
            | TypeEnum::String
            | TypeEnum::SingleDimensionalZeroLowerBoundArray
            | TypeEnum::Array => NativeType::Pointer,
            // Boxed and generic value types report through their class.
            TypeEnum::Class | TypeEnum::Object | TypeEnum::GenericInstance => {
                if self.class().is_value_type() {
                    flatten_value_type(self)
                } else {
                    NativeType::Pointer
                }
            }
            other => {
                let name = self.name().unwrap_or("<unreadable>");
                warn!(
                    ty = name,
                    tag = other.raw(),
                    "no native representation for type tag, defaulting to pointer"
                );
                NativeType::Pointer
            }
        }
    }
}

impl fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type").field("handle", &self.handle).finish()
    }
}

/// Flatten a value type into its non-static fields' native representations,
/// in declaration order.
///
/// Termination is a structural guarantee of the runtime's metadata: a value
/// type can contain itself only behind a reference or pointer, never by value.
fn flatten_value_type(ty: &Type<'_>) -> NativeType {
    let fields = ty
        .class()
        .fields()
        .iter()
        .filter(|field| !field.is_static())
        .map(|field| field.ty().native_signature().clone())
        .collect();
    NativeType::Composite(fields)
}
