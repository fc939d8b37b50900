//! Native calling-convention signatures for IL2CPP runtime types.
//!
//! Given an opaque handle to a type's runtime metadata, [`Type`] exposes the
//! type's derived properties (class, element type, by-reference flag, name,
//! metadata tag, …) and computes its [`NativeType`]: the ABI-level shape used
//! to marshal a value of that type across the managed/native boundary. Value
//! types flatten recursively into their non-static fields; by-reference
//! parameters are always an address; unrecognized metadata tags degrade to a
//! pointer with a logged warning rather than failing.
//!
//! The crate never talks to a process directly. All metadata reads go through
//! the [`Il2CppApi`] trait, supplied by the embedding host.
//!
//! # Example
//!
//! ```no_run
//! use il2cpp_reflect::{Il2CppApi, NativeType, Type, TypeHandle};
//!
//! fn signature_of(api: &dyn Il2CppApi, raw: usize) -> NativeType {
//!     let ty = Type::from_raw(api, raw).expect("non-null type handle");
//!     ty.native_signature().clone()
//! }
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod handles;
pub mod types;

pub use crate::api::{Il2CppApi, NativeString};
pub use crate::core::{Class, Field, FieldAttributes, Object, Type};
pub use crate::error::{Il2CppError, Il2CppResult};
pub use crate::handles::{ClassHandle, FieldHandle, NativeStringHandle, ObjectHandle, TypeHandle};
pub use crate::types::{NativeType, TypeEnum};
