//! Pure type-model definitions.
//!
//! - [`TypeEnum`]: the metadata-level kind of a type, with an explicit
//!   `Unknown` variant for tags from runtimes newer than this crate.
//! - [`NativeType`]: the derived native ABI representation.

mod native;
mod type_enum;

pub use native::NativeType;
pub use type_enum::TypeEnum;
