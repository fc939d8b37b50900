//! Wrappers over runtime-owned metadata handles.

mod class;
mod field;
mod object;
mod ty;

pub use class::Class;
pub use field::{Field, FieldAttributes};
pub use object::Object;
pub use ty::Type;
