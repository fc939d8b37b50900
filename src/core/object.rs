use crate::handles::ObjectHandle;

/// A view over one `Il2CppObject`.
///
/// Only the identity is carried here; richer object access belongs to the
/// call-marshalling layer above this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    handle: ObjectHandle,
}

impl Object {
    pub fn new(handle: ObjectHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }
}
