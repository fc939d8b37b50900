use once_cell::unsync::OnceCell;
use std::fmt;

use crate::api::Il2CppApi;
use crate::core::field::Field;
use crate::handles::ClassHandle;

/// A view over one `Il2CppClass`, reduced to the slice of the class surface
/// that signature derivation needs.
pub struct Class<'a> {
    api: &'a dyn Il2CppApi,
    handle: ClassHandle,
    is_value_type: OnceCell<bool>,
    fields: OnceCell<Vec<Field<'a>>>,
}

impl<'a> Class<'a> {
    pub fn new(api: &'a dyn Il2CppApi, handle: ClassHandle) -> Self {
        Self {
            api,
            handle,
            is_value_type: OnceCell::new(),
            fields: OnceCell::new(),
        }
    }

    pub fn handle(&self) -> ClassHandle {
        self.handle
    }

    /// Whether instances of this class are passed and copied by value.
    pub fn is_value_type(&self) -> bool {
        *self
            .is_value_type
            .get_or_init(|| self.api.class_is_value_type(self.handle))
    }

    /// The class's fields, in declaration (memory layout) order.
    pub fn fields(&self) -> &[Field<'a>] {
        self.fields.get_or_init(|| {
            self.api
                .class_fields(self.handle)
                .into_iter()
                .map(|handle| Field::new(self.api, handle))
                .collect()
        })
    }
}

impl fmt::Debug for Class<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("handle", &self.handle)
            .finish()
    }
}
