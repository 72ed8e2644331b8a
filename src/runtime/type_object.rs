use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::runtime::value::Value;
use crate::syntax::string_id::StringId;

/// Runtime descriptor for one kind of value.
///
/// A type object carries the printable type name and an attribute table that
/// hosts install native methods into. Each kind has exactly one type object
/// per thread, created lazily on first use, so two values of the same kind
/// always report the identical `Rc` handle and identity comparison works for
/// type checks.
#[derive(Debug)]
pub struct TypeObject {
    name: &'static str,
    attributes: RefCell<FxHashMap<StringId, Value>>,
}

impl TypeObject {
    pub fn new(name: &'static str) -> Self {
        TypeObject {
            name,
            attributes: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Installs or replaces an attribute. Later declarations win.
    pub fn set_attribute(&self, name: StringId, value: Value) {
        self.attributes.borrow_mut().insert(name, value);
    }

    pub fn attribute(&self, name: StringId) -> Option<Value> {
        self.attributes.borrow().get(&name).cloned()
    }

    /// Attribute names ordered by interner id so listings stay deterministic.
    pub fn attribute_names(&self) -> Vec<StringId> {
        let mut names: Vec<StringId> = self.attributes.borrow().keys().copied().collect();
        names.sort_by_key(|name| name.as_u32());
        names
    }
}

thread_local! {
    static VOID_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Void"));
    static BOOL_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Bool"));
    static NUMBER_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Number"));
    static STRING_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("String"));
    static ARRAY_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Array"));
    static CLOSURE_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Closure"));
    static NATIVE_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Native"));
    static TYPE_TYPE: Rc<TypeObject> = Rc::new(TypeObject::new("Type"));
}

pub fn void_type() -> Rc<TypeObject> {
    VOID_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn bool_type() -> Rc<TypeObject> {
    BOOL_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn number_type() -> Rc<TypeObject> {
    NUMBER_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn string_type() -> Rc<TypeObject> {
    STRING_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn array_type() -> Rc<TypeObject> {
    ARRAY_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn closure_type() -> Rc<TypeObject> {
    CLOSURE_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn native_type() -> Rc<TypeObject> {
    NATIVE_TYPE.with(|singleton| Rc::clone(singleton))
}

pub fn type_type() -> Rc<TypeObject> {
    TYPE_TYPE.with(|singleton| Rc::clone(singleton))
}
