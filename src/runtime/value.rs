use std::{fmt, rc::Rc};

use crate::runtime::{
    closure::Closure,
    native_function::NativeFunction,
    type_object::{self, TypeObject},
};

/// Runtime value used by evaluator stacks, static slots, and namespaces.
///
/// ## Memory Management Model
///
/// Heap-backed variants (String, Array, Closure, Type) use `Rc`, so a plain
/// `clone()` copies a handle and bumps a reference count. Primitives (Void,
/// Bool, Number) stay unboxed. All mutation happens on one thread; see the
/// module documentation in [`crate::runtime`] for the ownership rules and the
/// one legal back-edge.
///
/// `Rc<str>` and `Rc<Vec<Value>>` keep handle copies O(1) and avoid the
/// double indirection of boxed owned containers.
///
/// ## Equality
///
/// Data values compare structurally. Callables and type objects compare by
/// identity: two closures are equal only when they are the same heap object,
/// so a cloned closure is never equal to its original even though the two
/// share a template.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value.
    Void,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating point number, the only numeric kind.
    Number(f64),
    /// UTF-8 string value.
    String(Rc<str>),
    /// Ordered collection of values, immutable once built.
    Array(Rc<Vec<Value>>),
    /// Script function instance.
    Closure(Rc<Closure>),
    /// Host function handle.
    Native(NativeFunction),
    /// Runtime type descriptor.
    Type(Rc<TypeObject>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Number(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Closure(closure) => write!(f, "{}", closure.debug_string()),
            Value::Native(native) => write!(f, "<native {}>", native.name),
            Value::Type(ty) => write!(f, "<type {}>", ty.name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Returns the canonical runtime type label used in diagnostics and
    /// native error messages.
    ///
    /// These labels are user-visible and are expected to remain stable.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "Void",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Closure(_) => "Closure",
            Value::Native(_) => "Native",
            Value::Type(_) => "Type",
        }
    }

    /// Returns the per-thread type object for this value's kind.
    ///
    /// Values of the same kind always return the identical handle, so hosts
    /// can implement type checks with identity comparison.
    pub fn type_object(&self) -> Rc<TypeObject> {
        match self {
            Value::Void => type_object::void_type(),
            Value::Bool(_) => type_object::bool_type(),
            Value::Number(_) => type_object::number_type(),
            Value::String(_) => type_object::string_type(),
            Value::Array(_) => type_object::array_type(),
            Value::Closure(_) => type_object::closure_type(),
            Value::Native(_) => type_object::native_type(),
            Value::Type(_) => type_object::type_type(),
        }
    }

    /// Returns whether this value is truthy according to Ember semantics.
    ///
    /// Only `Bool(false)` and `Void` are falsy; all other values are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Void)
    }

    /// Produces a new owned instance of this value.
    ///
    /// Unlike `clone()`, which copies a handle, this is the script-visible
    /// clone operation:
    /// - primitives and immutable strings come back as-is,
    /// - arrays get a fresh spine with handle-copied elements,
    /// - closures get a fresh instance sharing the original's template,
    /// - type objects are singletons and come back as the same handle.
    pub fn clone_value(&self) -> Value {
        match self {
            Value::Void => Value::Void,
            Value::Bool(v) => Value::Bool(*v),
            Value::Number(v) => Value::Number(*v),
            Value::String(v) => Value::String(Rc::clone(v)),
            Value::Array(elements) => Value::array(elements.iter().cloned().collect()),
            Value::Closure(closure) => Value::Closure(Rc::new(closure.as_ref().clone())),
            Value::Native(native) => Value::Native(native.clone()),
            Value::Type(ty) => Value::Type(Rc::clone(ty)),
        }
    }

    /// Builds an array value and records the allocation.
    pub fn array(elements: Vec<Value>) -> Value {
        crate::runtime::leak_detector::record_array();
        Value::Array(Rc::new(elements))
    }

    /// Converts a value to interpolation-friendly string text.
    ///
    /// Unlike [`std::fmt::Display`], strings are returned without quotes.
    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(v) => v.to_string(),
            other => other.to_string(),
        }
    }
}
