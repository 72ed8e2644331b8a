use std::fmt;

use crate::runtime::{NativeFn, error::RuntimeError, value::Value};

/// Host function installed on a type object or namespace.
///
/// Carries the accepted argument window so arity is checked once, here,
/// instead of inside every native body.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub min_arg_count: usize,
    pub max_arg_count: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: &'static str, min_arg_count: usize, max_arg_count: usize, func: NativeFn) -> Self {
        NativeFunction {
            name,
            min_arg_count,
            max_arg_count,
            func,
        }
    }

    /// Checks the argument window and invokes the host function.
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value, RuntimeError> {
        if arguments.len() < self.min_arg_count {
            return Err(RuntimeError::Arity {
                min: self.min_arg_count,
                got: arguments.len(),
            });
        }
        if arguments.len() > self.max_arg_count {
            return Err(RuntimeError::ArityWindow {
                min: self.min_arg_count,
                max: self.max_arg_count,
                got: arguments.len(),
            });
        }
        (self.func)(receiver, arguments)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
