//! Runtime object model: values, closures, templates, and namespaces.
//!
//! # Ownership Model
//! Ember runtime values are reference counted with `Rc` and are mutated from a
//! single thread. Heap-backed `Value` variants share structure freely; a value
//! is destroyed the moment its last handle drops.
//!
//! One back-edge is legal by design: a closure stored in a static slot of its
//! own template (how recursive functions see themselves) forms a cycle and
//! stays allocated until the host resets that slot. Everything else must stay
//! acyclic:
//! - Arrays are immutable after construction and cannot contain themselves.
//! - Namespace and type attribute tables must not be made to point back at a
//!   value that owns the table.
//!
//! The [`leak_detector`] counters exist so tests and embedders can check that
//! allocation and release stay balanced across a workload.
use crate::runtime::{error::RuntimeError, value::Value};

pub mod binding;
pub mod closure;
pub mod error;
pub mod leak_detector;
pub mod namespace;
pub mod native_function;
pub mod static_data;
pub mod type_object;
pub mod value;

/// Signature shared by every native method: receiver plus evaluated arguments.
pub type NativeFn = fn(&Value, &[Value]) -> Result<Value, RuntimeError>;
