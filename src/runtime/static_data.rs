use std::cell::RefCell;
use std::fmt;

use tracing::trace;

use crate::runtime::{leak_detector, value::Value};
use crate::syntax::string_id::StringId;

/// Compile-time template shared by every closure instance of one function.
///
/// A template holds the function's static variables as two parallel tables,
/// one of names and one of current values, indexed by the dense slot numbers
/// that `declare_static_variable` hands out. Instructions address slots by
/// those numbers, so a slot index stays valid for the template's whole
/// lifetime and declaration order is observable.
///
/// Templates are shared through `Rc`: the compiler declares the slots once,
/// and every instance cloned from the function reads and writes the same
/// value table. Slot values use interior mutability because writes happen
/// while the template is shared; all access is single-threaded.
pub struct StaticData {
    names: RefCell<Vec<StringId>>,
    values: RefCell<Vec<Value>>,
}

impl StaticData {
    pub fn new() -> Self {
        leak_detector::record_template();
        StaticData {
            names: RefCell::new(Vec::new()),
            values: RefCell::new(Vec::new()),
        }
    }

    /// Appends a slot for `name`, initialized to void, and returns its index.
    ///
    /// Indices are dense: the k-th declaration returns `k - 1`. Declaring the
    /// same name twice creates two slots; lookups by name resolve to the
    /// later one.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots are declared.
    pub fn declare_static_variable(&self, name: StringId) -> u32 {
        let mut names = self.names.borrow_mut();
        let mut values = self.values.borrow_mut();
        let index = names.len();
        assert!(
            index <= u32::MAX as usize,
            "static slot table overflow: more than {} slots",
            u32::MAX
        );
        names.push(name);
        values.push(Value::Void);
        trace!(slot = index, "declared static variable");
        index as u32
    }

    pub fn slot_count(&self) -> usize {
        self.names.borrow().len()
    }

    /// Name of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the table. An out-of-range slot
    /// operand is a compiler bug, not a script error.
    pub fn slot_name(&self, index: u32) -> StringId {
        let names = self.names.borrow();
        match names.get(index as usize) {
            Some(name) => *name,
            None => panic!(
                "static slot index out of range: {} >= {}",
                index,
                names.len()
            ),
        }
    }

    /// Snapshot of all slot names in declaration order.
    pub fn names(&self) -> Vec<StringId> {
        self.names.borrow().clone()
    }

    /// Current value of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the table.
    pub fn value(&self, index: u32) -> Value {
        let values = self.values.borrow();
        match values.get(index as usize) {
            Some(value) => value.clone(),
            None => panic!(
                "static slot index out of range: {} >= {}",
                index,
                values.len()
            ),
        }
    }

    /// Replaces the value of the slot at `index`.
    ///
    /// The write is visible to every holder of this template.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the table.
    pub fn set_value(&self, index: u32, value: Value) {
        let mut values = self.values.borrow_mut();
        let len = values.len();
        match values.get_mut(index as usize) {
            Some(slot) => *slot = value,
            None => panic!("static slot index out of range: {} >= {}", index, len),
        }
    }

    /// Index of the most recent slot declared under `name`.
    pub fn index_of(&self, name: StringId) -> Option<u32> {
        self.names
            .borrow()
            .iter()
            .rposition(|candidate| *candidate == name)
            .map(|index| index as u32)
    }
}

impl Default for StaticData {
    fn default() -> Self {
        Self::new()
    }
}

// Slot values may point back at closures holding this template, so Debug
// prints the shape only.
impl fmt::Debug for StaticData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticData")
            .field("slots", &self.slot_count())
            .finish()
    }
}
