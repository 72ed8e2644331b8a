use rustc_hash::FxHashMap;
use tracing::trace;

use crate::runtime::value::Value;
use crate::syntax::string_id::StringId;

/// A mutable bag of named values, used for globals and embedder-built scopes.
///
/// Hosts populate a namespace during startup (type constants, native
/// functions) and hand it to the evaluator, which resolves `GetVariable`
/// operands against it.
#[derive(Debug, Default)]
pub struct Namespace {
    attributes: FxHashMap<StringId, Value>,
}

impl Namespace {
    pub fn new() -> Self {
        Namespace {
            attributes: FxHashMap::default(),
        }
    }

    /// Binds `name` to `value`. Later declarations win.
    pub fn declare_constant(&mut self, name: StringId, value: Value) {
        trace!(name = name.as_u32(), "declared constant");
        self.attributes.insert(name, value);
    }

    pub fn attribute(&self, name: StringId) -> Option<&Value> {
        self.attributes.get(&name)
    }

    /// Attribute names ordered by interner id so listings stay deterministic.
    pub fn attribute_names(&self) -> Vec<StringId> {
        let mut names: Vec<StringId> = self.attributes.keys().copied().collect();
        names.sort_by_key(|name| name.as_u32());
        names
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
