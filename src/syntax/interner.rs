use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::syntax::string_id::StringId;

/// An intern table mapping identifier text to stable [`StringId`] handles.
///
/// The compiler owns one interner per compilation and embeds the handles it
/// produces in compiled artifacts (static slot names, instruction operands,
/// attribute keys). Anything holding such an artifact resolves names back
/// through the same interner.
///
/// The empty string is interned at construction as [`StringId::EMPTY`], so
/// placeholder origins resolve without an interner in hand.
///
/// # Example
///
/// ```
/// use ember_core::syntax::interner::StringInterner;
///
/// let mut interner = StringInterner::new();
/// let a = interner.intern("counter");
/// let b = interner.intern("counter");
///
/// assert_eq!(a, b);
/// assert_eq!(interner.resolve(a), "counter");
/// ```
#[derive(Debug, Clone)]
pub struct StringInterner {
    ids: FxHashMap<Rc<str>, StringId>,
    strings: Vec<Rc<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        let mut interner = Self {
            ids: FxHashMap::default(),
            strings: Vec::new(),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, StringId::EMPTY);
        interner
    }

    /// Interns a string and returns its handle.
    ///
    /// Returns the existing handle when the text was interned before.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` unique strings are interned.
    pub fn intern(&mut self, text: &str) -> StringId {
        if let Some(id) = self.ids.get(text) {
            return *id;
        }

        let index = self.strings.len();
        assert!(
            index <= u32::MAX as usize,
            "intern table overflow: more than {} unique identifiers",
            u32::MAX
        );
        let id = StringId::new(index as u32);
        let stored: Rc<str> = Rc::from(text);
        self.strings.push(stored.clone());
        self.ids.insert(stored, id);
        trace!(id = id.as_u32(), text, "interned identifier");
        id
    }

    /// Resolves a handle to its text.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this interner.
    #[inline]
    pub fn resolve(&self, id: StringId) -> &str {
        self.try_resolve(id)
            .unwrap_or_else(|| panic!("invalid string id: {:?}", id))
    }

    /// Resolves a handle, returning `None` for foreign handles.
    pub fn try_resolve(&self, id: StringId) -> Option<&str> {
        self.strings.get(id.as_u32() as usize).map(|s| s.as_ref())
    }

    /// Returns the handle for already-interned text without interning it.
    pub fn lookup(&self, text: &str) -> Option<StringId> {
        self.ids.get(text).copied()
    }

    /// Number of interned strings, counting the pre-interned empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_reuses_id_for_same_text() {
        let mut interner = StringInterner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("alpha");
        let c = interner.intern("beta");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(a), "alpha");
        assert_eq!(interner.resolve(c), "beta");
    }

    #[test]
    fn ids_are_dense_in_intern_order() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let c = interner.intern("c");

        assert_eq!(a.as_u32(), 1);
        assert_eq!(b.as_u32(), 2);
        assert_eq!(c.as_u32(), 3);
        assert_eq!(interner.len(), 4);
    }

    #[test]
    fn empty_string_is_preinterned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.len(), 1);
        assert_eq!(interner.resolve(StringId::EMPTY), "");
        assert_eq!(interner.intern(""), StringId::EMPTY);
    }

    #[test]
    fn lookup_does_not_intern() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.lookup("missing"), None);

        let id = interner.intern("present");
        assert_eq!(interner.lookup("present"), Some(id));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn try_resolve_returns_none_for_foreign_id() {
        let interner = StringInterner::new();
        assert_eq!(interner.try_resolve(StringId::new(7)), None);
    }

    #[test]
    #[should_panic(expected = "invalid string id")]
    fn resolve_panics_on_foreign_id() {
        let interner = StringInterner::new();
        let _ = interner.resolve(StringId::new(7));
    }

    #[test]
    fn handles_unicode_identifiers() {
        let mut interner = StringInterner::new();
        let alpha = interner.intern("α");

        assert_eq!(interner.resolve(alpha), "α");
        assert_eq!(interner.intern("α"), alpha);
    }
}
