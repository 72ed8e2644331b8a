use std::rc::Rc;

use crate::syntax::{byte_span::ByteSpan, string_id::StringId};

/// Immutable descriptor of the source-text region a closure was compiled
/// from, used to attribute diagnostics to locations.
///
/// A fragment is a value: copies are cheap because the full source sits
/// behind an `Rc`, and two fragments compare equal field for field. The
/// compiler freezes a closure's fragment once the literal finishes
/// compiling; nothing in the runtime mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFragment {
    origin: StringId,
    source: Rc<str>,
    span: ByteSpan,
}

impl CodeFragment {
    pub fn new(origin: StringId, source: Rc<str>, span: ByteSpan) -> Self {
        Self {
            origin,
            source,
            span,
        }
    }

    /// An empty fragment for closures constructed before their source is
    /// known. Uses the pre-interned empty origin with a zero-length span.
    pub fn empty() -> Self {
        Self {
            origin: StringId::EMPTY,
            source: Rc::from(""),
            span: ByteSpan::new(0, 0),
        }
    }

    /// Identifier of the source this fragment came from (usually a file
    /// name interned by the compiler).
    pub fn origin(&self) -> StringId {
        self.origin
    }

    /// The complete source text the span indexes into.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    /// The spanned slice of the source. Degrades to `""` when the span does
    /// not address the source; fragments feed diagnostics, so a stale span
    /// must not take down the runtime.
    pub fn code_string(&self) -> &str {
        self.source.get(self.span.start..self.span.end).unwrap_or("")
    }
}
