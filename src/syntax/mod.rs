pub mod byte_span;
pub mod code_fragment;
pub mod interner;
pub mod string_id;
