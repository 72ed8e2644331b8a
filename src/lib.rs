pub mod bytecode;
pub mod runtime;
pub mod syntax;
