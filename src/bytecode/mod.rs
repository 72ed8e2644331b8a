pub mod instruction;
pub mod instruction_block;
