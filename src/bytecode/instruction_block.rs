use std::fmt::Write as _;
use std::rc::Rc;

use thiserror::Error;

use crate::bytecode::instruction::Instruction;
use crate::runtime::static_data::StaticData;
use crate::syntax::string_id::StringId;

/// Structural defect found while pre-flighting a compiled block.
///
/// Any of these indicates a corrupted or mismatched compiled program, a
/// fault of the producing compiler rather than of the running script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("jump target {target} at position {position} is outside the block ({len} instructions)")]
    JumpOutOfRange {
        position: usize,
        target: usize,
        len: usize,
    },
    #[error("static slot {slot} at position {position} is outside the template ({slot_count} slots)")]
    StaticSlotOutOfRange {
        position: usize,
        slot: u32,
        slot_count: usize,
    },
    #[error("string handle {handle} at position {position} is outside the string table ({table_len} entries)")]
    StringHandleOutOfRange {
        position: usize,
        handle: u32,
        table_len: usize,
    },
    #[error("local slot {slot} at position {position} is outside the declared locals ({local_count})")]
    LocalSlotOutOfRange {
        position: usize,
        slot: u32,
        local_count: usize,
    },
}

/// The executable form of one function literal's body: an ordered,
/// zero-based sequence of [`Instruction`] records, addressed by instruction
/// position (never by byte offset).
///
/// Alongside the records the block carries the string constants its
/// `PushString` operands index and the names of the local-variable slots the
/// literal declared. Both tables are append-only while the compiler emits
/// into the block; the evaluator only reads them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionBlock {
    instructions: Vec<Instruction>,
    string_table: Vec<Rc<str>>,
    local_variables: Vec<StringId>,
}

impl InstructionBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction, returning its position.
    pub fn emit(&mut self, instruction: Instruction) -> usize {
        let position = self.instructions.len();
        self.instructions.push(instruction);
        position
    }

    /// Overwrites the instruction at `position`, used by the compiler to
    /// patch forward-jump placeholders.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the block.
    pub fn patch(&mut self, position: usize, instruction: Instruction) {
        let len = self.instructions.len();
        let slot = self
            .instructions
            .get_mut(position)
            .unwrap_or_else(|| panic!("instruction position out of range: {} >= {}", position, len));
        *slot = instruction;
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Instruction> {
        self.instructions.get(position)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Appends a string constant, returning the handle `PushString` operands
    /// encode. Handles are dense and never reused.
    pub fn declare_string(&mut self, text: &str) -> u32 {
        let handle = self.string_table.len();
        assert!(
            handle <= u32::MAX as usize,
            "string table overflow: more than {} constants",
            u32::MAX
        );
        self.string_table.push(Rc::from(text));
        handle as u32
    }

    /// Resolves a string-constant handle.
    ///
    /// # Panics
    ///
    /// Panics for handles outside the table; a compiled program whose
    /// handles do not match its block cannot be executed meaningfully.
    pub fn string_constant(&self, handle: u32) -> &str {
        self.string_table
            .get(handle as usize)
            .map(|s| s.as_ref())
            .unwrap_or_else(|| {
                panic!(
                    "string handle out of range: {} >= {}",
                    handle,
                    self.string_table.len()
                )
            })
    }

    pub fn string_count(&self) -> usize {
        self.string_table.len()
    }

    /// Records a local-variable slot declared by the literal, returning its
    /// dense index.
    pub fn declare_local_variable(&mut self, name: StringId) -> u32 {
        let index = self.local_variables.len();
        assert!(
            index <= u32::MAX as usize,
            "local table overflow: more than {} locals",
            u32::MAX
        );
        self.local_variables.push(name);
        index as u32
    }

    pub fn local_count(&self) -> usize {
        self.local_variables.len()
    }

    pub fn local_variables(&self) -> &[StringId] {
        &self.local_variables
    }

    /// Checks every operand against the block, its tables, and the template
    /// the block will execute against: jump targets in `[0, len)`, static
    /// slots within the template, string handles within the string table,
    /// local slots within the declared locals.
    ///
    /// A failure is attributable to the compiler that produced the block.
    pub fn validate(&self, static_data: &StaticData) -> Result<(), BlockError> {
        let len = self.instructions.len();
        let slot_count = static_data.slot_count();
        let table_len = self.string_table.len();
        let local_count = self.local_variables.len();

        for (position, instruction) in self.instructions.iter().enumerate() {
            if let Some(target) = instruction.jump_target() {
                if target >= len {
                    return Err(BlockError::JumpOutOfRange {
                        position,
                        target,
                        len,
                    });
                }
            }
            if let Some(slot) = instruction.static_slot() {
                if slot as usize >= slot_count {
                    return Err(BlockError::StaticSlotOutOfRange {
                        position,
                        slot,
                        slot_count,
                    });
                }
            }
            if let Some(handle) = instruction.string_handle() {
                if handle as usize >= table_len {
                    return Err(BlockError::StringHandleOutOfRange {
                        position,
                        handle,
                        table_len,
                    });
                }
            }
            if let Some(slot) = instruction.local_slot() {
                if slot as usize >= local_count {
                    return Err(BlockError::LocalSlotOutOfRange {
                        position,
                        slot,
                        local_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Positional listing of the block for debugging and snapshots.
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        for (position, instruction) in self.instructions.iter().enumerate() {
            let _ = writeln!(out, "{:04} {}", position, instruction);
        }
        out
    }
}
