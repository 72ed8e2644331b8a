use std::fmt;

use crate::syntax::string_id::StringId;

/// One opcode+operand record consumed by the evaluator.
///
/// Operands fall into distinct classes, each with its own accessor below:
/// absolute instruction positions (jump targets), handles into the owning
/// block's string-constant table, static-slot indices into the closure
/// template the block executes against, local-slot indices, and interned
/// identifiers, which travel as [`StringId`] and are resolved by whoever
/// owns the matching interner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    PushVoid,
    PushBool(bool),
    PushNumber(f64),
    /// Push a string constant from the block's string table.
    PushString(u32),
    /// Push an identifier value.
    PushIdentifier(StringId),
    Dup,
    Pop,
    Not,
    GetLocal(u32),
    SetLocal(u32),
    /// Reset a local slot to the uninitialized state.
    ResetLocal(u32),
    /// Look a variable up by name through the evaluator's scopes.
    GetVariable(StringId),
    SetVariable(StringId),
    /// Read a static slot of the executing closure's template.
    GetStatic(u32),
    /// Write a static slot of the executing closure's template.
    SetStatic(u32),
    /// Unconditional jump to an absolute instruction position.
    Jump(u32),
    JumpOnTrue(u32),
    JumpOnFalse(u32),
    /// Call the value below the arguments with the given argument count.
    Call(u32),
}

impl Instruction {
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::PushVoid => "PushVoid",
            Instruction::PushBool(_) => "PushBool",
            Instruction::PushNumber(_) => "PushNumber",
            Instruction::PushString(_) => "PushString",
            Instruction::PushIdentifier(_) => "PushIdentifier",
            Instruction::Dup => "Dup",
            Instruction::Pop => "Pop",
            Instruction::Not => "Not",
            Instruction::GetLocal(_) => "GetLocal",
            Instruction::SetLocal(_) => "SetLocal",
            Instruction::ResetLocal(_) => "ResetLocal",
            Instruction::GetVariable(_) => "GetVariable",
            Instruction::SetVariable(_) => "SetVariable",
            Instruction::GetStatic(_) => "GetStatic",
            Instruction::SetStatic(_) => "SetStatic",
            Instruction::Jump(_) => "Jump",
            Instruction::JumpOnTrue(_) => "JumpOnTrue",
            Instruction::JumpOnFalse(_) => "JumpOnFalse",
            Instruction::Call(_) => "Call",
        }
    }

    /// Absolute target position for jump instructions.
    pub fn jump_target(&self) -> Option<usize> {
        match self {
            Instruction::Jump(target)
            | Instruction::JumpOnTrue(target)
            | Instruction::JumpOnFalse(target) => Some(*target as usize),
            _ => None,
        }
    }

    /// Static-slot operand for template reads/writes.
    pub fn static_slot(&self) -> Option<u32> {
        match self {
            Instruction::GetStatic(slot) | Instruction::SetStatic(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Handle into the owning block's string-constant table.
    pub fn string_handle(&self) -> Option<u32> {
        match self {
            Instruction::PushString(handle) => Some(*handle),
            _ => None,
        }
    }

    /// Local-slot operand.
    pub fn local_slot(&self) -> Option<u32> {
        match self {
            Instruction::GetLocal(slot)
            | Instruction::SetLocal(slot)
            | Instruction::ResetLocal(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Interned identifier operand.
    pub fn identifier(&self) -> Option<StringId> {
        match self {
            Instruction::PushIdentifier(id)
            | Instruction::GetVariable(id)
            | Instruction::SetVariable(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushVoid | Instruction::Dup | Instruction::Pop | Instruction::Not => {
                write!(f, "{}", self.name())
            }
            Instruction::PushBool(value) => write!(f, "{} {}", self.name(), value),
            Instruction::PushNumber(value) => write!(f, "{} {}", self.name(), value),
            Instruction::PushString(handle) => write!(f, "{} {}", self.name(), handle),
            Instruction::PushIdentifier(id)
            | Instruction::GetVariable(id)
            | Instruction::SetVariable(id) => write!(f, "{} {}", self.name(), id.as_u32()),
            Instruction::GetLocal(operand)
            | Instruction::SetLocal(operand)
            | Instruction::ResetLocal(operand)
            | Instruction::GetStatic(operand)
            | Instruction::SetStatic(operand)
            | Instruction::Jump(operand)
            | Instruction::JumpOnTrue(operand)
            | Instruction::JumpOnFalse(operand)
            | Instruction::Call(operand) => write!(f, "{} {}", self.name(), operand),
        }
    }
}
