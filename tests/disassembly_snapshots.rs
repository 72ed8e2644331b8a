use insta::assert_snapshot;

use ember_core::bytecode::instruction::Instruction;
use ember_core::bytecode::instruction_block::InstructionBlock;
use ember_core::runtime::static_data::StaticData;
use ember_core::syntax::interner::StringInterner;

#[test]
fn counting_loop_listing() {
    let mut interner = StringInterner::new();
    let template = StaticData::new();
    let counter = template.declare_static_variable(interner.intern("counter"));

    let mut block = InstructionBlock::new();
    block.emit(Instruction::PushNumber(0.0));
    block.emit(Instruction::SetStatic(counter));
    let loop_start = block.emit(Instruction::GetStatic(counter));
    block.emit(Instruction::PushNumber(10.0));
    let exit_jump = block.emit(Instruction::JumpOnFalse(0));
    block.emit(Instruction::GetStatic(counter));
    block.emit(Instruction::Jump(loop_start as u32));
    let end = block.emit(Instruction::PushVoid);
    block.patch(exit_jump, Instruction::JumpOnFalse(end as u32));

    assert!(block.validate(&template).is_ok());
    assert_snapshot!(block.disassemble().trim_end(), @r"
    0000 PushNumber 0
    0001 SetStatic 0
    0002 GetStatic 0
    0003 PushNumber 10
    0004 JumpOnFalse 7
    0005 GetStatic 0
    0006 Jump 2
    0007 PushVoid
    ");
}

#[test]
fn call_with_local_and_string_listing() {
    let mut interner = StringInterner::new();
    let print = interner.intern("print");

    let mut block = InstructionBlock::new();
    let greeting = block.declare_string("hello");
    let local = block.declare_local_variable(interner.intern("message"));
    block.emit(Instruction::PushString(greeting));
    block.emit(Instruction::SetLocal(local));
    block.emit(Instruction::GetVariable(print));
    block.emit(Instruction::GetLocal(local));
    block.emit(Instruction::Call(1));
    block.emit(Instruction::Pop);

    assert_snapshot!(block.disassemble().trim_end(), @r"
    0000 PushString 0
    0001 SetLocal 0
    0002 GetVariable 1
    0003 GetLocal 0
    0004 Call 1
    0005 Pop
    ");
}

#[test]
fn validation_reports_the_offending_position() {
    let template = StaticData::new();
    let mut block = InstructionBlock::new();
    block.emit(Instruction::PushNumber(1.0));
    block.emit(Instruction::SetStatic(3));

    let err = block.validate(&template).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"static slot 3 at position 1 is outside the template (0 slots)"
    );
}
