use std::rc::Rc;

use tracing::debug;

use crate::bytecode::instruction_block::InstructionBlock;
use crate::runtime::{
    error::RuntimeError, leak_detector, namespace::Namespace, native_function::NativeFunction,
    static_data::StaticData, type_object, value::Value,
};
use crate::syntax::{code_fragment::CodeFragment, interner::StringInterner};

/// A callable function instance.
///
/// Every instance owns its instruction block, source fragment, line number,
/// and parameter counts, and shares one [`StaticData`] template with every
/// other instance of the same function. Cloning therefore produces an
/// independent instance whose instructions and counts can diverge, while
/// static slot writes remain visible across all instances.
///
/// The compiler builds a closure in place: construct against a template,
/// fill the instruction block, then set code, line, and parameter counts.
/// Once the closure is wrapped in `Rc` and handed to the runtime it is no
/// longer mutated except through its shared template.
#[derive(Debug)]
pub struct Closure {
    static_data: Rc<StaticData>,
    instructions: InstructionBlock,
    code: CodeFragment,
    line: Option<u32>,
    param_count: usize,
    min_param_count: usize,
    max_param_count: usize,
    variadic_slot: Option<usize>,
}

impl Closure {
    /// Creates an empty instance over an existing template.
    pub fn new(static_data: Rc<StaticData>) -> Self {
        leak_detector::record_closure();
        Closure {
            static_data,
            instructions: InstructionBlock::new(),
            code: CodeFragment::empty(),
            line: None,
            param_count: 0,
            min_param_count: 0,
            max_param_count: 0,
            variadic_slot: None,
        }
    }

    pub fn static_data(&self) -> &Rc<StaticData> {
        &self.static_data
    }

    pub fn instruction_block(&self) -> &InstructionBlock {
        &self.instructions
    }

    pub fn instruction_block_mut(&mut self) -> &mut InstructionBlock {
        &mut self.instructions
    }

    pub fn code(&self) -> &CodeFragment {
        &self.code
    }

    pub fn set_code(&mut self, code: CodeFragment) {
        self.code = code;
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn set_line(&mut self, line: u32) {
        self.line = Some(line);
    }

    pub fn param_count(&self) -> usize {
        self.param_count
    }

    pub fn min_param_count(&self) -> usize {
        self.min_param_count
    }

    pub fn max_param_count(&self) -> usize {
        self.max_param_count
    }

    /// Sets the declared parameter count and the accepted argument window in
    /// one step so the three values never disagree.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn set_parameter_counts(&mut self, param_count: usize, min: usize, max: usize) {
        assert!(
            min <= max,
            "inconsistent parameter counts: min={} max={}",
            min,
            max
        );
        self.param_count = param_count;
        self.min_param_count = min;
        self.max_param_count = max;
    }

    pub fn variadic_slot(&self) -> Option<usize> {
        self.variadic_slot
    }

    /// Marks the parameter at `slot` as the rest parameter.
    ///
    /// A slot at or past `param_count` designates a parameter that does not
    /// exist and argument binding treats it as no rest parameter at all.
    pub fn set_variadic_slot(&mut self, slot: Option<usize>) {
        self.variadic_slot = slot;
    }

    /// Human-readable synopsis: parameter count, accepted argument window,
    /// and source line when known.
    pub fn debug_string(&self) -> String {
        let args = match self.variadic_slot {
            Some(slot) if slot < self.param_count => format!("{}..", self.min_param_count),
            _ => format!("{}..{}", self.min_param_count, self.max_param_count),
        };
        match self.line {
            Some(line) => format!(
                "<fn params={} args={} line={}>",
                self.param_count, args, line
            ),
            None => format!("<fn params={} args={}>", self.param_count, args),
        }
    }
}

// Cloning shares the template and deep-copies everything owned, so the copy
// diverges freely while static slots stay common.
impl Clone for Closure {
    fn clone(&self) -> Self {
        leak_detector::record_closure();
        Closure {
            static_data: Rc::clone(&self.static_data),
            instructions: self.instructions.clone(),
            code: self.code.clone(),
            line: self.line,
            param_count: self.param_count,
            min_param_count: self.min_param_count,
            max_param_count: self.max_param_count,
            variadic_slot: self.variadic_slot,
        }
    }
}

/// Installs the `Closure` type object and its native methods into `globals`.
///
/// Hosts call this once while building their root namespace.
pub fn init(globals: &mut Namespace, interner: &mut StringInterner) {
    let ty = type_object::closure_type();
    let natives = [
        NativeFunction::new("paramCount", 0, 0, native_param_count),
        NativeFunction::new("minParamCount", 0, 0, native_min_param_count),
        NativeFunction::new("maxParamCount", 0, 0, native_max_param_count),
        NativeFunction::new("multiParam", 0, 0, native_multi_param),
        NativeFunction::new("line", 0, 0, native_line),
        NativeFunction::new("toDbgString", 0, 0, native_to_dbg_string),
        NativeFunction::new("_clone", 0, 0, native_clone),
    ];
    let count = natives.len();
    for native in natives {
        let name = interner.intern(native.name);
        ty.set_attribute(name, Value::Native(native));
    }
    globals.declare_constant(interner.intern("Closure"), Value::Type(ty));
    debug!(natives = count, "installed Closure type bindings");
}

fn receiver_closure<'a>(
    name: &'static str,
    receiver: &'a Value,
) -> Result<&'a Rc<Closure>, RuntimeError> {
    match receiver {
        Value::Closure(closure) => Ok(closure),
        other => Err(RuntimeError::Type {
            name,
            label: "this",
            expected: "Closure",
            got: other.type_name(),
        }),
    }
}

fn native_param_count(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("paramCount", receiver)?;
    Ok(Value::Number(closure.param_count() as f64))
}

fn native_min_param_count(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("minParamCount", receiver)?;
    Ok(Value::Number(closure.min_param_count() as f64))
}

fn native_max_param_count(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("maxParamCount", receiver)?;
    Ok(Value::Number(closure.max_param_count() as f64))
}

fn native_multi_param(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("multiParam", receiver)?;
    Ok(match closure.variadic_slot() {
        Some(slot) => Value::Number(slot as f64),
        None => Value::Void,
    })
}

fn native_line(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("line", receiver)?;
    Ok(match closure.line() {
        Some(line) => Value::Number(line as f64),
        None => Value::Void,
    })
}

fn native_to_dbg_string(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("toDbgString", receiver)?;
    Ok(Value::String(Rc::from(closure.debug_string())))
}

fn native_clone(receiver: &Value, _arguments: &[Value]) -> Result<Value, RuntimeError> {
    let closure = receiver_closure("_clone", receiver)?;
    Ok(Value::Closure(Rc::new(closure.as_ref().clone())))
}
