use thiserror::Error;

/// Recoverable runtime failure raised while binding or invoking a callable.
///
/// Each variant carries a stable error code that script-level exception
/// handlers can match on. Contract violations inside the runtime itself, such
/// as a static slot index past the end of its template, are not represented
/// here: those abort via panic because no caller can meaningfully continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A call supplied fewer arguments than the callee's minimum.
    #[error("wrong number of arguments: want at least {min}, got {got}")]
    Arity { min: usize, got: usize },

    /// A native call supplied more arguments than its binding accepts.
    #[error("wrong number of arguments: want {min}..{max}, got {got}")]
    ArityWindow { min: usize, max: usize, got: usize },

    /// A native was invoked on a receiver of the wrong runtime type.
    #[error("{name} expected {label} to be {expected}, got {got}")]
    Type {
        name: &'static str,
        label: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// A native ran and reported a failure of its own.
    #[error("{name}: {message}")]
    Native { name: &'static str, message: String },
}

impl RuntimeError {
    /// Stable code for script-level handlers and diagnostics output.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Arity { .. } | RuntimeError::ArityWindow { .. } => "E2001",
            RuntimeError::Type { .. } => "E2002",
            RuntimeError::Native { .. } => "E2003",
        }
    }
}
