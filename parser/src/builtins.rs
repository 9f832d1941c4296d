//! FILENAME: parser/src/builtins.rs
//! PURPOSE: The fixed builtin-function and builtin-constant name tables.
//! CONTEXT: Function names are resolved at parse time: a call to a name
//! that is not listed here is a syntax error, so the interpreter never has
//! to deal with an unknown callee. Constants parse as ordinary symbols and
//! stay symbolic through simplification.

/// Builtin functions resolved at parse time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BuiltinFunction {
    Sqrt,
    Exp,
    Ln,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Abs,
}

impl BuiltinFunction {
    /// Resolves a name against the builtin-function table.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(BuiltinFunction::Sqrt),
            "exp" => Some(BuiltinFunction::Exp),
            "ln" => Some(BuiltinFunction::Ln),
            "log" => Some(BuiltinFunction::Log),
            "sin" => Some(BuiltinFunction::Sin),
            "cos" => Some(BuiltinFunction::Cos),
            "tan" => Some(BuiltinFunction::Tan),
            "asin" => Some(BuiltinFunction::Asin),
            "acos" => Some(BuiltinFunction::Acos),
            "atan" => Some(BuiltinFunction::Atan),
            "abs" => Some(BuiltinFunction::Abs),
            _ => None,
        }
    }

    /// The surface name, used for rendering calls back to text.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::Sqrt => "sqrt",
            BuiltinFunction::Exp => "exp",
            BuiltinFunction::Ln => "ln",
            BuiltinFunction::Log => "log",
            BuiltinFunction::Sin => "sin",
            BuiltinFunction::Cos => "cos",
            BuiltinFunction::Tan => "tan",
            BuiltinFunction::Asin => "asin",
            BuiltinFunction::Acos => "acos",
            BuiltinFunction::Atan => "atan",
            BuiltinFunction::Abs => "abs",
        }
    }
}

impl std::fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Known symbolic constants. These parse as symbols; the table exists so
/// front-ends and future passes can recognize them.
pub const BUILTIN_CONSTANTS: &[&str] = &["pi", "e"];

pub fn is_builtin_function(name: &str) -> bool {
    BuiltinFunction::from_name(name).is_some()
}

pub fn is_builtin_constant(name: &str) -> bool {
    BUILTIN_CONSTANTS.contains(&name)
}
