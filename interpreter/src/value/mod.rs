use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use parser::ast::{Block, Expr};

use crate::env::Env;

/// A runtime value. `TRUE`, `FALSE` and `NULL` are canonical shapes of
/// this enum, so equality on the variant is the identity comparison the
/// boolean operators rely on.
#[derive(Debug, Clone)]
pub enum Value {
  Integer(i64),
  Boolean(bool),
  Str(String),
  Null,
  Return(Box<Value>),
  Error(String),
  Function(Rc<Function>),
  Builtin(&'static Builtin),
  Array(Vec<Value>),
  Hash(HashMap<HashKey, HashPair>),
  Quote(Expr),
  Macro(Rc<MacroDef>),
}

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

/// A user function together with the environment frame that was active
/// at its creation; calls extend that frame.
pub struct Function {
  pub parameters: Vec<String>,
  pub body: Block,
  pub env: Rc<RefCell<Env>>,
}

/// A macro definition bound during the definition pass.
pub struct MacroDef {
  pub parameters: Vec<String>,
  pub body: Block,
  pub env: Rc<RefCell<Env>>,
}

// The captured environment may contain the function itself, so the
// derived Debug would recurse forever.
impl fmt::Debug for Function {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Function")
      .field("parameters", &self.parameters)
      .field("body", &self.body.to_string())
      .finish()
  }
}

impl fmt::Debug for MacroDef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MacroDef")
      .field("parameters", &self.parameters)
      .field("body", &self.body.to_string())
      .finish()
  }
}

/// A built-in function: a name and a plain function over the evaluated
/// arguments.
#[derive(Debug)]
pub struct Builtin {
  pub name: &'static str,
  pub func: fn(Vec<Value>) -> Value,
}

/// Map key for hashable values: the type tag plus a 64-bit value hash.
/// Equal content yields an equal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
  pub kind: &'static str,
  pub value: u64,
}

/// One stored hash entry; the original key object is kept next to the
/// value for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
  pub key: Value,
  pub value: Value,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

/// FNV-1a 64, folded over the raw bytes.
fn fnv1a(bytes: &[u8]) -> u64 {
  let mut hash = FNV_OFFSET_BASIS;
  for &byte in bytes {
    hash ^= u64::from(byte);
    hash = hash.wrapping_mul(FNV_PRIME);
  }
  hash
}

impl Value {
  /// The type tag used in error messages.
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Integer(_) => "INTEGER",
      Value::Boolean(_) => "BOOLEAN",
      Value::Str(_) => "STRING",
      Value::Null => "NULL",
      Value::Return(_) => "RETURN_VALUE",
      Value::Error(_) => "ERROR",
      Value::Function(_) => "FUNCTION",
      Value::Builtin(_) => "BUILTIN",
      Value::Array(_) => "ARRAY",
      Value::Hash(_) => "HASH",
      Value::Quote(_) => "QUOTE",
      Value::Macro(_) => "MACRO",
    }
  }

  /// The hash-key protocol; integers, booleans and strings are the only
  /// hashable values.
  pub fn hash_key(&self) -> Option<HashKey> {
    let value = match self {
      Value::Integer(value) => *value as u64,
      Value::Boolean(value) => u64::from(*value),
      Value::Str(value) => fnv1a(value.as_bytes()),
      _ => return None,
    };

    Some(HashKey {
      kind: self.type_name(),
      value,
    })
  }

  pub fn inspect(&self) -> String {
    self.to_string()
  }

  pub fn is_error(&self) -> bool {
    matches!(self, Value::Error(_))
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Integer(value) => write!(f, "{}", value),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Str(value) => write!(f, "{}", value),
      Value::Null => write!(f, "null"),
      Value::Return(value) => write!(f, "{}", value),
      Value::Error(message) => write!(f, "ERROR: {}", message),
      Value::Function(function) => write!(
        f,
        "fn({}) {{\n{}\n}}",
        function.parameters.join(", "),
        function.body
      ),
      Value::Builtin(_) => write!(f, "builtin function"),
      Value::Array(elements) => {
        let elements: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", elements.join(", "))
      },
      Value::Hash(pairs) => {
        let pairs: Vec<String> = pairs
          .values()
          .map(|pair| format!("{}: {}", pair.key, pair.value))
          .collect();
        write!(f, "{{{}}}", pairs.join(", "))
      },
      Value::Quote(node) => write!(f, "QUOTE({})", node),
      Value::Macro(macro_def) => write!(
        f,
        "macro({}) {{\n{}\n}}",
        macro_def.parameters.join(", "),
        macro_def.body
      ),
    }
  }
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Integer(a), Value::Integer(b)) => a == b,
      (Value::Boolean(a), Value::Boolean(b)) => a == b,
      (Value::Str(a), Value::Str(b)) => a == b,
      (Value::Null, Value::Null) => true,
      (Value::Return(a), Value::Return(b)) => a == b,
      (Value::Error(a), Value::Error(b)) => a == b,
      (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
      (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
      (Value::Array(a), Value::Array(b)) => a == b,
      (Value::Hash(a), Value::Hash(b)) => a == b,
      (Value::Quote(a), Value::Quote(b)) => a == b,
      (Value::Macro(a), Value::Macro(b)) => Rc::ptr_eq(a, b),
      _ => false,
    }
  }
}
