use crate::value::{Builtin, Value};

/// The built-in function table, consulted when an identifier is not
/// bound anywhere in the environment chain.
pub static BUILTINS: &[Builtin] = &[
  Builtin {
    name: "len",
    func: builtin_len,
  },
  Builtin {
    name: "first",
    func: builtin_first,
  },
  Builtin {
    name: "last",
    func: builtin_last,
  },
  Builtin {
    name: "rest",
    func: builtin_rest,
  },
  Builtin {
    name: "push",
    func: builtin_push,
  },
  Builtin {
    name: "puts",
    func: builtin_puts,
  },
];

pub fn lookup(name: &str) -> Option<Value> {
  BUILTINS
    .iter()
    .find(|builtin| builtin.name == name)
    .map(Value::Builtin)
}

fn wrong_arity(got: usize, want: usize) -> Value {
  Value::Error(format!(
    "wrong number of arguments. got={}, want={}",
    got, want
  ))
}

fn unsupported(name: &str, value: &Value) -> Value {
  Value::Error(format!(
    "argument to `{}` not supported, got {}",
    name,
    value.type_name()
  ))
}

fn builtin_len(args: Vec<Value>) -> Value {
  if args.len() != 1 {
    return wrong_arity(args.len(), 1);
  }

  match &args[0] {
    Value::Str(value) => Value::Integer(value.len() as i64),
    Value::Array(elements) => Value::Integer(elements.len() as i64),
    other => unsupported("len", other),
  }
}

fn builtin_first(args: Vec<Value>) -> Value {
  if args.len() != 1 {
    return wrong_arity(args.len(), 1);
  }

  match &args[0] {
    Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
    other => unsupported("first", other),
  }
}

fn builtin_last(args: Vec<Value>) -> Value {
  if args.len() != 1 {
    return wrong_arity(args.len(), 1);
  }

  match &args[0] {
    Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
    other => unsupported("last", other),
  }
}

/// A new array without the first element; null when the array is empty.
fn builtin_rest(args: Vec<Value>) -> Value {
  if args.len() != 1 {
    return wrong_arity(args.len(), 1);
  }

  match &args[0] {
    Value::Array(elements) => {
      if elements.is_empty() {
        Value::Null
      } else {
        Value::Array(elements[1..].to_vec())
      }
    },
    other => unsupported("rest", other),
  }
}

/// A new array with the element appended; the original is untouched.
fn builtin_push(mut args: Vec<Value>) -> Value {
  if args.len() != 2 {
    return wrong_arity(args.len(), 2);
  }

  let value = args.pop().unwrap_or(Value::Null);
  match args.pop() {
    Some(Value::Array(mut elements)) => {
      elements.push(value);
      Value::Array(elements)
    },
    Some(other) => unsupported("push", &other),
    None => Value::Null,
  }
}

fn builtin_puts(args: Vec<Value>) -> Value {
  for arg in &args {
    println!("{}", arg);
  }
  Value::Null
}
