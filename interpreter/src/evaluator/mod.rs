use std::{cell::RefCell, collections::HashMap, rc::Rc};

use lexer::token::{types::TokenKind, Token};
use parser::ast::{Block, Expr, Program, Stmt};

use crate::{
  builtins,
  env::Env,
  value::{Function, HashPair, Value, FALSE, NULL, TRUE},
};

mod quote;

/// Tree-walking evaluation over AST + environment. The first error value
/// produced anywhere becomes the result of every enclosing rule.
pub struct Interpreter {}

impl Interpreter {
  pub fn new() -> Self {
    Self {}
  }

  /// Runs a whole program: a return value is unwrapped once so the
  /// program yields what was returned; errors stop everything.
  pub fn eval_program(&self, program: &Program, env: &Rc<RefCell<Env>>) -> Value {
    let mut result = NULL;

    for stmt in &program.statements {
      match self.eval_statement(stmt, env) {
        Value::Return(value) => return *value,
        err @ Value::Error(_) => return err,
        value => result = value,
      }
    }

    result
  }

  /// Runs a block. Unlike a program, a return value is passed through
  /// untouched so outer blocks keep short-circuiting.
  pub fn eval_block(&self, block: &Block, env: &Rc<RefCell<Env>>) -> Value {
    let mut result = NULL;

    for stmt in &block.statements {
      match self.eval_statement(stmt, env) {
        out @ (Value::Return(_) | Value::Error(_)) => return out,
        value => result = value,
      }
    }

    result
  }

  fn eval_statement(&self, stmt: &Stmt, env: &Rc<RefCell<Env>>) -> Value {
    match stmt {
      Stmt::Let { name, value } => {
        let value = self.eval_expression(value, env);
        if value.is_error() {
          return value;
        }
        env.borrow_mut().set(name.clone(), value);
        NULL
      },
      Stmt::Return { value } => {
        let value = self.eval_expression(value, env);
        if value.is_error() {
          return value;
        }
        Value::Return(Box::new(value))
      },
      Stmt::Expression { expr } => self.eval_expression(expr, env),
    }
  }

  pub fn eval_expression(&self, expr: &Expr, env: &Rc<RefCell<Env>>) -> Value {
    match expr {
      Expr::Integer(value) => Value::Integer(*value),
      Expr::Boolean(value) => native_bool(*value),
      Expr::Str(value) => Value::Str(value.clone()),
      Expr::Identifier(name) => self.eval_identifier(name, env),

      Expr::Prefix { operator, right } => {
        let right = self.eval_expression(right, env);
        if right.is_error() {
          return right;
        }
        self.eval_prefix(operator, right)
      },
      Expr::Infix {
        left,
        operator,
        right,
      } => {
        let left = self.eval_expression(left, env);
        if left.is_error() {
          return left;
        }
        let right = self.eval_expression(right, env);
        if right.is_error() {
          return right;
        }
        self.eval_infix(operator, left, right)
      },

      Expr::If {
        condition,
        consequence,
        alternative,
      } => self.eval_if(condition, consequence, alternative.as_ref(), env),

      Expr::Function { parameters, body } => Value::Function(Rc::new(Function {
        parameters: parameters.clone(),
        body: body.clone(),
        env: Rc::clone(env),
      })),
      Expr::Call {
        function,
        arguments,
      } => self.eval_call(function, arguments, env),

      Expr::Array(elements) => match self.eval_expressions(elements, env) {
        Ok(elements) => Value::Array(elements),
        Err(err) => err,
      },
      Expr::Index { left, index } => {
        let left = self.eval_expression(left, env);
        if left.is_error() {
          return left;
        }
        let index = self.eval_expression(index, env);
        if index.is_error() {
          return index;
        }
        self.eval_index(left, index)
      },
      Expr::Hash(pairs) => self.eval_hash(pairs, env),

      // Macro literals are stripped during the definition pass and never
      // reach evaluation.
      Expr::Macro { .. } => NULL,
    }
  }

  fn eval_identifier(&self, name: &str, env: &Rc<RefCell<Env>>) -> Value {
    if let Some(value) = env.borrow().get(name) {
      return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
      return builtin;
    }
    Value::Error(format!("identifier not found: {}", name))
  }

  fn eval_prefix(&self, operator: &Token, right: Value) -> Value {
    match operator.kind {
      TokenKind::Bang => self.eval_bang(right),
      TokenKind::Minus => match right {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        other => Value::Error(format!("unknown operator: -{}", other.type_name())),
      },
      _ => Value::Error(format!(
        "unknown operator: {}{}",
        operator.literal,
        right.type_name()
      )),
    }
  }

  /// `!` is defined over every value: only false and null are bent back
  /// to true.
  fn eval_bang(&self, value: Value) -> Value {
    match value {
      Value::Boolean(true) => FALSE,
      Value::Boolean(false) => TRUE,
      Value::Null => TRUE,
      _ => FALSE,
    }
  }

  fn eval_infix(&self, operator: &Token, left: Value, right: Value) -> Value {
    match (left, right) {
      (Value::Integer(left), Value::Integer(right)) => {
        self.eval_integer_infix(operator, left, right)
      },
      (Value::Str(left), Value::Str(right)) => match operator.kind {
        TokenKind::Plus => Value::Str(format!("{}{}", left, right)),
        _ => Value::Error(format!(
          "unknown operator: STRING {} STRING",
          operator.literal
        )),
      },
      (Value::Boolean(left), Value::Boolean(right)) => match operator.kind {
        TokenKind::Eq => native_bool(left == right),
        TokenKind::NotEq => native_bool(left != right),
        _ => Value::Error(format!(
          "unknown operator: BOOLEAN {} BOOLEAN",
          operator.literal
        )),
      },
      (left, right) => {
        if left.type_name() != right.type_name() {
          Value::Error(format!(
            "type mismatch: {} {} {}",
            left.type_name(),
            operator.literal,
            right.type_name()
          ))
        } else {
          Value::Error(format!(
            "unknown operator: {} {} {}",
            left.type_name(),
            operator.literal,
            right.type_name()
          ))
        }
      },
    }
  }

  /// Signed 64-bit arithmetic with two's-complement wraparound.
  fn eval_integer_infix(&self, operator: &Token, left: i64, right: i64) -> Value {
    match operator.kind {
      TokenKind::Plus => Value::Integer(left.wrapping_add(right)),
      TokenKind::Minus => Value::Integer(left.wrapping_sub(right)),
      TokenKind::Asterisk => Value::Integer(left.wrapping_mul(right)),
      TokenKind::Slash => {
        if right == 0 {
          Value::Error("division by zero".to_string())
        } else {
          Value::Integer(left.wrapping_div(right))
        }
      },
      TokenKind::Lt => native_bool(left < right),
      TokenKind::Gt => native_bool(left > right),
      TokenKind::Eq => native_bool(left == right),
      TokenKind::NotEq => native_bool(left != right),
      _ => Value::Error(format!(
        "unknown operator: INTEGER {} INTEGER",
        operator.literal
      )),
    }
  }

  fn eval_if(
    &self,
    condition: &Expr,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Rc<RefCell<Env>>,
  ) -> Value {
    let condition = self.eval_expression(condition, env);
    if condition.is_error() {
      return condition;
    }

    if is_truthy(&condition) {
      self.eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
      self.eval_block(alternative, env)
    } else {
      NULL
    }
  }

  fn eval_call(
    &self,
    function: &Expr,
    arguments: &[Expr],
    env: &Rc<RefCell<Env>>,
  ) -> Value {
    // `quote` is a syntactic form, not a value: it is recognized by the
    // callee identifier's spelling before anything is evaluated, and a
    // `let` shadowing the name does not disable it.
    if let Expr::Identifier(name) = function {
      if name == "quote" {
        if arguments.len() != 1 {
          return Value::Error(format!(
            "wrong number of arguments. got={}, want=1",
            arguments.len()
          ));
        }
        return self.quote(arguments[0].clone(), env);
      }
    }

    let callee = self.eval_expression(function, env);
    if callee.is_error() {
      return callee;
    }

    let arguments = match self.eval_expressions(arguments, env) {
      Ok(values) => values,
      Err(err) => return err,
    };

    self.apply_function(callee, arguments)
  }

  /// Left-to-right evaluation; the first error aborts the list.
  fn eval_expressions(
    &self,
    exprs: &[Expr],
    env: &Rc<RefCell<Env>>,
  ) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
      let value = self.eval_expression(expr, env);
      if value.is_error() {
        return Err(value);
      }
      values.push(value);
    }

    Ok(values)
  }

  pub fn apply_function(&self, callee: Value, arguments: Vec<Value>) -> Value {
    match callee {
      Value::Function(function) => {
        let env = Rc::new(RefCell::new(Env::new_enclosed(Rc::clone(&function.env))));
        for (param, value) in function.parameters.iter().zip(arguments) {
          env.borrow_mut().set(param.clone(), value);
        }

        match self.eval_block(&function.body, &env) {
          Value::Return(value) => *value,
          other => other,
        }
      },
      Value::Builtin(builtin) => (builtin.func)(arguments),
      other => Value::Error(format!("not a function: {}", other.type_name())),
    }
  }

  fn eval_index(&self, left: Value, index: Value) -> Value {
    match (left, index) {
      (Value::Array(elements), Value::Integer(index)) => {
        if index < 0 || index as usize >= elements.len() {
          NULL
        } else {
          elements[index as usize].clone()
        }
      },
      (Value::Hash(pairs), key) => match key.hash_key() {
        Some(hash_key) => pairs
          .get(&hash_key)
          .map(|pair| pair.value.clone())
          .unwrap_or(NULL),
        None => Value::Error(format!("unusable as hash key: {}", key.type_name())),
      },
      (left, _) => Value::Error(format!(
        "index operator not supported: {}",
        left.type_name()
      )),
    }
  }

  /// Keys and values are evaluated in source order; a later duplicate
  /// key overwrites the earlier entry.
  fn eval_hash(&self, pairs: &[(Expr, Expr)], env: &Rc<RefCell<Env>>) -> Value {
    let mut map = HashMap::new();

    for (key_expr, value_expr) in pairs {
      let key = self.eval_expression(key_expr, env);
      if key.is_error() {
        return key;
      }

      let hash_key = match key.hash_key() {
        Some(hash_key) => hash_key,
        None => {
          return Value::Error(format!("unusable as hash key: {}", key.type_name()));
        },
      };

      let value = self.eval_expression(value_expr, env);
      if value.is_error() {
        return value;
      }

      map.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(map)
  }
}

/// Everything except false and null counts as true; zero included.
pub fn is_truthy(value: &Value) -> bool {
  !matches!(value, Value::Boolean(false) | Value::Null)
}

fn native_bool(input: bool) -> Value {
  if input {
    TRUE
  } else {
    FALSE
  }
}
