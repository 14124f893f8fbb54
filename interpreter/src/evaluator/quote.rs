use std::{cell::RefCell, rc::Rc};

use parser::ast::{modify, Expr};

use super::Interpreter;
use crate::{env::Env, value::Value};

impl Interpreter {
  /// `quote(expr)` suppresses evaluation of its argument and carries the
  /// AST as a value, after splicing in every inner `unquote(...)`.
  pub(crate) fn quote(&self, node: Expr, env: &Rc<RefCell<Env>>) -> Value {
    Value::Quote(self.eval_unquote_calls(node, env))
  }

  fn eval_unquote_calls(&self, node: Expr, env: &Rc<RefCell<Env>>) -> Expr {
    modify::modify_expr(node, &mut |expr| {
      let (function, mut arguments) = match expr {
        Expr::Call {
          function,
          arguments,
        } => (function, arguments),
        other => return other,
      };

      let is_unquote =
        matches!(function.as_ref(), Expr::Identifier(name) if name == "unquote");
      if !is_unquote || arguments.len() != 1 {
        return Expr::Call {
          function,
          arguments,
        };
      }

      let argument = arguments.remove(0);
      convert_value_to_ast(self.eval_expression(&argument, env))
    })
  }
}

/// The AST form of a runtime value spliced by `unquote`. Anything beyond
/// integers, booleans and quoted nodes is a contract violation of the
/// macro system and aborts the run.
fn convert_value_to_ast(value: Value) -> Expr {
  match value {
    Value::Integer(value) => Expr::Integer(value),
    Value::Boolean(value) => Expr::Boolean(value),
    Value::Quote(node) => node,
    other => panic!("unsupported unquote value: {}", other.type_name()),
  }
}
