use std::{cell::RefCell, rc::Rc};

use parser::ast::{modify, Expr, Program, Stmt};

use crate::{
  env::Env,
  evaluator::Interpreter,
  value::{MacroDef, Value},
};

/// Definition pass: pull every top-level `let <name> = macro(...) {...};`
/// out of the program and bind the macro under its name. The remaining
/// statements keep their relative order.
pub fn define_macros(program: &mut Program, env: &Rc<RefCell<Env>>) {
  let statements = std::mem::take(&mut program.statements);

  program.statements = statements
    .into_iter()
    .filter_map(|stmt| match stmt {
      Stmt::Let {
        name,
        value: Expr::Macro { parameters, body },
      } => {
        let macro_def = MacroDef {
          parameters,
          body,
          env: Rc::clone(env),
        };
        env.borrow_mut().set(name, Value::Macro(Rc::new(macro_def)));
        None
      },
      other => Some(other),
    })
    .collect();
}

/// Expansion pass: rewrite every call to a defined macro by evaluating
/// its body over the quoted, unevaluated argument ASTs and splicing the
/// returned node in place of the call.
pub fn expand_macros(program: Program, env: &Rc<RefCell<Env>>) -> Program {
  let interpreter = Interpreter::new();

  modify::modify_program(program, &mut |expr| {
    let (function, arguments) = match expr {
      Expr::Call {
        function,
        arguments,
      } => (function, arguments),
      other => return other,
    };

    let macro_def = match macro_for_call(&function, env) {
      Some(macro_def) => macro_def,
      None => {
        return Expr::Call {
          function,
          arguments,
        };
      },
    };

    let eval_env = Rc::new(RefCell::new(Env::new_enclosed(Rc::clone(&macro_def.env))));
    for (param, argument) in macro_def.parameters.iter().zip(arguments) {
      eval_env.borrow_mut().set(param.clone(), Value::Quote(argument));
    }

    match interpreter.eval_block(&macro_def.body, &eval_env) {
      Value::Quote(node) => node,
      _ => panic!("we only support returning AST-nodes from macros"),
    }
  })
}

fn macro_for_call(function: &Expr, env: &Rc<RefCell<Env>>) -> Option<Rc<MacroDef>> {
  let name = match function {
    Expr::Identifier(name) => name,
    _ => return None,
  };

  match env.borrow().get(name) {
    Some(Value::Macro(macro_def)) => Some(macro_def),
    _ => None,
  }
}
