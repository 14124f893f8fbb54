//! Bottom-up rewriting over the tree, used by macro expansion and the
//! unquote pass. Statements and blocks are traversed structurally; the
//! transform fires on every expression, children first, so a composite
//! node sees its already-rewritten children before it is handed to `f`.

use crate::ast::{Block, Expr, Program, Stmt};

pub fn modify_program<F>(program: Program, f: &mut F) -> Program
where
  F: FnMut(Expr) -> Expr,
{
  Program {
    statements: program
      .statements
      .into_iter()
      .map(|stmt| modify_stmt(stmt, f))
      .collect(),
  }
}

pub fn modify_stmt<F>(stmt: Stmt, f: &mut F) -> Stmt
where
  F: FnMut(Expr) -> Expr,
{
  match stmt {
    Stmt::Let { name, value } => Stmt::Let {
      name,
      value: modify_expr(value, f),
    },
    Stmt::Return { value } => Stmt::Return {
      value: modify_expr(value, f),
    },
    Stmt::Expression { expr } => Stmt::Expression {
      expr: modify_expr(expr, f),
    },
  }
}

pub fn modify_block<F>(block: Block, f: &mut F) -> Block
where
  F: FnMut(Expr) -> Expr,
{
  Block {
    statements: block
      .statements
      .into_iter()
      .map(|stmt| modify_stmt(stmt, f))
      .collect(),
  }
}

pub fn modify_expr<F>(expr: Expr, f: &mut F) -> Expr
where
  F: FnMut(Expr) -> Expr,
{
  let expr = match expr {
    Expr::Prefix { operator, right } => Expr::Prefix {
      operator,
      right: Box::new(modify_expr(*right, f)),
    },
    Expr::Infix {
      left,
      operator,
      right,
    } => Expr::Infix {
      left: Box::new(modify_expr(*left, f)),
      operator,
      right: Box::new(modify_expr(*right, f)),
    },
    Expr::Index { left, index } => Expr::Index {
      left: Box::new(modify_expr(*left, f)),
      index: Box::new(modify_expr(*index, f)),
    },
    Expr::If {
      condition,
      consequence,
      alternative,
    } => Expr::If {
      condition: Box::new(modify_expr(*condition, f)),
      consequence: modify_block(consequence, f),
      alternative: alternative.map(|block| modify_block(block, f)),
    },
    Expr::Function { parameters, body } => Expr::Function {
      parameters,
      body: modify_block(body, f),
    },
    Expr::Macro { parameters, body } => Expr::Macro {
      parameters,
      body: modify_block(body, f),
    },
    Expr::Call {
      function,
      arguments,
    } => Expr::Call {
      function: Box::new(modify_expr(*function, f)),
      arguments: arguments
        .into_iter()
        .map(|argument| modify_expr(argument, f))
        .collect(),
    },
    Expr::Array(elements) => Expr::Array(
      elements
        .into_iter()
        .map(|element| modify_expr(element, f))
        .collect(),
    ),
    Expr::Hash(pairs) => Expr::Hash(
      pairs
        .into_iter()
        .map(|(key, value)| (modify_expr(key, f), modify_expr(value, f)))
        .collect(),
    ),
    leaf => leaf,
  };

  f(expr)
}
