use std::fmt;

use lexer::token::Token;

pub mod modify;

/// A full source program, the root of the tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
  pub statements: Vec<Stmt>,
}

impl Program {
  /// The literal of the first statement's defining token, or "" for an
  /// empty program.
  pub fn token_literal(&self) -> String {
    match self.statements.first() {
      Some(stmt) => stmt.token_literal(),
      None => String::new(),
    }
  }
}

impl fmt::Display for Program {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for stmt in &self.statements {
      write!(f, "{}", stmt)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
  Let { name: String, value: Expr },
  Return { value: Expr },
  Expression { expr: Expr },
}

impl Stmt {
  pub fn token_literal(&self) -> String {
    match self {
      Stmt::Let { .. } => "let".to_string(),
      Stmt::Return { .. } => "return".to_string(),
      Stmt::Expression { expr } => expr.token_literal(),
    }
  }
}

impl fmt::Display for Stmt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Stmt::Let { name, value } => write!(f, "let {} = {};", name, value),
      Stmt::Return { value } => write!(f, "return {};", value),
      Stmt::Expression { expr } => write!(f, "{}", expr),
    }
  }
}

/// A braced sequence of statements, the body of `if` arms, functions and
/// macros.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
  pub statements: Vec<Stmt>,
}

impl Block {
  pub fn token_literal(&self) -> String {
    "{".to_string()
  }
}

impl fmt::Display for Block {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for stmt in &self.statements {
      write!(f, "{}", stmt)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Identifier(String),
  Integer(i64),
  Boolean(bool),
  Str(String),
  Prefix {
    operator: Token,
    right: Box<Expr>,
  },
  Infix {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
  },
  If {
    condition: Box<Expr>,
    consequence: Block,
    alternative: Option<Block>,
  },
  Function {
    parameters: Vec<String>,
    body: Block,
  },
  Call {
    function: Box<Expr>,
    arguments: Vec<Expr>,
  },
  Array(Vec<Expr>),
  Index {
    left: Box<Expr>,
    index: Box<Expr>,
  },
  Hash(Vec<(Expr, Expr)>),
  Macro {
    parameters: Vec<String>,
    body: Block,
  },
}

impl Expr {
  pub fn token_literal(&self) -> String {
    match self {
      Expr::Identifier(name) => name.clone(),
      Expr::Integer(value) => value.to_string(),
      Expr::Boolean(value) => value.to_string(),
      Expr::Str(value) => value.clone(),
      Expr::Prefix { operator, .. } => operator.literal.clone(),
      Expr::Infix { operator, .. } => operator.literal.clone(),
      Expr::If { .. } => "if".to_string(),
      Expr::Function { .. } => "fn".to_string(),
      Expr::Call { .. } => "(".to_string(),
      Expr::Array(_) => "[".to_string(),
      Expr::Index { .. } => "[".to_string(),
      Expr::Hash(_) => "{".to_string(),
      Expr::Macro { .. } => "macro".to_string(),
    }
  }
}

/// Canonical printed forms; tests compare ASTs through these strings.
impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Identifier(name) => write!(f, "{}", name),
      Expr::Integer(value) => write!(f, "{}", value),
      Expr::Boolean(value) => write!(f, "{}", value),
      Expr::Str(value) => write!(f, "{}", value),
      Expr::Prefix { operator, right } => write!(f, "({}{})", operator.literal, right),
      Expr::Infix {
        left,
        operator,
        right,
      } => write!(f, "({} {} {})", left, operator.literal, right),
      Expr::If {
        condition,
        consequence,
        alternative,
      } => {
        write!(f, "if{} {}", condition, consequence)?;
        if let Some(alternative) = alternative {
          write!(f, "else {}", alternative)?;
        }
        Ok(())
      },
      Expr::Function { parameters, body } => {
        write!(f, "fn({}) {}", parameters.join(", "), body)
      },
      Expr::Call {
        function,
        arguments,
      } => {
        let arguments: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", function, arguments.join(","))
      },
      Expr::Array(elements) => {
        let elements: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", elements.join(", "))
      },
      Expr::Index { left, index } => write!(f, "({}[{}])", left, index),
      Expr::Hash(pairs) => {
        let pairs: Vec<String> = pairs.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
        write!(f, "{{{}}}", pairs.join(", "))
      },
      Expr::Macro { parameters, body } => {
        write!(f, "macro({}) {}", parameters.join(", "), body)
      },
    }
  }
}
