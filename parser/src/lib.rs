use diagnostic::{
  diagnostic::Diagnostic, diagnostic_code::DiagnosticCode, DiagnosticEngine,
};
use lexer::{
  token::{types::TokenKind, Token},
  Lexer,
};

use crate::ast::{Block, Expr, Program, Stmt};

pub mod ast;

/// Binding power of each operator position, low to high. The infix loop
/// keeps consuming while the next token binds tighter than the current
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
  Lowest,
  Equals,
  LessGreater,
  Sum,
  Product,
  Prefix,
  Call,
  Index,
}

fn precedence_of(kind: TokenKind) -> Precedence {
  match kind {
    TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
    TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
    TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
    TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
    TokenKind::LParen => Precedence::Call,
    TokenKind::LBracket => Precedence::Index,
    _ => Precedence::Lowest,
  }
}

/// Pratt parser over the token stream with a current/peek window of one.
/// A syntax error is recorded in the diagnostic engine and the offending
/// statement is dropped; parsing always continues to the end of input.
pub struct Parser {
  lexer: Lexer,
  cur_token: Token,
  peek_token: Token,
}

impl Parser {
  pub fn new(mut lexer: Lexer) -> Self {
    let cur_token = lexer.next_token();
    let peek_token = lexer.next_token();
    Self {
      lexer,
      cur_token,
      peek_token,
    }
  }

  /// Function that consumes the whole token stream and returns the
  /// program; errors accumulate in the engine.
  pub fn parse_program(&mut self, engine: &mut DiagnosticEngine) -> Program {
    let mut program = Program::default();

    while !self.cur_is(TokenKind::Eof) {
      if let Some(stmt) = self.parse_statement(engine) {
        program.statements.push(stmt);
      }
      self.advance();
    }

    program
  }

  fn parse_statement(&mut self, engine: &mut DiagnosticEngine) -> Option<Stmt> {
    match self.cur_token.kind {
      TokenKind::Let => self.parse_let_statement(engine),
      TokenKind::Return => self.parse_return_statement(engine),
      _ => self.parse_expression_statement(engine),
    }
  }

  fn parse_let_statement(&mut self, engine: &mut DiagnosticEngine) -> Option<Stmt> {
    if !self.expect_peek(TokenKind::Ident, engine) {
      return None;
    }
    let name = self.cur_token.literal.clone();

    if !self.expect_peek(TokenKind::Assign, engine) {
      return None;
    }
    self.advance();

    let value = self.parse_expression(Precedence::Lowest, engine)?;

    if self.peek_is(TokenKind::Semicolon) {
      self.advance();
    }

    Some(Stmt::Let { name, value })
  }

  fn parse_return_statement(&mut self, engine: &mut DiagnosticEngine) -> Option<Stmt> {
    self.advance();

    let value = self.parse_expression(Precedence::Lowest, engine)?;

    if self.peek_is(TokenKind::Semicolon) {
      self.advance();
    }

    Some(Stmt::Return { value })
  }

  fn parse_expression_statement(&mut self, engine: &mut DiagnosticEngine) -> Option<Stmt> {
    let expr = self.parse_expression(Precedence::Lowest, engine)?;

    // The trailing semicolon is optional so that `5 + 5` works in the
    // REPL without one.
    if self.peek_is(TokenKind::Semicolon) {
      self.advance();
    }

    Some(Stmt::Expression { expr })
  }

  fn parse_expression(
    &mut self,
    precedence: Precedence,
    engine: &mut DiagnosticEngine,
  ) -> Option<Expr> {
    let mut left = self.parse_prefix(engine)?;

    while !self.peek_is(TokenKind::Semicolon) && precedence < precedence_of(self.peek_token.kind) {
      left = match self.peek_token.kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Asterisk
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Gt => {
          self.advance();
          self.parse_infix_expression(left, engine)?
        },
        TokenKind::LParen => {
          self.advance();
          self.parse_call_expression(left, engine)?
        },
        TokenKind::LBracket => {
          self.advance();
          self.parse_index_expression(left, engine)?
        },
        _ => return Some(left),
      };
    }

    Some(left)
  }

  /// Prefix-position dispatch on the current token.
  fn parse_prefix(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    match self.cur_token.kind {
      TokenKind::Ident => Some(Expr::Identifier(self.cur_token.literal.clone())),
      TokenKind::Int => self.parse_integer_literal(engine),
      TokenKind::True => Some(Expr::Boolean(true)),
      TokenKind::False => Some(Expr::Boolean(false)),
      TokenKind::Str => Some(Expr::Str(self.cur_token.literal.clone())),
      TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(engine),
      TokenKind::LParen => self.parse_grouped_expression(engine),
      TokenKind::If => self.parse_if_expression(engine),
      TokenKind::Function => self.parse_function_literal(engine),
      TokenKind::Macro => self.parse_macro_literal(engine),
      TokenKind::LBracket => self.parse_array_literal(engine),
      TokenKind::LBrace => self.parse_hash_literal(engine),
      _ => {
        engine.emit(Diagnostic::new(
          DiagnosticCode::ExpectedExpression,
          format!("no prefix parse function for {}", self.cur_token.kind),
        ));
        None
      },
    }
  }

  fn parse_integer_literal(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    match self.cur_token.literal.parse::<i64>() {
      Ok(value) => Some(Expr::Integer(value)),
      Err(_) => {
        engine.emit(Diagnostic::new(
          DiagnosticCode::InvalidNumber,
          format!("could not parse {:?} as integer", self.cur_token.literal),
        ));
        None
      },
    }
  }

  fn parse_prefix_expression(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    let operator = self.cur_token.clone();
    self.advance();

    let right = self.parse_expression(Precedence::Prefix, engine)?;
    Some(Expr::Prefix {
      operator,
      right: Box::new(right),
    })
  }

  fn parse_infix_expression(
    &mut self,
    left: Expr,
    engine: &mut DiagnosticEngine,
  ) -> Option<Expr> {
    let operator = self.cur_token.clone();
    let precedence = precedence_of(operator.kind);
    self.advance();

    let right = self.parse_expression(precedence, engine)?;
    Some(Expr::Infix {
      left: Box::new(left),
      operator,
      right: Box::new(right),
    })
  }

  fn parse_grouped_expression(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    self.advance();

    let expr = self.parse_expression(Precedence::Lowest, engine)?;

    if !self.expect_peek(TokenKind::RParen, engine) {
      return None;
    }

    Some(expr)
  }

  fn parse_if_expression(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    if !self.expect_peek(TokenKind::LParen, engine) {
      return None;
    }
    self.advance();

    let condition = self.parse_expression(Precedence::Lowest, engine)?;

    if !self.expect_peek(TokenKind::RParen, engine) {
      return None;
    }
    if !self.expect_peek(TokenKind::LBrace, engine) {
      return None;
    }

    let consequence = self.parse_block(engine);

    let alternative = if self.peek_is(TokenKind::Else) {
      self.advance();
      if !self.expect_peek(TokenKind::LBrace, engine) {
        return None;
      }
      Some(self.parse_block(engine))
    } else {
      None
    };

    Some(Expr::If {
      condition: Box::new(condition),
      consequence,
      alternative,
    })
  }

  /// Statements up to the closing brace or end of input; the current
  /// token is the opening brace on entry and the closing brace on exit.
  fn parse_block(&mut self, engine: &mut DiagnosticEngine) -> Block {
    let mut statements = Vec::new();
    self.advance();

    while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
      if let Some(stmt) = self.parse_statement(engine) {
        statements.push(stmt);
      }
      self.advance();
    }

    Block { statements }
  }

  fn parse_function_literal(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    if !self.expect_peek(TokenKind::LParen, engine) {
      return None;
    }

    let parameters = self.parse_parameters(engine)?;

    if !self.expect_peek(TokenKind::LBrace, engine) {
      return None;
    }

    Some(Expr::Function {
      parameters,
      body: self.parse_block(engine),
    })
  }

  fn parse_macro_literal(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    if !self.expect_peek(TokenKind::LParen, engine) {
      return None;
    }

    let parameters = self.parse_parameters(engine)?;

    if !self.expect_peek(TokenKind::LBrace, engine) {
      return None;
    }

    Some(Expr::Macro {
      parameters,
      body: self.parse_block(engine),
    })
  }

  /// Comma-separated identifiers, possibly empty, up to the closing
  /// parenthesis.
  fn parse_parameters(&mut self, engine: &mut DiagnosticEngine) -> Option<Vec<String>> {
    let mut parameters = Vec::new();

    if self.peek_is(TokenKind::RParen) {
      self.advance();
      return Some(parameters);
    }

    self.advance();
    parameters.push(self.cur_token.literal.clone());

    while self.peek_is(TokenKind::Comma) {
      self.advance();
      self.advance();
      parameters.push(self.cur_token.literal.clone());
    }

    if !self.expect_peek(TokenKind::RParen, engine) {
      return None;
    }

    Some(parameters)
  }

  fn parse_call_expression(
    &mut self,
    function: Expr,
    engine: &mut DiagnosticEngine,
  ) -> Option<Expr> {
    let arguments = self.parse_expression_list(TokenKind::RParen, engine)?;
    Some(Expr::Call {
      function: Box::new(function),
      arguments,
    })
  }

  fn parse_array_literal(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    let elements = self.parse_expression_list(TokenKind::RBracket, engine)?;
    Some(Expr::Array(elements))
  }

  fn parse_expression_list(
    &mut self,
    end: TokenKind,
    engine: &mut DiagnosticEngine,
  ) -> Option<Vec<Expr>> {
    let mut list = Vec::new();

    if self.peek_is(end) {
      self.advance();
      return Some(list);
    }

    self.advance();
    list.push(self.parse_expression(Precedence::Lowest, engine)?);

    while self.peek_is(TokenKind::Comma) {
      self.advance();
      self.advance();
      list.push(self.parse_expression(Precedence::Lowest, engine)?);
    }

    if !self.expect_peek(end, engine) {
      return None;
    }

    Some(list)
  }

  fn parse_index_expression(
    &mut self,
    left: Expr,
    engine: &mut DiagnosticEngine,
  ) -> Option<Expr> {
    self.advance();

    let index = self.parse_expression(Precedence::Lowest, engine)?;

    if !self.expect_peek(TokenKind::RBracket, engine) {
      return None;
    }

    Some(Expr::Index {
      left: Box::new(left),
      index: Box::new(index),
    })
  }

  /// `{ key: value, ... }` with keys and values both full expressions;
  /// source order is preserved.
  fn parse_hash_literal(&mut self, engine: &mut DiagnosticEngine) -> Option<Expr> {
    let mut pairs = Vec::new();

    while !self.peek_is(TokenKind::RBrace) {
      self.advance();
      let key = self.parse_expression(Precedence::Lowest, engine)?;

      if !self.expect_peek(TokenKind::Colon, engine) {
        return None;
      }
      self.advance();

      let value = self.parse_expression(Precedence::Lowest, engine)?;
      pairs.push((key, value));

      if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma, engine) {
        return None;
      }
    }

    if !self.expect_peek(TokenKind::RBrace, engine) {
      return None;
    }

    Some(Expr::Hash(pairs))
  }

  fn cur_is(&self, kind: TokenKind) -> bool {
    self.cur_token.kind == kind
  }

  fn peek_is(&self, kind: TokenKind) -> bool {
    self.peek_token.kind == kind
  }

  /// Consumes the peek token when it matches; otherwise records the
  /// mismatch and leaves the window untouched.
  fn expect_peek(&mut self, kind: TokenKind, engine: &mut DiagnosticEngine) -> bool {
    if self.peek_is(kind) {
      self.advance();
      return true;
    }

    engine.emit(Diagnostic::new(
      DiagnosticCode::UnexpectedToken,
      format!(
        "expected next token to be {}, got {} instead",
        kind, self.peek_token.kind
      ),
    ));
    false
  }

  fn advance(&mut self) {
    self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
  }
}
