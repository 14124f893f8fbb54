use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  Illegal,
  Eof,

  // Identifiers and literals.
  Ident,
  Int,
  Str,

  // Operators.
  Assign,
  Plus,
  Minus,
  Bang,
  Asterisk,
  Slash,
  Lt,
  Gt,
  Eq,
  NotEq,

  // Delimiters.
  Comma,
  Semicolon,
  Colon,
  LParen,
  RParen,
  LBrace,
  RBrace,
  LBracket,
  RBracket,

  // Keywords.
  Function,
  Let,
  True,
  False,
  If,
  Else,
  Return,
  Macro,
}

impl TokenKind {
  /// Maps keyword spellings to their kinds; everything else is an
  /// ordinary identifier.
  pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
      "fn" => TokenKind::Function,
      "let" => TokenKind::Let,
      "true" => TokenKind::True,
      "false" => TokenKind::False,
      "if" => TokenKind::If,
      "else" => TokenKind::Else,
      "return" => TokenKind::Return,
      "macro" => TokenKind::Macro,
      _ => TokenKind::Ident,
    }
  }
}

/// The wire names used in parser error messages: operators and delimiters
/// print as their spelling, everything else as an upper-case tag.
impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      TokenKind::Illegal => "ILLEGAL",
      TokenKind::Eof => "EOF",
      TokenKind::Ident => "IDENT",
      TokenKind::Int => "INT",
      TokenKind::Str => "STRING",
      TokenKind::Assign => "=",
      TokenKind::Plus => "+",
      TokenKind::Minus => "-",
      TokenKind::Bang => "!",
      TokenKind::Asterisk => "*",
      TokenKind::Slash => "/",
      TokenKind::Lt => "<",
      TokenKind::Gt => ">",
      TokenKind::Eq => "==",
      TokenKind::NotEq => "!=",
      TokenKind::Comma => ",",
      TokenKind::Semicolon => ";",
      TokenKind::Colon => ":",
      TokenKind::LParen => "(",
      TokenKind::RParen => ")",
      TokenKind::LBrace => "{",
      TokenKind::RBrace => "}",
      TokenKind::LBracket => "[",
      TokenKind::RBracket => "]",
      TokenKind::Function => "FUNCTION",
      TokenKind::Let => "LET",
      TokenKind::True => "TRUE",
      TokenKind::False => "FALSE",
      TokenKind::If => "IF",
      TokenKind::Else => "ELSE",
      TokenKind::Return => "RETURN",
      TokenKind::Macro => "MACRO",
    };
    write!(f, "{}", text)
  }
}
