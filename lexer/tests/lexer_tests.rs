#[cfg(test)]
mod tests {
  use lexer::{token::types::TokenKind, Lexer};

  #[test]
  fn test_next_token() {
    let input = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
macro(x, y) { x + y; };
"#;

    let expected = [
      (TokenKind::Let, "let"),
      (TokenKind::Ident, "five"),
      (TokenKind::Assign, "="),
      (TokenKind::Int, "5"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Let, "let"),
      (TokenKind::Ident, "ten"),
      (TokenKind::Assign, "="),
      (TokenKind::Int, "10"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Let, "let"),
      (TokenKind::Ident, "add"),
      (TokenKind::Assign, "="),
      (TokenKind::Function, "fn"),
      (TokenKind::LParen, "("),
      (TokenKind::Ident, "x"),
      (TokenKind::Comma, ","),
      (TokenKind::Ident, "y"),
      (TokenKind::RParen, ")"),
      (TokenKind::LBrace, "{"),
      (TokenKind::Ident, "x"),
      (TokenKind::Plus, "+"),
      (TokenKind::Ident, "y"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::RBrace, "}"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Let, "let"),
      (TokenKind::Ident, "result"),
      (TokenKind::Assign, "="),
      (TokenKind::Ident, "add"),
      (TokenKind::LParen, "("),
      (TokenKind::Ident, "five"),
      (TokenKind::Comma, ","),
      (TokenKind::Ident, "ten"),
      (TokenKind::RParen, ")"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Bang, "!"),
      (TokenKind::Minus, "-"),
      (TokenKind::Slash, "/"),
      (TokenKind::Asterisk, "*"),
      (TokenKind::Int, "5"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Int, "5"),
      (TokenKind::Lt, "<"),
      (TokenKind::Int, "10"),
      (TokenKind::Gt, ">"),
      (TokenKind::Int, "5"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::If, "if"),
      (TokenKind::LParen, "("),
      (TokenKind::Int, "5"),
      (TokenKind::Lt, "<"),
      (TokenKind::Int, "10"),
      (TokenKind::RParen, ")"),
      (TokenKind::LBrace, "{"),
      (TokenKind::Return, "return"),
      (TokenKind::True, "true"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::RBrace, "}"),
      (TokenKind::Else, "else"),
      (TokenKind::LBrace, "{"),
      (TokenKind::Return, "return"),
      (TokenKind::False, "false"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::RBrace, "}"),
      (TokenKind::Int, "10"),
      (TokenKind::Eq, "=="),
      (TokenKind::Int, "10"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Int, "10"),
      (TokenKind::NotEq, "!="),
      (TokenKind::Int, "9"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Str, "foobar"),
      (TokenKind::Str, "foo bar"),
      (TokenKind::LBracket, "["),
      (TokenKind::Int, "1"),
      (TokenKind::Comma, ","),
      (TokenKind::Int, "2"),
      (TokenKind::RBracket, "]"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::LBrace, "{"),
      (TokenKind::Str, "foo"),
      (TokenKind::Colon, ":"),
      (TokenKind::Str, "bar"),
      (TokenKind::RBrace, "}"),
      (TokenKind::Macro, "macro"),
      (TokenKind::LParen, "("),
      (TokenKind::Ident, "x"),
      (TokenKind::Comma, ","),
      (TokenKind::Ident, "y"),
      (TokenKind::RParen, ")"),
      (TokenKind::LBrace, "{"),
      (TokenKind::Ident, "x"),
      (TokenKind::Plus, "+"),
      (TokenKind::Ident, "y"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::RBrace, "}"),
      (TokenKind::Semicolon, ";"),
      (TokenKind::Eof, ""),
    ];

    let mut lexer = Lexer::new(input);
    for (i, (kind, literal)) in expected.iter().enumerate() {
      let token = lexer.next_token();
      assert_eq!(token.kind, *kind, "token {}: wrong kind", i);
      assert_eq!(token.literal, *literal, "token {}: wrong literal", i);
    }
  }

  #[test]
  fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("5");
    assert_eq!(lexer.next_token().kind, TokenKind::Int);

    for _ in 0..3 {
      let token = lexer.next_token();
      assert_eq!(token.kind, TokenKind::Eof);
      assert_eq!(token.literal, "");
    }
  }

  #[test]
  fn test_illegal_bytes() {
    let mut lexer = Lexer::new("@5");

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "@");

    assert_eq!(lexer.next_token().kind, TokenKind::Int);
  }

  #[test]
  fn test_unterminated_string_runs_to_eof() {
    let mut lexer = Lexer::new("\"hello");

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.literal, "hello");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
  }

  #[test]
  fn test_identifiers_with_underscores_and_digits() {
    let mut lexer = Lexer::new("foo_bar2 _baz");

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.literal, "foo_bar2");

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.literal, "_baz");
  }

  #[test]
  fn test_keyword_lookup() {
    for (spelling, kind) in [
      ("fn", TokenKind::Function),
      ("let", TokenKind::Let),
      ("true", TokenKind::True),
      ("false", TokenKind::False),
      ("if", TokenKind::If),
      ("else", TokenKind::Else),
      ("return", TokenKind::Return),
      ("macro", TokenKind::Macro),
      ("letter", TokenKind::Ident),
      ("iff", TokenKind::Ident),
    ] {
      assert_eq!(
        TokenKind::lookup_ident(spelling),
        kind,
        "wrong kind for {:?}",
        spelling
      );
    }
  }
}
