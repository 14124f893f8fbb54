#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use diagnostic::DiagnosticEngine;
  use interpreter::{
    env::Env,
    evaluator::Interpreter,
    macros::{define_macros, expand_macros},
    value::Value,
  };
  use lexer::Lexer;
  use parser::{ast::Program, Parser};

  fn parse(input: &str) -> Program {
    let mut engine = DiagnosticEngine::new();
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program(&mut engine);
    assert!(
      !engine.has_errors(),
      "parser errors for {:?}: {:?}",
      input,
      engine.messages().collect::<Vec<_>>()
    );
    program
  }

  #[test]
  fn test_define_macros() {
    let input = "
      let number = 1;
      let function = fn(x, y) { x + y };
      let mymacro = macro(x, y) { x + y; };
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);

    assert_eq!(program.statements.len(), 2);
    assert!(env.borrow().get("number").is_none());
    assert!(env.borrow().get("function").is_none());

    let binding = env.borrow();
    match binding.get("mymacro") {
      Some(Value::Macro(macro_def)) => {
        assert_eq!(macro_def.parameters, vec!["x", "y"]);
        assert_eq!(macro_def.body.to_string(), "(x + y)");
      },
      other => panic!("expected a macro binding, got {:?}", other),
    }
  }

  #[test]
  fn test_define_macros_preserves_statement_order() {
    let input = "
      let one = 1;
      let m = macro() { quote(1); };
      let two = 2;
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);

    let remaining: Vec<String> = program
      .statements
      .iter()
      .map(|s| s.to_string())
      .collect();
    assert_eq!(remaining, vec!["let one = 1;", "let two = 2;"]);
  }

  #[test]
  fn test_expand_macros() {
    let tests = [
      (
        "let infixExpression = macro() { quote(1 + 2); };
         infixExpression();",
        "(1 + 2)",
      ),
      (
        "let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
         reverse(2 + 2, 10 - 5);",
        "(10 - 5) - (2 + 2)",
      ),
      (
        "let unless = macro(condition, consequence, alternative) {
           quote(if (!(unquote(condition))) {
             unquote(consequence);
           } else {
             unquote(alternative);
           });
         };
         unless(10 > 5, puts(\"not greater\"), puts(\"greater\"));",
        "if (!(10 > 5)) { puts(\"not greater\") } else { puts(\"greater\") }",
      ),
    ];

    for (input, expected) in tests {
      let expected = parse(expected);

      let mut program = parse(input);
      let env = Rc::new(RefCell::new(Env::new()));
      define_macros(&mut program, &env);
      let expanded = expand_macros(program, &env);

      assert_eq!(
        expanded.to_string(),
        expected.to_string(),
        "for input {:?}",
        input
      );
    }
  }

  /// Once the definitions are stripped, expansion is a fixed point.
  #[test]
  fn test_expansion_is_confluent() {
    let input = "
      let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
      reverse(2 + 2, 10 - 5);
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);

    let once = expand_macros(program, &env);
    let twice = expand_macros(once.clone(), &env);

    assert_eq!(once, twice);
  }

  #[test]
  fn test_macro_end_to_end() {
    let input = "
      let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
      reverse(2 + 2, 10 - 5);
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);
    let expanded = expand_macros(program, &env);

    let eval_env = Rc::new(RefCell::new(Env::new()));
    let result = Interpreter::new().eval_program(&expanded, &eval_env);
    assert_eq!(result, Value::Integer(1));
  }

  #[test]
  fn test_arguments_are_not_evaluated_during_expansion() {
    // `missing` is unbound; expansion must drop it unevaluated.
    let input = "
      let ignore = macro(a) { quote(1); };
      ignore(missing + missing);
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);
    let expanded = expand_macros(program, &env);

    assert_eq!(expanded.to_string(), "1");
  }

  #[test]
  #[should_panic(expected = "we only support returning AST-nodes from macros")]
  fn test_macro_body_must_return_quote() {
    let input = "
      let broken = macro() { 1 + 2; };
      broken();
    ";

    let mut program = parse(input);
    let env = Rc::new(RefCell::new(Env::new()));
    define_macros(&mut program, &env);
    expand_macros(program, &env);
  }
}
