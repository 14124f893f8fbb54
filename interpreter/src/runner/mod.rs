use std::{
  cell::RefCell,
  fs,
  io::{self, Write},
  rc::Rc,
};

use diagnostic::{
  diagnostic::Diagnostic, diagnostic_code::DiagnosticCode, DiagnosticEngine,
};
use lexer::Lexer;
use parser::Parser;

use crate::{env::Env, evaluator::Interpreter, macros};

const PROMPT: &str = ">> ";

/// Line-oriented driver. Both the value environment and the macro
/// environment persist across lines, so definitions carry over.
pub struct Runner {
  interpreter: Interpreter,
  env: Rc<RefCell<Env>>,
  macro_env: Rc<RefCell<Env>>,
}

impl Runner {
  pub fn new() -> Self {
    Self {
      interpreter: Interpreter::new(),
      env: Rc::new(RefCell::new(Env::new())),
      macro_env: Rc::new(RefCell::new(Env::new())),
    }
  }

  /// Function that starts the read-eval loop over stdin; EOF ends it.
  pub fn run_interactive_mode(&mut self, engine: &mut DiagnosticEngine) {
    loop {
      engine.clear();

      print!("{}", PROMPT);
      if io::stdout().flush().is_err() {
        break;
      }

      let mut line = String::new();
      match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => break,
        Ok(_) => {},
      }

      if line.trim().is_empty() {
        continue;
      }

      self.run_source(&line, engine);
    }
  }

  /// Function that runs a whole script file through the same pipeline.
  pub fn run_file(&mut self, path: &str, engine: &mut DiagnosticEngine) {
    let source = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(err) => {
        let diagnostic = Diagnostic::new(
          DiagnosticCode::FileNotFound,
          format!("could not read file: {}", path),
        )
        .with_help(format!("reason: {}", err));

        engine.emit(diagnostic);
        engine.print_all();
        std::process::exit(66);
      },
    };

    self.run_source(&source, engine);
  }

  /// One pass of the pipeline: lex, parse, expand macros, evaluate, and
  /// print the result's inspect form. Parse errors are listed one per
  /// line and evaluation is skipped.
  fn run_source(&mut self, source: &str, engine: &mut DiagnosticEngine) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let mut program = parser.parse_program(engine);

    if engine.has_errors() {
      for message in engine.messages() {
        println!("\t{}", message);
      }
      return;
    }

    macros::define_macros(&mut program, &self.macro_env);
    let expanded = macros::expand_macros(program, &self.macro_env);

    let result = self.interpreter.eval_program(&expanded, &self.env);
    println!("{}", result);
  }
}
