use colored::*;
use diagnostic::{
  diagnostic::Diagnostic, diagnostic_code::DiagnosticCode, DiagnosticEngine,
};
use interpreter::runner::Runner;
use logger::{LogType, Logger};

fn main() {
  let args: Vec<String> = std::env::args().collect();

  let mut engine = DiagnosticEngine::new();
  let mut runner = Runner::new();

  let user = match std::env::var("USER").or_else(|_| std::env::var("USERNAME")) {
    Ok(user) => user,
    Err(_) => {
      let error = Diagnostic::new(
        DiagnosticCode::UnknownUser,
        "could not determine the current user".to_string(),
      )
      .with_help("set the USER environment variable".to_string());

      engine.emit(error);
      engine.print_all();
      std::process::exit(71);
    },
  };

  match args.len() {
    1 => {
      println!(
        "{}",
        format!("Hello {}! This is the Monkey programming language!", user)
          .cyan()
          .bold()
      );
      println!("{}", "Feel free to type in commands".cyan());
      runner.run_interactive_mode(&mut engine);
    },
    2 => {
      Logger::log(LogType::Info(&format!("Running file: {}", args[1])));
      runner.run_file(&args[1], &mut engine);

      if engine.has_errors() {
        std::process::exit(65);
      }
    },
    _ => {
      let error = Diagnostic::new(
        DiagnosticCode::InvalidArguments,
        "invalid number of arguments".to_string(),
      )
      .with_help("Usage: monkey [script]".to_string());

      engine.emit(error);
      engine.print_all();
      std::process::exit(64);
    },
  }
}
