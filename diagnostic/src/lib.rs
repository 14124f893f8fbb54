pub mod diagnostic;
pub mod diagnostic_code;
pub mod formatter;

use colored::*;

use crate::{diagnostic::Diagnostic, diagnostic_code::Severity, formatter::DiagnosticFormatter};

/// Collector for all diagnostics produced while processing one input
#[derive(Debug, Default)]
pub struct DiagnosticEngine {
  diagnostics: Vec<Diagnostic>,
  error_count: usize,
  warning_count: usize,
}

impl DiagnosticEngine {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn emit(&mut self, diagnostic: Diagnostic) {
    match diagnostic.severity {
      Severity::Error => self.error_count += 1,
      Severity::Warning => self.warning_count += 1,
      _ => {},
    }
    self.diagnostics.push(diagnostic);
  }

  pub fn has_errors(&self) -> bool {
    self.error_count > 0
  }

  pub fn error_count(&self) -> usize {
    self.error_count
  }

  pub fn warning_count(&self) -> usize {
    self.warning_count
  }

  /// Drop everything collected so far, e.g. between REPL lines.
  pub fn clear(&mut self) {
    self.diagnostics.clear();
    self.error_count = 0;
    self.warning_count = 0;
  }

  /// The bare messages, in emission order.
  pub fn messages(&self) -> impl Iterator<Item = &str> {
    self.diagnostics.iter().map(|d| d.message.as_str())
  }

  /// Print all diagnostics with colors to stdout
  pub fn print_all(&self) {
    for diagnostic in &self.diagnostics {
      let formatter = DiagnosticFormatter::new(diagnostic);
      print!("{}", formatter.format());
    }

    self.print_summary();
  }

  /// Get all diagnostics as plain text (for file logging)
  pub fn format_all_plain(&self) -> String {
    let mut output = String::new();

    for diagnostic in &self.diagnostics {
      let formatter = DiagnosticFormatter::new(diagnostic);
      output.push_str(&formatter.format_plain());
    }

    output.push_str(&self.format_summary_plain());
    output
  }

  fn print_summary(&self) {
    if self.error_count > 0 {
      println!();
      println!(
        "{}: could not run due to {} previous {}",
        "error".red().bold(),
        self.error_count.to_string().red().bold(),
        if self.error_count == 1 {
          "error"
        } else {
          "errors"
        },
      );
    }
  }

  fn format_summary_plain(&self) -> String {
    if self.error_count > 0 {
      format!(
        "error: could not run due to {} previous {}\n",
        self.error_count,
        if self.error_count == 1 {
          "error"
        } else {
          "errors"
        },
      )
    } else {
      String::new()
    }
  }

  pub fn get_diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }
}
