use colored::*;

use crate::{
  diagnostic::Diagnostic,
  diagnostic_code::Severity,
};

/// Renders one diagnostic in a rustc-like shape:
///
/// ```text
/// error[E0100]: expected next token to be ), got EOF instead
///   = help: ...
/// ```
pub struct DiagnosticFormatter<'a> {
  diagnostic: &'a Diagnostic,
}

impl<'a> DiagnosticFormatter<'a> {
  pub fn new(diagnostic: &'a Diagnostic) -> Self {
    Self { diagnostic }
  }

  /// Format with colors for terminal output.
  pub fn format(&self) -> String {
    let header = format!(
      "{}[{}]",
      self.severity_word(),
      self.diagnostic.code.code()
    );
    let header = match self.diagnostic.severity {
      Severity::Error => header.red().bold(),
      Severity::Warning => header.yellow().bold(),
      _ => header.cyan().bold(),
    };

    let mut out = format!("{}: {}\n", header, self.diagnostic.message.bold());
    for note in &self.diagnostic.notes {
      out.push_str(&format!("  {} {}\n", "= note:".cyan().bold(), note));
    }
    if let Some(help) = &self.diagnostic.help {
      out.push_str(&format!("  {} {}\n", "= help:".cyan().bold(), help));
    }
    out
  }

  /// Format without colors (for file logging and tests).
  pub fn format_plain(&self) -> String {
    let mut out = format!(
      "{}[{}]: {}\n",
      self.severity_word(),
      self.diagnostic.code.code(),
      self.diagnostic.message
    );
    for note in &self.diagnostic.notes {
      out.push_str(&format!("  = note: {}\n", note));
    }
    if let Some(help) = &self.diagnostic.help {
      out.push_str(&format!("  = help: {}\n", help));
    }
    out
  }

  fn severity_word(&self) -> &'static str {
    match self.diagnostic.severity {
      Severity::Error => "error",
      Severity::Warning => "warning",
      Severity::Note => "note",
      Severity::Help => "help",
    }
  }
}
