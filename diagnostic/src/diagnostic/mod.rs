use crate::diagnostic_code::{DiagnosticCode, Severity};

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
  pub code: DiagnosticCode,
  pub severity: Severity,
  pub message: String,
  pub notes: Vec<String>,
  pub help: Option<String>,
}

impl Diagnostic {
  pub fn new(code: DiagnosticCode, message: String) -> Self {
    Self {
      severity: code.severity(),
      code,
      message,
      notes: Vec::new(),
      help: None,
    }
  }

  pub fn with_note(mut self, note: String) -> Self {
    self.notes.push(note);
    self
  }

  pub fn with_help(mut self, help: String) -> Self {
    self.help = Some(help);
    self
  }
}
