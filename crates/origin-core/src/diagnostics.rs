//! Structured diagnostics - ordered record-level warnings and errors
//!
//! Components write diagnostics into a [`Report`] instead of printing
//! inline. The report accumulates everything rather than stopping at the
//! first problem, and it is purely observational: nothing in the dataset
//! depends on what was reported.

use std::fmt;

use serde::Serialize;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Category of record-level issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The record's label resolved to no supported platform
    UnsupportedPlatform,
    /// The canonicalizer rejected the contact value outright
    RejectedContact,
    /// Recognized but unusual URL shape, processed best-effort
    UnusualUrl,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiagnosticKind::UnsupportedPlatform => f.write_str("unsupported-platform"),
            DiagnosticKind::RejectedContact => f.write_str("rejected-contact"),
            DiagnosticKind::UnusualUrl => f.write_str("unusual-url"),
        }
    }
}

/// A single record-level diagnostic
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Candidate key of the record being processed.
    pub candidate: String,
    /// Platform name, or the raw label when it failed to resolve.
    pub platform: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}/{}: {}",
            self.severity, self.kind, self.candidate, self.platform, self.message
        )
    }
}

/// Ordered accumulation of diagnostics for one conversion run
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no error-level diagnostics were recorded
    /// (warnings are OK).
    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns only warning-level diagnostics
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    /// Returns only error-level diagnostics
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    pub fn warn(
        &mut self,
        kind: DiagnosticKind,
        candidate: &str,
        platform: &str,
        message: impl Into<String>,
    ) {
        self.push(Severity::Warning, kind, candidate, platform, message);
    }

    pub fn error(
        &mut self,
        kind: DiagnosticKind,
        candidate: &str,
        platform: &str,
        message: impl Into<String>,
    ) {
        self.push(Severity::Error, kind, candidate, platform, message);
    }

    fn push(
        &mut self,
        severity: Severity,
        kind: DiagnosticKind,
        candidate: &str,
        platform: &str,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            kind,
            candidate: candidate.to_string(),
            platform: platform.to_string(),
            message: message.into(),
        });
    }
}
