//! Shared data models for validation results and run summaries.

use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A single formatting deviation found in a document.
pub struct Issue {
    /// 1-based line number; `None` for file-level failures (read/write errors).
    pub line: Option<usize>,
    pub message: String,
    /// Whether fix mode resolves this issue.
    pub fixable: bool,
}

impl Issue {
    pub fn at(line: usize, message: impl Into<String>, fixable: bool) -> Self {
        Issue {
            line: Some(line),
            message: message.into(),
            fixable,
        }
    }

    pub fn file_error(message: impl Into<String>) -> Self {
        Issue {
            line: None,
            message: message.into(),
            fixable: false,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(n) => write!(f, "Line {}: {}", n, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Serialize, Debug)]
/// Issues found in one file, plus what fix mode did with them.
pub struct FileReport {
    pub file: String,
    pub issues: Vec<Issue>,
    /// Issues resolved by rewriting the file (fix mode only).
    pub fixed: usize,
    pub wrote: bool,
}

impl FileReport {
    /// Issues still present after this run.
    pub fn remaining(&self) -> impl Iterator<Item = &Issue> {
        let wrote = self.wrote;
        self.issues.iter().filter(move |i| !(wrote && i.fixable))
    }
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
/// Aggregated totals for one validation run.
pub struct Summary {
    pub files: usize,
    pub files_with_issues: usize,
    pub issues: usize,
    pub fixed: usize,
}

#[derive(Serialize, Debug)]
/// Validation run container: per-file reports (only files with issues) and totals.
pub struct LintResult {
    pub files: Vec<FileReport>,
    pub summary: Summary,
    pub fix: bool,
}
