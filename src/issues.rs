//! Issue types for scan results.
//!
//! Each issue is self-contained with everything the reporter needs to display it.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::{MatchMode, Message, Position};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    TodoKeyword,
    TodoFormat,
    ParseError,
}

impl From<MatchMode> for Rule {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Keyword => Rule::TodoKeyword,
            MatchMode::Format => Rule::TodoFormat,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::TodoKeyword => write!(f, "todo-keyword"),
            Rule::TodoFormat => write!(f, "todo-format"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A comment line flagged by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIssue {
    pub message: Message,
    pub rule: Rule,
    /// The physical source line the finding points at, for context display.
    pub source_line: Option<String>,
    /// 1-based column of the caret under `source_line`.
    pub caret_column: usize,
}

impl MarkerIssue {
    pub fn new(message: Message, mode: MatchMode, source: &str) -> Self {
        let source_line = message
            .pos
            .line
            .checked_sub(1)
            .and_then(|index| source.lines().nth(index))
            .map(str::to_string);
        let caret_column = source_line
            .as_deref()
            .map_or(message.pos.column, |line| caret_column(line, message.pos.column));

        Self {
            message,
            rule: mode.into(),
            source_line,
            caret_column,
        }
    }

    pub fn severity() -> Severity {
        Severity::Warning
    }
}

/// The message column belongs to the line that opens the comment. Later lines
/// of a block comment point at their first non-blank character instead.
fn caret_column(source_line: &str, column: usize) -> usize {
    let at_column: String = source_line.chars().skip(column.saturating_sub(1)).take(2).collect();
    if at_column == "//" || at_column == "/*" {
        return column;
    }

    source_line
        .chars()
        .position(|c| !c.is_whitespace())
        .map_or(column, |index| index + 1)
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding produced by a check run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Marker(MarkerIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Marker(_) => MarkerIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    fn sort_key(&self) -> (&str, usize, usize) {
        match self {
            Issue::Marker(issue) => (
                &issue.message.pos.filename,
                issue.message.pos.line,
                issue.message.pos.column,
            ),
            Issue::ParseError(issue) => (&issue.file_path, 0, 0),
        }
    }
}

/// Order issues by file, then line, then column.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location, with the source line when available.
    Source {
        pos: &'a Position,
        source_line: Option<&'a str>,
        caret_column: usize,
    },
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;
}

impl Report for MarkerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source {
            pos: &self.message.pos,
            source_line: self.source_line.as_deref(),
            caret_column: self.caret_column,
        }
    }

    fn message(&self) -> String {
        self.message.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
