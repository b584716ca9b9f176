use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity, compare_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
