use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, no issues found
/// - `Failure` (1): Command completed but found issues (errors/warnings)
/// - `Error` (2): Command failed due to internal error (config error, invalid pattern, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no issues found.
    Success,
    /// Command completed but found issues (errors/warnings).
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        if result.issues.is_empty() && result.error_count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{CommandSummary, InitSummary};

    fn result(summary: CommandSummary, error_count: usize) -> CommandResult {
        CommandResult {
            summary,
            error_count,
            warning_count: 0,
            issues: Vec::new(),
            parse_error_count: 0,
            source_files_checked: 0,
        }
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn status_from_result() {
        assert_eq!(
            ExitStatus::from(&result(CommandSummary::Check, 0)),
            ExitStatus::Success
        );
        assert_eq!(
            ExitStatus::from(&result(
                CommandSummary::Init(InitSummary { created: false }),
                1
            )),
            ExitStatus::Failure
        );
    }
}
