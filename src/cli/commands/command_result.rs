use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running todox commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}
