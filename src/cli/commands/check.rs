use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use colored::Colorize;
use swc_common::SourceMap;

use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::CheckCommand,
    config::{ConfigLoadResult, load_config},
    core::{Scanner, file_scanner::scan_files, parse_source},
    issues::{Issue, MarkerIssue, ParseErrorIssue},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let root = cmd.common.path.as_path();
    let verbose = cmd.common.verbose;

    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(root)?;

    // CLI arguments take precedence over the config file.
    if !cmd.keywords.is_empty() {
        config.settings.keywords = cmd.keywords.clone();
    }
    if cmd.format {
        config.settings.format = true;
    }
    config.validate()?;

    if verbose && !from_file {
        eprintln!(
            "{} no config file found, using defaults",
            "note:".bold().cyan()
        );
    }

    let scanner = Scanner::new(&config.settings)?;
    let scan = scan_files(
        &root.to_string_lossy(),
        &config.includes,
        &config.ignores,
        verbose,
    );

    if verbose && scan.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            scan.skipped_count
        );
    }

    let source_map: Arc<SourceMap> = Arc::default();
    let mut issues: Vec<Issue> = Vec::new();

    for file in &scan.files {
        let display_path = display_path(root, file);

        let scanned = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", display_path))
            .and_then(|code| {
                let parsed = parse_source(code.clone(), &display_path, source_map.clone())?;
                let messages = scanner.scan(&parsed.comments, &*parsed.source_map);
                Ok((code, messages))
            });

        match scanned {
            Ok((code, messages)) => {
                issues.extend(
                    messages
                        .into_iter()
                        .map(|m| Issue::Marker(MarkerIssue::new(m, scanner.mode(), &code))),
                );
            }
            Err(err) => {
                if verbose {
                    eprintln!(
                        "{} {}: {:#}",
                        "warning:".bold().yellow(),
                        display_path,
                        err
                    );
                }
                issues.push(Issue::ParseError(ParseErrorIssue {
                    file_path: display_path,
                    error: format!("{:#}", err),
                }));
            }
        }
    }

    Ok(finish(CommandSummary::Check, issues, scan.files.len()))
}

/// Path shown in reports: relative to the scanned root when possible.
fn display_path(root: &Path, file: &str) -> String {
    Path::new(file)
        .strip_prefix(root)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| file.to_string())
}
