//! Scan one file's comments for marker keywords.
//!
//! [`Scanner`] is built once from [`Settings`] (format patterns are compiled
//! there) and can then scan any number of files. [`scan`] is the one-shot
//! form.

use anyhow::Result;

use super::comment::{CommentToken, Position, PositionResolver, SourceComments, normalize};
use super::matcher::{LineFinding, LineMatcher, MatchMode};
use crate::config::Settings;
use crate::utils::clean_path;

/// A finding on one comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Line is the comment's start line plus the line's offset within the
    /// comment. Column is the comment's start column.
    pub pos: Position,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    matcher: LineMatcher,
    /// Configured keywords joined with `/`, as shown in keyword-mode messages.
    keyword_list: String,
}

impl Scanner {
    /// Fails when a format rule's pattern is not a valid regular expression.
    pub fn new(settings: &Settings) -> Result<Self> {
        let keywords = settings.effective_keywords();
        let matcher = if settings.format {
            LineMatcher::formats(&settings.format_rules)?
        } else {
            LineMatcher::keywords(&keywords)
        };

        Ok(Self {
            matcher,
            keyword_list: keywords.join("/"),
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.matcher.mode()
    }

    /// All findings for one file, in comment order and line order within a comment.
    pub fn scan<R: PositionResolver>(
        &self,
        file: &SourceComments<R::Handle>,
        resolver: &R,
    ) -> Vec<Message> {
        file.tokens()
            .flat_map(|token| self.scan_comment(token, resolver))
            .collect()
    }

    fn scan_comment<R: PositionResolver>(
        &self,
        token: &CommentToken<R::Handle>,
        resolver: &R,
    ) -> Vec<Message> {
        let findings = self.matcher.find(normalize(&token.text));
        if findings.is_empty() {
            return Vec::new();
        }

        let start = resolver.resolve_position(token.pos);
        let filename = clean_path(&start.filename);

        findings
            .into_iter()
            .map(|finding| {
                let line = start.line + finding.offset;
                Message {
                    message: self.render(&filename, line, &finding),
                    pos: Position {
                        filename: start.filename.clone(),
                        line,
                        column: start.column,
                    },
                }
            })
            .collect()
    }

    fn render(&self, filename: &str, line: usize, finding: &LineFinding<'_>) -> String {
        match self.matcher.mode() {
            MatchMode::Keyword => format!(
                "{}:{}: Line contains {}: {:?}",
                filename, line, self.keyword_list, finding.shown
            ),
            MatchMode::Format => format!(
                "{}:{}: Line does not match the expected format: {}, {:?}",
                filename,
                line,
                self.matcher.rule(finding.rule_index).pattern,
                finding.shown
            ),
        }
    }
}

/// Scan one file with freshly built settings.
pub fn scan<R: PositionResolver>(
    file: &SourceComments<R::Handle>,
    resolver: &R,
    settings: &Settings,
) -> Result<Vec<Message>> {
    Ok(Scanner::new(settings)?.scan(file, resolver))
}
