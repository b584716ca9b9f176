//! Line matching for marker keywords.
//!
//! Keyword mode and format mode share one matcher: every rule carries a keyword
//! and an optional compiled validator. In keyword mode a keyword hit is always
//! reported. In format mode a hit is reported only when the rule has a
//! validator and the trimmed line fails it.

use std::borrow::Cow;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::FormatRule;

/// Trimmed lines shorter than this (in characters) are never reported.
pub const MIN_LINE_CHARS: usize = 4;

/// Reported lines longer than this (in characters) are cut and suffixed with `...`.
pub const DISPLAY_LIMIT: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Report every line that starts with a keyword.
    Keyword,
    /// Report lines that start with a keyword but fail its format pattern.
    Format,
}

/// A keyword plus the pattern a matching line has to satisfy.
#[derive(Debug, Clone)]
pub struct MarkerRule {
    pub keyword: String,
    /// Pattern source as configured, empty when unconstrained.
    pub pattern: String,
    validator: Option<Regex>,
}

impl MarkerRule {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            pattern: String::new(),
            validator: None,
        }
    }

    /// Build a format rule, compiling its pattern up front.
    pub fn format(keyword: impl Into<String>, pattern: impl Into<String>) -> Result<Self> {
        let keyword = keyword.into();
        let pattern = pattern.into();
        let validator = if pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&pattern).with_context(|| {
                format!(
                    "Invalid regular expression for keyword \"{}\" in 'formatRules': \"{}\"",
                    keyword, pattern
                )
            })?)
        };

        Ok(Self {
            keyword,
            pattern,
            validator,
        })
    }

    /// True when `line` starts with this rule's keyword followed by a word boundary.
    pub fn applies_to(&self, line: &str) -> bool {
        starts_with_keyword(line, &self.keyword)
    }

    /// True when `line` satisfies the rule's format. Rules without a pattern accept anything.
    pub fn accepts(&self, line: &str) -> bool {
        self.validator.as_ref().is_none_or(|re| re.is_match(line))
    }
}

/// One offending line inside a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFinding<'a> {
    /// 0-based line index within the comment text.
    pub offset: usize,
    /// The trimmed line, truncated for display.
    pub shown: Cow<'a, str>,
    pub rule_index: usize,
}

#[derive(Debug, Clone)]
pub struct LineMatcher {
    mode: MatchMode,
    rules: Vec<MarkerRule>,
}

impl LineMatcher {
    pub fn keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            mode: MatchMode::Keyword,
            rules: keywords
                .iter()
                .map(|kw| MarkerRule::keyword(kw.as_ref()))
                .collect(),
        }
    }

    /// Fails on the first pattern that does not compile.
    pub fn formats(rules: &[FormatRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| MarkerRule::format(&rule.keyword, &rule.regular_expression))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            mode: MatchMode::Format,
            rules,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn rule(&self, index: usize) -> &MarkerRule {
        &self.rules[index]
    }

    /// Find the offending lines of a normalized comment, in line order.
    pub fn find<'a>(&self, text: &'a str) -> Vec<LineFinding<'a>> {
        text.lines()
            .enumerate()
            .filter_map(|(offset, line)| {
                let line = line.trim();
                if line.chars().count() < MIN_LINE_CHARS {
                    return None;
                }
                self.check_line(line).map(|rule_index| LineFinding {
                    offset,
                    shown: truncate_for_display(line),
                    rule_index,
                })
            })
            .collect()
    }

    /// The first rule whose keyword matches decides the line.
    fn check_line(&self, line: &str) -> Option<usize> {
        let (index, rule) = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.applies_to(line))?;

        match self.mode {
            MatchMode::Keyword => Some(index),
            MatchMode::Format => (!rule.accepts(line)).then_some(index),
        }
    }
}

/// Case-insensitive prefix match plus the boundary rule.
///
/// The prefix is taken with the keyword's byte length. A keyword longer than the
/// line, or a cut that falls inside a multi-byte character, never matches.
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    let Some(prefix) = line.get(..keyword.len()) else {
        return false;
    };

    eq_ignore_case(prefix, keyword) && !continues_word(&line[keyword.len()..])
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Whether the text after a keyword continues the same identifier (`TODOLIST`).
pub fn continues_word(rest: &str) -> bool {
    match rest.as_bytes().first() {
        None | Some(b':' | b' ' | b'(') => false,
        Some(_) => rest.chars().next().is_some_and(char::is_alphanumeric),
    }
}

pub fn truncate_for_display(line: &str) -> Cow<'_, str> {
    match line.char_indices().nth(DISPLAY_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &line[..cut])),
        None => Cow::Borrowed(line),
    }
}
