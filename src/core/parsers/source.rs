use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{
    BytePos, FileName, Globals, SourceFile, SourceMap, Spanned,
    comments::{Comment, CommentKind, SingleThreadedComments},
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::comment::{CommentGroup, CommentToken, Position, PositionResolver, SourceComments};

/// Comments of one parsed file, positioned through `source_map`.
pub struct ParsedSource {
    pub comments: SourceComments<BytePos>,
    pub source_map: Arc<SourceMap>,
}

impl PositionResolver for SourceMap {
    type Handle = BytePos;

    fn resolve_position(&self, pos: BytePos) -> Position {
        let loc = self.lookup_char_pos(pos);
        Position {
            filename: loc.file.name.to_string(),
            line: loc.line,
            column: loc.col.0 + 1,
        }
    }
}

/// Pick the parser syntax from the file extension.
pub fn syntax_for(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/TS source string and collect its comments as groups.
///
/// Accepts a shared SourceMap so several files can be positioned through one map.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        parser.parse_program().map_err(|e| {
            let pos = source_map.resolve_position(e.span().lo);
            anyhow!("{}:{}: {}", pos.line, pos.column, e.kind().msg())
        })?;

        let (leading, trailing) = comments.borrow_all();
        let all: Vec<Comment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .cloned()
            .collect();

        Ok(ParsedSource {
            comments: group_comments(all, &source_file),
            source_map: source_map.clone(),
        })
    })
}

/// Rebuild the token text with its delimiters.
fn raw_text(comment: &Comment) -> String {
    match comment.kind {
        CommentKind::Line => format!("//{}", comment.text),
        CommentKind::Block => format!("/*{}*/", comment.text),
    }
}

/// Sort comments into file order and group adjacent ones.
///
/// Two comments are adjacent when only whitespace with at most one newline
/// separates them.
fn group_comments(mut comments: Vec<Comment>, source_file: &SourceFile) -> SourceComments<BytePos> {
    comments.sort_by_key(|c| c.span.lo);
    comments.dedup_by_key(|c| c.span.lo);

    let src: &str = &source_file.src;
    let offset = |pos: BytePos| (pos.0 - source_file.start_pos.0) as usize;

    let mut groups: Vec<CommentGroup<BytePos>> = Vec::new();
    let mut prev_end: Option<BytePos> = None;

    for comment in comments {
        let token = CommentToken::new(raw_text(&comment), comment.span.lo);

        let adjacent = prev_end
            .and_then(|end| src.get(offset(end)..offset(comment.span.lo)))
            .is_some_and(|gap| gap.trim().is_empty() && gap.matches('\n').count() <= 1);

        match groups.last_mut() {
            Some(group) if adjacent => group.list.push(token),
            _ => groups.push(CommentGroup { list: vec![token] }),
        }
        prev_end = Some(comment.span.hi);
    }

    SourceComments { groups }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(code: &str, file_path: &str) -> ParsedSource {
        parse_source(code.to_string(), file_path, Arc::default()).unwrap()
    }

    fn group_texts(parsed: &ParsedSource) -> Vec<Vec<String>> {
        parsed
            .comments
            .groups
            .iter()
            .map(|g| g.list.iter().map(|t| t.text.clone()).collect())
            .collect()
    }

    #[test]
    fn test_collects_raw_tokens_in_file_order() {
        let code = r#"
const a = 1; // TODO: trailing
/* BUG: block */
function f() {
  // FIXME: inside
  return a;
}
"#;
        let parsed = parse(code, "a.ts");
        let tokens: Vec<_> = parsed.comments.tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(
            tokens,
            vec!["// TODO: trailing", "/* BUG: block */", "// FIXME: inside"]
        );
    }

    #[test]
    fn test_groups_adjacent_comments() {
        let code = "// one\n// two\n\n// three\nlet x = 1;\n/* four */ /* five */\nlet y = 2;\n";
        let parsed = parse(code, "a.js");
        assert_eq!(
            group_texts(&parsed),
            vec![
                vec!["// one".to_string(), "// two".to_string()],
                vec!["// three".to_string()],
                vec!["/* four */".to_string(), "/* five */".to_string()],
            ]
        );
    }

    #[test]
    fn test_code_between_comments_splits_groups() {
        let code = "// one\nlet x = 1; // two\nlet y = 2;\n";
        let parsed = parse(code, "a.js");
        assert_eq!(parsed.comments.groups.len(), 2);
    }

    #[test]
    fn test_positions_resolve_to_comment_start() {
        let code = "let x = 1;\n\n    /* multi\n   TODO: later */\nlet y = 2;\n";
        let parsed = parse(code, "src/file.ts");
        let token = parsed.comments.tokens().next().unwrap();

        let pos = parsed.source_map.resolve_position(token.pos);
        assert_eq!(pos.filename, "src/file.ts");
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_tsx_and_jsx_syntax() {
        let tsx = "export const A = () => <div>{/* TODO: jsx */}</div>;\n";
        assert_eq!(parse(tsx, "a.tsx").comments.tokens().count(), 1);

        let jsx = "export const B = () => <p>{/* BUG: x */}</p>;\n";
        assert_eq!(parse(jsx, "b.jsx").comments.tokens().count(), 1);
    }

    #[test]
    fn test_ts_generic_cast_parses_without_tsx() {
        let code = "const n = <number>value; // TODO: drop cast\nexport {};\n";
        assert_eq!(parse(code, "a.ts").comments.tokens().count(), 1);
    }

    #[test]
    fn test_syntax_error_carries_line_and_column() {
        let code = "let ok = 1;\nconst x = );\nlet after = 2;\n".to_string();
        let err = parse_source(code, "bad.ts", Arc::default())
            .err()
            .unwrap()
            .to_string();
        let (line, rest) = err.split_once(':').unwrap();
        let (column, message) = rest.split_once(": ").unwrap();

        assert_eq!(line, "2");
        assert!(column.parse::<usize>().unwrap() >= 1);
        assert!(!message.is_empty());
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = parse_source("const a = {".to_string(), "bad.ts", Arc::default());
        assert!(result.is_err());
    }
}
