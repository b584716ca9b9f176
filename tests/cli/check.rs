use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_reports_markers() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"export function load() {
  // TODO: handle errors
  return fetch("/api");
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"// Renders the header.
export const Header = () => <h1>{/* title */}</h1>;
"#,
    )?;
    test.write_file("src/util.js", "// todos are tracked elsewhere\nexport {};\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_multiline_block_comment() -> Result<()> {
    let test = CliTest::with_file(
        "a.js",
        r#"/*
 * Parser entry.
 BUG: breaks on empty input
 FIXME: slow
 */
export {};
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_keyword_flag_overrides_defaults() -> Result<()> {
    let test = CliTest::with_file("a.ts", "// TODO: not reported\n// HACK: reported\nexport {};\n")?;

    assert_cmd_snapshot!(test.check_command().args(["--keyword", "HACK"]));

    Ok(())
}

#[test]
fn test_long_lines_are_truncated() -> Result<()> {
    let test = CliTest::with_file(
        "a.ts",
        "// TODO: rewrite this module once the new storage layer lands\nexport {};\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_format_mode_from_config() -> Result<()> {
    let test = CliTest::with_file(
        ".todoxrc.json",
        r#"{
  "format": true,
  "formatRules": [
    { "keyword": "TODO", "regularExpression": "^TODO\\([a-z]+\\): " }
  ]
}"#,
    )?;
    test.write_file(
        "src/a.ts",
        "// TODO(ana): owned\n// TODO: unowned\n// FIXME: not covered by a rule\nexport {};\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_invalid_format_rule_is_fatal() -> Result<()> {
    let test = CliTest::with_file(
        ".todoxrc.json",
        r#"{ "formatRules": [{ "keyword": "TODO", "regularExpression": "[" }] }"#,
    )?;
    test.write_file("a.ts", "// TODO: x\nexport {};\n")?;

    insta::with_settings!({filters => vec![
        (r"(?s)regex parse error:.*", "[REGEX ERROR]"),
    ]}, {
        assert_cmd_snapshot!(test.check_command().arg("--format"));
    });

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("bad.ts", "const a = {\n")?;
    test.write_file("good.ts", "// FIXME: later\nexport {};\n")?;

    insta::with_settings!({filters => vec![
        (r"error: \d+:\d+: .*  parse-error", "error: [PARSE ERROR]  parse-error"),
    ]}, {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_ignores_and_node_modules() -> Result<()> {
    let test = CliTest::with_file(".todoxrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("node_modules/pkg/index.js", "// TODO: vendored\n")?;
    test.write_file("src/generated/api.ts", "// TODO: generated\nexport {};\n")?;
    test.write_file("src/main.ts", "export const x = 1;\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_file("web/src/a.ts", "// BUG: off by one\nexport {};\n")?;

    assert_cmd_snapshot!(test.check_command().arg("web"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Usage:"));

    Ok(())
}
