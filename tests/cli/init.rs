use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".todoxrc.json").exists());
    assert_snapshot!(test.read_file(".todoxrc.json")?, @r#"
    {
      "ignores": [],
      "includes": [],
      "keywords": [
        "TODO",
        "BUG",
        "FIXME"
      ],
      "format": false,
      "formatRules": []
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".todoxrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".todoxrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_used_by_check() -> Result<()> {
    let test = CliTest::with_file("a.ts", "// BUG: x\nexport {};\n")?;

    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}
