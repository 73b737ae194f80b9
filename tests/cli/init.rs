use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .pinolintrc.json"));

    let config = test.read_file(".pinolintrc.json")?;
    assert!(config.contains("includes"));
    assert!(config.contains("ignoreTestFiles"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pinolintrc.json", "{}")?;

    test.command()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}

#[test]
fn test_init_config_is_used_by_check() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").assert().success();

    test.write_file("src/app.ts", "logger.info('msg', {a: 1});\n")?;

    test.command().arg("check").assert().code(1);

    Ok(())
}
