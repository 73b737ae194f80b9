use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_misordered_call_is_flagged() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "logger.info('User logged in', {userId: 123});\n",
    )?;

    test.check_command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::contains(
            "Pino logger methods should have the object argument before the message string.",
        ))
        .stdout(predicate::str::contains("Use info({...}, \"message\") instead."))
        .stdout(predicate::str::contains("correct-args-position"))
        .stdout(predicate::str::contains("src/app.ts:1:1"))
        .stdout(predicate::str::contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_correct_order_passes() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "logger.info({userId: 123}, 'User logged in');\n",
    )?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    Ok(())
}

#[test]
fn test_console_calls_are_ignored() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "console.log('msg', {data: 'x'});\n")?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    Ok(())
}

#[test]
fn test_unrecognized_receivers_are_ignored() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "someOtherLogger.info('message', {data: 'test'});\n",
    )?;

    test.check_command().assert().success();

    Ok(())
}

#[test]
fn test_interpolation_markers_pass() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "logger.info('Hello %s', name);\n")?;

    test.check_command().assert().success();

    Ok(())
}

#[test]
fn test_nested_receiver_flagged() -> Result<()> {
    let test = CliTest::with_file(
        "src/service.ts",
        "this.logger.error('request failed', {status: 500});\n",
    )?;

    test.check_command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Use error({...}, \"message\") instead."));

    Ok(())
}

#[test]
fn test_suppression_comment_respected() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "// pinolint-disable-next-line\nlogger.info('msg', {a: 1});\n",
    )?;

    test.check_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    Ok(())
}

#[test]
fn test_multiple_files_sorted_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.ts", "logger.warn('late', {n: 2});\n")?;
    test.write_file("src/a.ts", "logger.info('early', {n: 1});\n")?;

    let assert = test.check_command().assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    let a_pos = stdout.find("src/a.ts:1:1").expect("a.ts issue missing");
    let b_pos = stdout.find("src/b.ts:1:1").expect("b.ts issue missing");
    assert!(a_pos < b_pos, "issues should be sorted by file path");

    Ok(())
}

#[test]
fn test_parse_error_exits_with_error_status() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "logger.info('unterminated\n")?;

    test.check_command()
        .assert()
        .code(2)
        .stdout(predicate::str::contains("parse-error"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".pinolintrc.json",
        r#"{
         "ignores": ["**/generated/**"],
         "includes": []
     }"#,
    )?;

    test.write_file("src/app.ts", "logger.info('msg', {a: 1});\n")?;
    test.write_file("generated/client.ts", "logger.info('msg', {a: 1});\n")?;

    let assert = test.check_command().assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("src/app.ts"));
    assert!(!stdout.contains("generated/client.ts"));

    Ok(())
}

#[test]
fn test_config_includes() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(".pinolintrc.json", r#"{ "includes": ["src"] }"#)?;

    test.write_file("src/app.ts", "logger.info('msg', {a: 1});\n")?;
    test.write_file("scripts/migrate.ts", "logger.info('msg', {a: 1});\n")?;

    let assert = test.check_command().assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("src/app.ts"));
    assert!(!stdout.contains("scripts/migrate.ts"));

    Ok(())
}

#[test]
fn test_test_files_skipped_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.test.ts", "logger.info('msg', {a: 1});\n")?;

    test.check_command().assert().success();

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("fix"))
        .stdout(predicate::str::contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));

    Ok(())
}
