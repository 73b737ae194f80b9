use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_fix_dry_run_previews_and_leaves_files_untouched() -> Result<()> {
    let source = "logger.info('User logged in', {userId: 123});\n";
    let test = CliTest::with_file("src/app.ts", source)?;

    test.fix_command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would swap"))
        .stdout(predicate::str::contains("'User logged in'"))
        .stdout(predicate::str::contains("{userId: 123}"))
        .stdout(predicate::str::contains("Would swap 1 argument pair(s) in 1 file(s)."))
        .stdout(predicate::str::contains("--apply"));

    assert_eq!(test.read_file("src/app.ts")?, source);

    Ok(())
}

#[test]
fn test_fix_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "logger.info('User logged in', {userId: 123});\n",
    )?;

    test.fix_command()
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Swapped 1 argument pair(s) in 1 file(s)."));

    assert_eq!(
        test.read_file("src/app.ts")?,
        "logger.info({userId: 123}, 'User logged in');\n"
    );

    Ok(())
}

#[test]
fn test_fix_apply_swaps_only_first_two_arguments() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "logger.warn('Msg', err, extra);\n")?;

    test.fix_command().arg("--apply").assert().success();

    assert_eq!(test.read_file("src/app.ts")?, "logger.warn(err, 'Msg', extra);\n");

    Ok(())
}

#[test]
fn test_fix_apply_handles_multiple_calls_per_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "logger.info('a', {n: 1});\nlogger.error('b', {n: 2});\n",
    )?;

    test.fix_command()
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Swapped 2 argument pair(s) in 1 file(s)."));

    assert_eq!(
        test.read_file("src/app.ts")?,
        "logger.info({n: 1}, 'a');\nlogger.error({n: 2}, 'b');\n"
    );

    Ok(())
}

#[test]
fn test_fix_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "logger.info('User logged in', {userId: 123});\n",
    )?;

    test.fix_command().arg("--apply").assert().success();
    let after_first = test.read_file("src/app.ts")?;

    // A second pass finds nothing to do and changes nothing.
    test.fix_command()
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
    assert_eq!(test.read_file("src/app.ts")?, after_first);

    Ok(())
}

#[test]
fn test_fix_leaves_correct_calls_alone() -> Result<()> {
    let source = "logger.info({userId: 123}, 'User logged in');\nlogger.info('Hello %s', name);\n";
    let test = CliTest::with_file("src/app.ts", source)?;

    test.fix_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));

    assert_eq!(test.read_file("src/app.ts")?, source);

    Ok(())
}
