use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NO_PKG_CONFIG: &str = "guile-locate-test-no-pkg-config";

/// A working directory with a `guile-locate.toml` declaring `guile-3.0`.
fn project(guile: &str, guild: &str) -> anyhow::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("guile-locate.toml"),
        format!("[packages.\"guile-3.0\"]\nguile = \"{guile}\"\nguild = \"{guild}\"\n"),
    )?;
    Ok(dir)
}

fn locate(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("guile-locate"));
    cmd.current_dir(dir.path())
        .env("PKG_CONFIG", NO_PKG_CONFIG)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

#[test]
fn test_help_command() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("guile-locate"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Find a Guile installation"));
}

#[test]
fn test_find_from_config() -> anyhow::Result<()> {
    let dir = project("guile1", "guild1")?;
    locate(&dir)
        .args(["find", "guile-3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Program guile found: YES (guile1)"))
        .stdout(predicate::str::contains("guile-3.0 -> guile1 + guild1"));
    Ok(())
}

#[test]
fn test_find_required_missing_package() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    locate(&dir)
        .args(["find", "guile-9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("guile-9.9 not found"));
    Ok(())
}

#[test]
fn test_find_optional_missing_package() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    locate(&dir)
        .args(["find", "guile-9.9", "--required", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guile-9.9 not found"));
    Ok(())
}

#[test]
fn test_find_optional_disabler_json() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    locate(&dir)
        .args(["find", "guile-9.9", "--required", "auto", "--disabler", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"disabler\": true"));
    Ok(())
}

#[test]
fn test_find_missing_compiler() -> anyhow::Result<()> {
    let dir = project("guile1", "")?;
    locate(&dir)
        .args(["find", "guile-3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("guild not found"));

    locate(&dir)
        .args(["find", "guile-3.0", "--required", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guile-3.0 not found"));
    Ok(())
}

#[test]
fn test_find_json_output() -> anyhow::Result<()> {
    let dir = project("guile1", "guild1")?;
    let output = locate(&dir).args(["find", "guile-3.0", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["found"], true);
    assert_eq!(value["installation"]["interpreter"]["name"], "guile");
    assert_eq!(value["installation"]["compiler"]["command"][0], "guild1");
    Ok(())
}

#[test]
fn test_find_explicit_config() -> anyhow::Result<()> {
    let dir = project("guile1", "guild1")?;
    let other = tempfile::tempdir()?;
    let config = dir.path().join("guile-locate.toml");
    locate(&other)
        .args(["find", "guile-3.0", "--quiet", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Program guile").not())
        .stdout(predicate::str::contains("[DONE]"));

    locate(&other)
        .args(["find", "guile-3.0", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file 'missing.toml' not found"));
    Ok(())
}

#[test]
fn test_find_rejects_bad_requirement() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    locate(&dir)
        .args(["find", "guile-3.0", "--required", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for 'required'"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_find_probes_modules() -> anyhow::Result<()> {
    // `true` accepts any import, `false` rejects every one.
    let ok = project("true", "guild1")?;
    locate(&ok)
        .args(["find", "guile-3.0", "-m", "ice-9 format", "-m", "srfi srfi-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "found: YES (true) modules: ice-9 format, srfi srfi-1",
        ));

    let bad = project("false", "guild1")?;
    locate(&bad)
        .args(["find", "guile-3.0", "-m", "ice-9 format"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("found: NO"))
        .stderr(predicate::str::contains("guile is missing modules: ice-9 format"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_probe_command() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    locate(&dir)
        .args(["probe", "-m", "ice-9 format", "--", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] ice-9 format"));

    locate(&dir)
        .args(["probe", "-m", "ice-9 format", "--", "false"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[MISSING] ice-9 format"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_find_search_path_rejects_missing_programs() -> anyhow::Result<()> {
    let dir = project("/nonexistent/guile", "/nonexistent/guild")?;
    locate(&dir)
        .args(["find", "guile-3.0", "--search-path"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Program guile found: NO"))
        .stderr(predicate::str::contains("guile not found"));
    Ok(())
}

#[test]
fn test_find_json_debug_keeps_stdout_clean() -> anyhow::Result<()> {
    let dir = project("guile1", "guild1")?;
    let output = locate(&dir)
        .args(["find", "guile-3.0", "--json", "--debug"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["found"], true);
    assert!(String::from_utf8_lossy(&output.stderr).contains("[DEBUG]"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_find_search_path_resolves_bare_names() -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = project("guile", "guild")?;
    let bin = tempfile::tempdir()?;
    for name in ["guile", "guild"] {
        let path = bin.path().join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n")?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    }

    locate(&dir)
        .args(["find", "guile-3.0", "--search-path"])
        .env("PATH", bin.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Program guile found: YES"));

    let empty = tempfile::tempdir()?;
    locate(&dir)
        .args(["find", "guile-3.0", "--search-path"])
        .env("PATH", empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("guile not found"));
    Ok(())
}
