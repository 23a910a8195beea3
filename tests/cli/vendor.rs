use crate::harness::{MODULES, TestContext, executable_files, snapshot};
use predicates::prelude::*;
use std::fs;

#[test]
fn vendor_initializes_empty_project() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("vendor")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vendored alpha.dagger.io, dagger.io, universe.dagger.io",
        ));

    let descriptor = fs::read_to_string(ctx.cue_mod().join("module.cue")).unwrap();
    assert_eq!(descriptor, "module: \"\"\n");
    assert!(ctx.cue_mod().join("usr").is_dir());
    assert_eq!(ctx.pkg_entries(), TestContext::expected_pkg_entries());
}

#[test]
fn vendor_writes_gitignore() {
    let ctx = TestContext::new();
    ctx.vendor();

    let gitignore = fs::read_to_string(ctx.pkg_dir().join(".gitignore")).unwrap();
    assert_eq!(
        gitignore,
        "# generated by dagger\ndagger.lock\nalpha.dagger.io\ndagger.io\nuniverse.dagger.io"
    );
}

#[test]
fn vendor_keeps_existing_module_descriptor() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.cue_mod()).unwrap();
    fs::write(ctx.cue_mod().join("module.cue"), "module: \"example.com/app\"\n").unwrap();

    ctx.vendor();

    let descriptor = fs::read_to_string(ctx.cue_mod().join("module.cue")).unwrap();
    assert_eq!(descriptor, "module: \"example.com/app\"\n");
}

#[test]
fn vendor_removes_stale_backup() {
    let ctx = TestContext::new();
    let stale = ctx.pkg_dir().join("dagger.io.old");
    fs::create_dir_all(stale.join("dagger")).unwrap();
    fs::write(stale.join("dagger").join("plan.cue"), "package dagger\n").unwrap();

    ctx.vendor();

    assert!(!stale.exists());
    assert!(ctx.pkg_dir().join("dagger.io").join("dagger").is_dir());
    assert_eq!(ctx.pkg_entries(), TestContext::expected_pkg_entries());
}

#[test]
fn vendor_recovers_module_moved_aside_by_crash() {
    let ctx = TestContext::new();
    ctx.vendor();
    let before = snapshot(ctx.work_dir());
    // Simulate termination between the backup rename and the install rename.
    let universe = ctx.pkg_dir().join("universe.dagger.io");
    fs::rename(&universe, ctx.pkg_dir().join("universe.dagger.io.old")).unwrap();

    ctx.vendor();

    assert_eq!(snapshot(ctx.work_dir()), before);
}

#[test]
fn vendor_twice_yields_same_tree() {
    let ctx = TestContext::new();

    ctx.vendor();
    let first = snapshot(ctx.work_dir());
    ctx.vendor();
    let second = snapshot(ctx.work_dir());

    assert_eq!(first, second);
}

#[test]
fn vendor_replaces_locally_modified_modules() {
    let ctx = TestContext::new();
    ctx.vendor();
    let pristine = snapshot(ctx.work_dir());
    fs::write(ctx.pkg_dir().join("dagger.io").join("local.cue"), "package local\n").unwrap();

    ctx.vendor();

    assert_eq!(snapshot(ctx.work_dir()), pristine);
}

#[test]
fn vendored_files_are_executable() {
    let ctx = TestContext::new();
    ctx.vendor();

    for module in MODULES {
        let files = executable_files(&ctx.pkg_dir().join(module));
        assert!(!files.is_empty(), "{} should contain files", module);
        for (path, executable) in files {
            assert!(executable, "{}/{} should be executable", module, path.display());
        }
    }
}

#[test]
fn vendor_accepts_explicit_path() {
    let ctx = TestContext::new();
    let elsewhere = ctx.root().join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();

    ctx.cli_in(&elsewhere).arg("vendor").arg(ctx.work_dir()).assert().success();

    assert_eq!(ctx.pkg_entries(), TestContext::expected_pkg_entries());
    assert!(!elsewhere.join("cue.mod").exists());
}

#[test]
fn vendor_reads_path_from_environment() {
    let ctx = TestContext::new();
    let elsewhere = ctx.root().join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();

    ctx.cli_in(&elsewhere)
        .arg("vendor")
        .env("CUEVENDOR_PROJECT", ctx.work_dir())
        .assert()
        .success();

    assert_eq!(ctx.pkg_entries(), TestContext::expected_pkg_entries());
}

#[test]
fn vendor_finds_project_root_from_subdirectory() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.cue_mod()).unwrap();
    let nested = ctx.work_dir().join("services").join("api");
    fs::create_dir_all(&nested).unwrap();

    ctx.cli_in(&nested).arg("v").assert().success();

    assert_eq!(ctx.pkg_entries(), TestContext::expected_pkg_entries());
    assert!(!nested.join("cue.mod").exists());
}

#[test]
fn vendor_creates_missing_project_root() {
    let ctx = TestContext::new();
    let missing = ctx.root().join("new-project");

    ctx.cli().arg("vendor").arg(&missing).assert().success();

    assert!(missing.join("cue.mod/module.cue").is_file());
    for module in MODULES {
        assert!(missing.join("cue.mod/pkg").join(module).is_dir());
    }
}

#[cfg(unix)]
#[test]
fn vendor_reports_lock_failure_on_read_only_package_dir() {
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    ctx.vendor();
    let before = snapshot(ctx.work_dir());
    fs::set_permissions(ctx.pkg_dir(), fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to observe then.
    let probe = ctx.pkg_dir().join(".probe");
    if fs::write(&probe, "").is_ok() {
        fs::remove_file(&probe).unwrap();
        fs::set_permissions(ctx.pkg_dir(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    ctx.cli()
        .arg("vendor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to acquire vendor lock"));

    fs::set_permissions(ctx.pkg_dir(), fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(snapshot(ctx.work_dir()), before);
}

#[test]
fn verbose_flag_emits_debug_logs() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--verbose", "vendor"])
        .assert()
        .success()
        .stderr(predicate::str::contains("vendoring packages"));
}
