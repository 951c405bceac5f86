use assert_cmd::Command;
use predicates::prelude::*;
use std::env;

mod common;
use common::{rwt, setup_test_db};

/// Binary bound to a test database, isolated from the user's real config.
fn cmd(db_path: &str) -> Command {
    let mut c = rwt();
    c.env("HOME", env::temp_dir()).args(["--db", db_path]);
    c
}

fn init(db_path: &str) {
    cmd(db_path).args(["--test", "init"]).assert().success();
}

#[test]
fn test_worktype_add_and_duplicate_message() {
    let db_path = setup_test_db("cli_worktype");
    init(&db_path);

    cmd(&db_path)
        .args([
            "worktype",
            "add",
            "Consulting",
            "--rounding",
            "15",
            "--rounding-unit",
            "1",
            "--minimum",
            "1",
            "--min-unit",
            "2",
            "--price",
            "80",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worktype created successfully."));

    cmd(&db_path)
        .args(["worktype", "add", "Consulting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Worktype name is already taken."));

    cmd(&db_path)
        .args(["worktype", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consulting"))
        .stdout(predicate::str::contains("00:15:00"))
        .stdout(predicate::str::contains("80.00"));
}

#[test]
fn test_worktype_validation_messages() {
    let db_path = setup_test_db("cli_worktype_invalid");
    init(&db_path);

    cmd(&db_path)
        .args(["worktype", "add", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name length!"));

    cmd(&db_path)
        .args(["worktype", "add", "Writing", "--price", "a lot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only use integers for rounding and minimum, and decimal for price!",
        ));

    cmd(&db_path)
        .args(["worktype", "add", "Writing", "--rounding-unit", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration unit code: 5"));

    // Name checks come before unit codes.
    cmd(&db_path)
        .args(["worktype", "add", "abc", "--rounding-unit", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name length!"));
}

#[test]
fn test_fresh_database_reports_no_migrations() {
    let db_path = setup_test_db("cli_fresh_schema");

    cmd(&db_path)
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration applied").not());
}

#[test]
fn test_full_timer_cycle() {
    let db_path = setup_test_db("cli_cycle");
    init(&db_path);

    cmd(&db_path)
        .args([
            "worktype",
            "add",
            "Support",
            "--rounding",
            "30",
            "--rounding-unit",
            "1",
        ])
        .assert()
        .success();

    cmd(&db_path)
        .args(["project", "add", "Website", "--worktype", "Support"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 created."));

    cmd(&db_path)
        .args(["start", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 started."));

    cmd(&db_path)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website"))
        .stdout(predicate::str::contains("running"));

    cmd(&db_path)
        .args(["pause", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 paused."));

    cmd(&db_path)
        .args(["pause", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 is not running."));

    cmd(&db_path)
        .args(["stop", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 finished."))
        .stdout(predicate::str::contains("Billed"))
        .stdout(predicate::str::contains("00:30:00"));

    cmd(&db_path)
        .args(["stop", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 is already stopped."));

    cmd(&db_path)
        .args(["entries", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rounding entry."))
        .stdout(predicate::str::contains("finished"));
}

#[test]
fn test_other_users_cannot_touch_a_project() {
    let db_path = setup_test_db("cli_owner");
    init(&db_path);

    cmd(&db_path)
        .args(["worktype", "add", "Private"])
        .assert()
        .success();
    cmd(&db_path)
        .args(["--user", "7", "project", "add", "Mine", "-w", "Private"])
        .assert()
        .success();

    cmd(&db_path)
        .args(["--user", "8", "start", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 not found."));

    cmd(&db_path)
        .args(["--user", "8", "project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects for user 8."));

    cmd(&db_path)
        .args(["--user", "7", "start", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project #1 started."));
}

#[test]
fn test_unknown_worktype_is_an_error() {
    let db_path = setup_test_db("cli_unknown_worktype");
    init(&db_path);

    cmd(&db_path)
        .args(["project", "add", "Orphan", "--worktype", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Worktype not found: Nothing"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log");
    init(&db_path);

    cmd(&db_path)
        .args(["worktype", "add", "Logging"])
        .assert()
        .success();

    cmd(&db_path)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("worktype_add"))
        .stdout(predicate::str::contains("migration_applied").not());

    cmd(&db_path)
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worktypes:"))
        .stdout(predicate::str::contains("Applied migrations:"))
        .stdout(predicate::str::contains("Integrity check passed."));
}
