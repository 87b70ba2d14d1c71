use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a private database
fn stride_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn create_beginner_plan(temp_dir: &TempDir, name: &str) {
    stride_cmd(temp_dir)
        .args([
            "plan",
            "create",
            "--goal",
            "strength",
            "--level",
            "beginner",
            "--assign",
            "Mon=push-foundations",
            "--name",
            name,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_workout_list_filters_by_level() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["workout", "list", "--level", "expert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Front Lever Lab"))
        .stdout(predicate::str::contains("Planche Protocol"))
        .stdout(predicate::str::contains("Push Foundations").not());
}

#[test]
fn test_cli_workout_list_search_without_match() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["workout", "list", "--search", "kettlebell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts found."));
}

#[test]
fn test_cli_workout_show() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["workout", "show", "core-basics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Core Basics (core-basics)"))
        .stdout(predicate::str::contains("- Duration: 15 min"));

    stride_cmd(&temp_dir)
        .args(["workout", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout 'nope' not found"));
}

#[test]
fn test_cli_program_list() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["program", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zero to Pull-Up"))
        .stdout(predicate::str::contains("Skill Cycle"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{"workouts": [{"id": "ring-rows", "title": "Ring Rows", "level": "Beginner", "duration": "10 min"}]}"#,
    )
    .unwrap();

    stride_cmd(&temp_dir)
        .arg("--catalog-file")
        .arg(&catalog_path)
        .args(["workout", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ring Rows"))
        .stdout(predicate::str::contains("Push Foundations").not());
}

#[test]
fn test_cli_missing_catalog_file() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["--catalog-file", "/no/such/catalog.json", "workout", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args([
            "plan",
            "create",
            "--goal",
            "strength",
            "--level",
            "beginner",
            "--days",
            "Tue,Thu",
            "--duration",
            "45",
            "--assign",
            "Tue=pull-up-starter",
            "--assign",
            "Tue=core-basics",
            "--name",
            "Pull Focus",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Pull Focus"))
        .stdout(predicate::str::contains("- Days/week: 2x (Tue, Thu)"))
        .stdout(predicate::str::contains("- Session: 45 min"))
        .stdout(predicate::str::contains("- Pull-Up Starter (20 min, Beginner)"))
        .stdout(predicate::str::contains("No workouts."));
}

#[test]
fn test_cli_create_plan_level_mismatch() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args([
            "plan",
            "create",
            "--goal",
            "skill",
            "--level",
            "expert",
            "--assign",
            "Mon=push-foundations",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build plan"));

    stride_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_create_plan_unscheduled_day() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args([
            "plan",
            "create",
            "--goal",
            "strength",
            "--level",
            "beginner",
            "--assign",
            "Tue=core-basics",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tue"));
}

#[test]
fn test_cli_create_plan_without_workouts() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "create", "--goal", "mobility", "--level", "beginner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("assign at least one workout to a day"));
}

#[test]
fn test_cli_create_plan_invalid_assignment() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args([
            "plan",
            "create",
            "--goal",
            "strength",
            "--level",
            "beginner",
            "--assign",
            "push-foundations",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DAY=WORKOUT_ID"));
}

#[test]
fn test_cli_list_and_show_plans() {
    let temp_dir = create_cli_test_environment();
    create_beginner_plan(&temp_dir, "First");
    create_beginner_plan(&temp_dir, "Second");

    let output = stride_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let listing = String::from_utf8(output).unwrap();
    let second = listing.find("## Second (ID: 2)").expect("second plan listed");
    let first = listing.find("## First (ID: 1)").expect("first plan listed");
    assert!(second < first, "newest plan should come first");

    stride_cmd(&temp_dir)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. First"))
        .stdout(predicate::str::contains("- Push Foundations (25 min, Beginner)"));
}

#[test]
fn test_cli_no_subcommand_lists_plans() {
    let temp_dir = create_cli_test_environment();
    create_beginner_plan(&temp_dir, "Default View");

    stride_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Default View (ID: 1)"));
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 999 not found"));
}

#[test]
fn test_cli_delete_plan() {
    let temp_dir = create_cli_test_environment();
    create_beginner_plan(&temp_dir, "Short Lived");

    stride_cmd(&temp_dir)
        .args(["plan", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    stride_cmd(&temp_dir)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'Short Lived' (ID: 1)"));

    stride_cmd(&temp_dir)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_wizard_session_creates_plan() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "wizard"])
        .write_stdin(
            "next\n\
             goal strength\n\
             next\n\
             level beginner\n\
             next\n\
             toggle fri\n\
             next\n\
             pick mon\n\
             add push-foundations\n\
             add wed core-basics\n\
             next\n\
             name Morning Push\n\
             confirm\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("# Create Plan (1/5) 20%"))
        .stdout(predicate::str::contains("Cannot continue: select a goal"))
        .stdout(predicate::str::contains("# Create Plan (4/5) 80%"))
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# 1. Morning Push"))
        .stdout(predicate::str::contains("- Days/week: 2x (Mon, Wed)"));

    stride_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Morning Push (ID: 1)"));
}

#[test]
fn test_cli_wizard_rejects_out_of_step_commands() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "wizard"])
        .write_stdin("level expert\nconfirm\njump\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains(
            "Finish the remaining steps before confirming",
        ))
        .stdout(predicate::str::contains("Unknown command 'jump'"))
        .stdout(predicate::str::contains("Plan wizard closed without saving"));
}

#[test]
fn test_cli_wizard_back_from_first_step_exits() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "wizard"])
        .write_stdin("goal skill\nback\ngoal endurance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan wizard closed without saving"))
        .stdout(predicate::str::contains("[x] **Endurance**").not());

    stride_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_wizard_end_of_input_discards_draft() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["plan", "wizard"])
        .write_stdin("goal strength\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Create Plan (2/5) 40%"))
        .stdout(predicate::str::contains("Plan wizard closed without saving"));
}
