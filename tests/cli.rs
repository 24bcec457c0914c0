use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn farmdesk(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("farmdesk").unwrap();
    cmd.env("FARMDESK_HOME", home.path())
        .env_remove("FARMDESK_LOG")
        .arg("--no-color");
    cmd
}

const FULL_ADD: &[&str] = &[
    "add",
    "--name",
    "Eve Evans",
    "--email",
    "eve@example.com",
    "--phone",
    "123-456-7894",
    "--aadhaar",
    "5555 5555 5555",
    "--address",
    "12 Orchard Rd",
    "--dob",
    "1990-04-21",
];

#[test]
fn test_naked_run_shows_dashboard() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Farmers  4"))
        .stdout(predicate::str::contains("Sarah Wilson"))
        .stdout(predicate::str::contains("Mike Johnson"))
        .stdout(predicate::str::contains("John Doe").not());
}

#[test]
fn test_list_by_status() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["list", "--status", "premium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Mike Johnson"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn test_list_search_is_case_insensitive() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["ls", "--search", "SMITH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("John Doe").not());
}

#[test]
fn test_list_json() {
    let home = tempfile::tempdir().unwrap();
    let output = farmdesk(&home).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let farmers = parsed.as_array().unwrap();
    assert_eq!(farmers.len(), 4);
    assert_eq!(farmers[0]["name"], "John Doe");
    assert_eq!(farmers[0]["initials"], "JD");
    assert_eq!(farmers[1]["status"], "Regular");
}

#[test]
fn test_show_prints_every_field() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1111 1111 1111"))
        .stdout(predicate::str::contains("123 Farm Lane"))
        .stdout(predicate::str::contains("Interested in organic farming techniques."));
}

#[test]
fn test_add_reports_success() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(FULL_ADD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Farmer added successfully!"));
}

#[test]
fn test_add_with_missing_fields_fails() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["add", "--name", "Eve Evans"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Please fill all required fields (phone, aadhaar, address, email, dob)",
        ));
}

#[test]
fn test_edit_keeps_untouched_fields() {
    let home = tempfile::tempdir().unwrap();
    let output = farmdesk(&home)
        .args(["edit", "2", "--status", "premium", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["id"], "2");
    assert_eq!(parsed[0]["status"], "Premium");
    assert_eq!(parsed[0]["email"], "jane@example.com");
    assert_eq!(parsed[0]["lastActive"], "2024-09-08");
}

#[test]
fn test_delete_unknown_id() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["delete", "9", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Farmer not found: 9"));
}

#[test]
fn test_delete_declined_keeps_record() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete this farmer?"))
        .stdout(predicate::str::contains("Delete cancelled."))
        .stdout(predicate::str::contains("Farmer deleted.").not());
}

#[test]
fn test_config_changes_recent_count() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["config", "recent-count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-count set to 2"));

    let output = farmdesk(&home).args(["dashboard", "--json"]).output().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total"], 4);
    assert_eq!(parsed["recent"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_rejects_bad_values() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["config", "recent-count", "0"])
        .assert()
        .failure();
    farmdesk(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_empty_store_without_seed() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .args(["config", "seed-mock-data", "false"])
        .assert()
        .success();

    farmdesk(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No farmers found."));
}

#[test]
fn test_shell_session_shares_one_store() {
    let home = tempfile::tempdir().unwrap();
    let session = "\
add --name \"Eve Evans\" --email eve@example.com --phone 555 --aadhaar '5555 5555 5555' --address 'Lane 5' --dob 1990-01-01
list --status regular
delete 1 --yes
exit
";
    farmdesk(&home)
        .arg("shell")
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Farmer added successfully!"))
        .stdout(predicate::str::contains("(5 farmers)"))
        .stdout(predicate::str::contains("Eve Evans"))
        .stdout(predicate::str::contains("Farmer deleted."))
        .stdout(predicate::str::contains("(4 farmers)"));
}

#[test]
fn test_shell_recovers_from_validation_errors() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .arg("shell")
        .write_stdin("add --name Eve\nlist --status gold\nlist --search eve\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Please fill all required fields (phone, aadhaar, address, email, dob)",
        ))
        .stdout(predicate::str::contains("No farmers found."));
}

#[test]
fn test_shell_rejects_per_line_verbose() {
    let home = tempfile::tempdir().unwrap();
    farmdesk(&home)
        .arg("shell")
        .write_stdin("list -v\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("--verbose applies to the whole session"))
        .stdout(predicate::str::contains("John Doe").not());
}
