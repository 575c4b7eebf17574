use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn nestora(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nestora").unwrap();
    cmd.env("NESTORA_CLI_SCRIPT", "1")
        .env("NESTORA_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_runs_rent_roll_flow() {
    let home = TempDir::new().unwrap();
    let input = "\
property add \"Maple Court\" 12 Maple Ave
unit add 1 1A 2 1.5 850
lease create 1 1 \"Alice Smith\" alice@example.com 555-0100 2024-01-01 2024-12-31 1000 1000
payment record 1 1 1 2024-01 1000
payment record 1 1 1 2024-02 400 first half
rent-roll
exit
";

    nestora(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Property: Maple Court | Unit: 1A | Tenant: Alice Smith"))
        .stdout(contains("Total Rent Expected: $2000.00"))
        .stdout(contains("Total Rent Collected: $1400.00"))
        .stdout(contains("Total Outstanding: $600.00"));

    let json = std::fs::read_to_string(home.path().join("data.json")).unwrap();
    assert!(json.contains("\"Alice Smith\""));
    assert!(json.contains("\"first half\""));
}

#[test]
fn script_mode_reloads_previous_session() {
    let home = TempDir::new().unwrap();
    nestora(&home)
        .write_stdin("property add Birch 7 Birch Rd\nexit\n")
        .assert()
        .success();

    nestora(&home)
        .write_stdin("property list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Loaded 1 property"))
        .stdout(contains("Birch"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = TempDir::new().unwrap();
    nestora(&home)
        .write_stdin("rent-rol\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `rent-rol`"))
        .stdout(contains("Did you mean `rent-roll`?"));
}

#[test]
fn rent_roll_without_properties_prompts_to_add_one() {
    let home = TempDir::new().unwrap();
    nestora(&home)
        .write_stdin("rent-roll\nexit\n")
        .assert()
        .success()
        .stdout(contains("No properties available. Please add a property first."));
}
