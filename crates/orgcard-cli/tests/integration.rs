//! Integration tests for CLI commands.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

const PEOPLE_YAML: &str = "\
people:
  - uid: jordan
    nombre: Jordan
    apellido: Rivera
    title: Staff Engineer
    correo: jordan@acme.org
    ou: Platform
    jefe: kim
    direccion:
      calle: 1 Main St
      zip: 12345
    jobs:
      - role: Tech Lead
        fte: 0.8
      - title: Mentor
        fte: 0.2
        dotted: lee
  - id: kim
    givenName: Kim
    sn: Park
";

const TWO_CARDS: &str = "BEGIN:VCARD\r\nVERSION:4.0\r\nUID:a\r\nFN:Ana Diaz\r\nN:Diaz;Ana;;;\r\nEND:VCARD\r\n\r\nBEGIN:VCARD\r\nUID:b\r\nFN:Bo\r\nEND:VCARD\r\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_orgcard"))
        .args(args)
        .env_remove("ORGCARD_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_orgcard"))
        .args(args)
        .env_remove("ORGCARD_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_to_vcard_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.yaml", PEOPLE_YAML);

    let (success, stdout, _) = run_cli(&["to-vcard", &path_str(&input)]);
    assert!(success);
    let uids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("UID:"))
        .collect();
    assert_eq!(uids, vec!["jordan", "jordan-job-0", "jordan-job-1", "kim"]);
    assert!(stdout.contains("FN:Jordan Rivera\r\n"));
    assert!(stdout.contains("ADR;TYPE=work:;;1 Main St;;;12345;\r\n"));
}

#[test]
fn test_to_vcard_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "people.json",
        r#"[{"uid": "ana", "name": "Ana", "email": ["a@x.org", "b@x.org"]}]"#,
    );
    let out = dir.path().join("people.vcf");

    let (success, stdout, _) = run_cli(&["to-vcard", &path_str(&input), "-o", &path_str(&out)]);
    assert!(success);
    assert!(stdout.is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\nUID:ana\r\n"));
    assert!(written.contains("EMAIL:a@x.org\r\nEMAIL:b@x.org\r\n"));
}

#[test]
fn test_to_vcard_reports_every_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "bad.json",
        r#"{"people": [{"name": "No Id"}, {"uid": "x", "jobs": [{"fte": 1.5}]}]}"#,
    );

    let (success, stdout, stderr) = run_cli(&["to-vcard", &path_str(&input)]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("MissingRequiredField"));
    assert!(stderr.contains("people[1].jobs[0].fte"));
    assert!(stderr.contains("Error: Document has 2 validation error(s)"));
}

#[test]
fn test_to_vcard_reads_stdin_as_yaml() {
    let (success, stdout, _) = run_cli_with_stdin(&["to-vcard"], "uid: solo\nnombre: Solo\n");
    assert!(success);
    assert!(stdout.contains("UID:solo\r\n"));
    assert!(stdout.contains("N:;Solo;;;\r\n"));
}

#[test]
fn test_empty_people_key_is_an_empty_document() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "empty.yaml", "people:\n");

    let (success, stdout, stderr) = run_cli(&["to-vcard", &path_str(&input)]);
    assert!(success, "{}", stderr);
    assert!(stdout.is_empty());

    let (success, stdout, _) = run_cli(&["check", &path_str(&input)]);
    assert!(success);
    assert!(stdout.contains("OK: 0 people"));
}

#[test]
fn test_format_flag_overrides_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.txt", r#"{"uid": "j"}"#);

    let (success, stdout, _) = run_cli(&["to-vcard", &path_str(&input), "--format", "json"]);
    assert!(success);
    assert!(stdout.contains("UID:j\r\n"));
}

#[test]
fn test_from_vcard_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "cards.vcf", TWO_CARDS);

    let (success, stdout, _) = run_cli(&["from-vcard", &path_str(&input), "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({"people": [
            {"uid": "a", "name": "Ana", "surname": "Diaz"},
            {"uid": "b", "name": "Bo"}
        ]})
    );
}

#[test]
fn test_from_vcard_yaml_output() {
    let (success, stdout, _) = run_cli_with_stdin(&["from-vcard"], TWO_CARDS);
    assert!(success);
    assert!(stdout.starts_with("people:"));
    assert!(stdout.contains("uid: a"));
}

#[test]
fn test_from_vcard_strict_and_permissive() {
    let dir = TempDir::new().unwrap();
    let text = "BEGIN:VCARD\r\nUID:a\r\nEND:VCARD\r\nBEGIN:VCARD\r\nnot a content line\r\nEND:VCARD\r\n";
    let input = write_file(&dir, "broken.vcf", text);

    let (success, _, stderr) = run_cli(&["from-vcard", &path_str(&input)]);
    assert!(!success);
    assert!(stderr.contains("malformed"));

    let (success, stdout, stderr) =
        run_cli(&["from-vcard", &path_str(&input), "--permissive", "--json"]);
    assert!(success);
    assert!(stderr.contains("skipping malformed vCard record"));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["people"].as_array().unwrap().len(), 1);
}

#[test]
fn test_check_valid_document() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.yaml", PEOPLE_YAML);

    let (success, stdout, _) = run_cli(&["check", &path_str(&input)]);
    assert!(success);
    assert!(stdout.contains("OK: 2 people"));
}

#[test]
fn test_check_json_lists_errors() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "bad.yaml",
        "- uid: a\n  email:\n    work: a@x.org\n- uid: b\n  jobs:\n    - fte: -0.1\n",
    );

    let (success, stdout, _) = run_cli(&["check", &path_str(&input), "--json"]);
    assert!(!success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["valid"], false);
    let errors = parsed["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["kind"], "TypeMismatch");
    assert_eq!(errors[0]["path"], "[0].email");
    assert_eq!(errors[1]["kind"], "OutOfRangeValue");
    assert_eq!(errors[1]["path"], "[1].jobs[0].fte");
}

#[test]
fn test_check_strict_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "dupes.json", r#"[{"uid": "a"}, {"uid": "a"}]"#);

    let (success, stdout, _) = run_cli(&["check", &path_str(&input)]);
    assert!(success);
    assert!(stdout.contains("DuplicateUid"));

    let (success, _, stderr) = run_cli(&["check", &path_str(&input), "--strict"]);
    assert!(!success);
    assert!(stderr.contains("diagnostic warning"));
}

#[test]
fn test_summary_json() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.yaml", PEOPLE_YAML);

    let (success, stdout, _) = run_cli(&["summary", &path_str(&input), "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["people"], 2);
    assert_eq!(parsed["wire_records"], 4);
    assert_eq!(parsed["multi_hat"], 1);
    assert_eq!(parsed["dotted_reports"]["lee"], 1);
}

#[test]
fn test_log_level_keeps_stdout_clean() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.yaml", PEOPLE_YAML);

    let (success, stdout, stderr) =
        run_cli(&["--log-level", "debug", "to-vcard", &path_str(&input)]);
    assert!(success);
    assert!(stdout.starts_with("BEGIN:VCARD\r\n"));
    assert!(stderr.contains("expanded people into wire records"));
}

#[test]
fn test_missing_input_file() {
    let (success, _, stderr) = run_cli(&["to-vcard", "/nonexistent/people.yaml"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read /nonexistent/people.yaml"));
}
