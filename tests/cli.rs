use assert_cmd::Command;
use std::process::Output;

#[test]
fn missing_file_arg() {
    let mut cmd = Command::cargo_bin("transfers").unwrap();
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn missing_file() {
    let output = run(&[&fixture("this_file_does_not_exist.csv")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("File not found"));
}

#[test]
fn print_all() {
    let output = run(&[&fixture("simple.csv")]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2021-05-03  -15.50 Grocery\n");
}

#[test]
fn paid_groceries() {
    let output = run(&[&fixture("swedbank.csv"), "--paid", "-m", "Grocery"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expect(&[
        "2021-05-03  -15.50 Grocery MAXIMA",
        "2021-05-07   -8.35 Grocery RIMI",
    ]));
}

#[test]
fn received_within() {
    let output = run(&[&fixture("swedbank.csv"), "--received", "--within", "2021-05-02", "2021-05-31"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expect(&["2021-05-04 1200.00 Salary for April"]));
}

#[test]
fn excluding_and_regex() {
    let output = run(&[&fixture("swedbank.csv"), "--paid", "-x", "Grocery", "-r", "^(Rent|Card)"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expect(&[
        "2021-05-10 -450.00 Rent (May)",
        "2021-05-12   -1.20 Card fee",
    ]));
}

#[test]
fn nothing_matches() {
    let output = run(&[&fixture("swedbank.csv"), "-m", "Casino"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "");
}

#[test]
fn invalid_within_bound() {
    let output = run(&[&fixture("swedbank.csv"), "--within", "2021-05-01", "later"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("parse error"));
}

#[test]
fn missing_column() {
    let output = run(&[&fixture("missing_type.csv")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("format error"));
}

#[test]
fn with_config() {
    let output = run(&[&fixture("semicolon.csv"), "--config", &fixture("semicolon.toml")]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expect(&[
        "2021-05-03  -15.50 Grocery",
        "2021-05-04 +1200.00 Salary",
    ]));
}

#[test]
fn within_in_file_date_format() {
    let output = run(&[&fixture("month_first.csv"), "--config", &fixture("month_first.toml"), "--within", "05/03/2021", "05/03/2021"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expect(&["2021-05-03  -15.50 Grocery"]));
}

#[test]
fn mistyped_config_path_warns() {
    let file = fixture("simple.csv");
    let config = fixture("simple.tom");
    let mut cmd = Command::cargo_bin("transfers").unwrap();
    let output = cmd.args([file.as_str(), "--config", config.as_str()])
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("not found, using defaults"), "{}", stderr);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2021-05-03  -15.50 Grocery\n");
}

#[test]
fn table_output() {
    let output = run(&[&fixture("simple.csv"), "--table"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Reason"));
    assert!(stdout.contains("Grocery"));
}

fn run(args: &[&str]) -> Output {
    let mut cmd = Command::cargo_bin("transfers").unwrap();
    cmd.args(args).env("RUST_LOG", "off").output().unwrap()
}

fn fixture(filename: &str) -> String {
    format!("{}/fixture/{}", env!("CARGO_MANIFEST_DIR"), filename)
}

fn expect(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
