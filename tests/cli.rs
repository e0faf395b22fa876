mod common;

use assert_cmd::Command;
use common::write_text_pdf;
use predicates::prelude::*;
use std::path::Path;

const CREDENTIAL_VARS: [&str; 4] = [
    "CONCUR_CLIENT_ID",
    "CONCUR_CLIENT_SECRET",
    "CONCUR_REFRESH_TOKEN",
    "CONCUR_BASE_URL",
];

fn command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pdf_expense_import").unwrap();
    cmd.current_dir(dir);
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn missing_credentials_fails_without_csv_output() {
    let dir = tempfile::tempdir().unwrap();

    command(dir.path())
        .arg("report.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--client-id"));
}

#[test]
fn csv_output_with_missing_pdf_fails() {
    let dir = tempfile::tempdir().unwrap();

    command(dir.path())
        .args(["missing.pdf", "--csv-output", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.pdf"));

    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn csv_output_writes_items() {
    let dir = tempfile::tempdir().unwrap();
    write_text_pdf(
        &dir.path().join("report.pdf"),
        &[&["01/15/2024 Staples Inc $23.50", "Total $23.50", "01/16/2024 Uber $18.20"]],
    );

    command(dir.path())
        .args(["report.pdf", "--csv-output", "out.csv"])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(
        content,
        "Date,Vendor,Amount,Description\n\
         01/15/2024,Staples Inc,23.50,\n\
         01/16/2024,Uber,18.20,\n"
    );
}
