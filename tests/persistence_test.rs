#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

fn run(db_path: &std::path::Path, args: &[&str]) -> String {
    let output = Command::new(cargo_bin!("payables"))
        .arg("--db-path")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run: create two obligations
    run(
        &db_path,
        &["create", "--name", "Rent", "--date", "2024-01-01", "--amount", "100"],
    );
    run(
        &db_path,
        &["create", "--name", "Water", "--date", "2024-01-02", "--amount", "20"],
    );

    // 2. Second run: settle the first one
    let paid = run(&db_path, &["pay", "110"]);
    assert!(paid.contains("1,Rent,2024-01-01,100,PAID"));

    // 3. Third run: state and id sequence survived
    let created = run(
        &db_path,
        &["create", "--name", "Gas", "--date", "2024-01-03", "--amount", "5"],
    );
    assert!(created.contains("3,Gas,2024-01-03,5,PENDING"));

    let listed = run(&db_path, &["list"]);
    assert!(listed.contains("1,Rent,2024-01-01,100,PAID"));
    assert!(listed.contains("2,Water,2024-01-02,20,PENDING"));
}
