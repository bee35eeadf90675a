mod common;
use common::{init_db, init_db_with_data, rwl, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rwl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported csv");
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));

    let content = String::from_utf8(bytes).unwrap();
    assert!(content.contains("\"2025-09-01\",\"עבודה רגילה\",\"HQ\",\"ACME\",\"09:00\",\"17:00\"\r\n"));
    assert!(content.contains("\"חופשה\""));
    assert!(content.contains("\"2025-10-02\""));
    assert_eq!(content.matches("\r\n").count(), 4);
}

#[test]
fn test_export_json_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    rwl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["start-time"], "09:00");
    assert!(!content.contains("2025-10-02"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rwl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure();
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_existing");
    init_db_with_data(&db_path);

    let out = temp_out("export_existing", "csv");
    fs::write(&out, "old").unwrap();

    rwl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rwl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rwl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();
    assert!(!std::path::Path::new(&out).exists());
}
