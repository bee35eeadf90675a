use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, day_json, init_db, rwl, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");
    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_month() {
    let db_path = setup_test_db("add_list_month");
    init_db(&db_path);

    add_entry(&db_path, "2025-06-02", "work", "08:00", "12:30");
    add_entry(&db_path, "2025-06-02", "work", "13:00", "17:00");
    add_entry(&db_path, "2025-06-03", "vacation", "08:00", "16:00");

    rwl()
        .args(["--db", &db_path, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains("8.5"))
        .stdout(contains("Total hours: 8.5"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_end_before_start");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "add", "2025-06-02", "--type", "work", "--start", "10:00",
            "--end", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("must be after start time"));
}

#[test]
fn test_add_sick_requires_attachment() {
    let db_path = setup_test_db("add_sick_attachment");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "add", "2025-06-02", "--type", "child_sick", "--start", "08:00",
            "--end", "16:00",
        ])
        .assert()
        .failure()
        .stderr(contains("supporting document"));

    rwl()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-06-02",
            "--type",
            "child_sick",
            "--start",
            "08:00",
            "--end",
            "16:00",
            "--attachment",
            "note.pdf",
        ])
        .assert()
        .success();
}

#[test]
fn test_add_rejects_unknown_type() {
    let db_path = setup_test_db("add_unknown_type");
    init_db(&db_path);

    rwl()
        .args([
            "--db", &db_path, "add", "2025-06-02", "--type", "xyz", "--start", "08:00", "--end",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid entry type"));
}

#[test]
fn test_day_json_lanes() {
    let db_path = setup_test_db("day_json_lanes");
    init_db(&db_path);

    add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");
    add_entry(&db_path, "2025-03-10", "study", "08:30", "10:00");
    add_entry(&db_path, "2025-03-10", "work", "09:30", "09:45");
    add_entry(&db_path, "2025-03-11", "work", "08:00", "09:00");

    let day = day_json(&db_path, "2025-03-10");
    assert_eq!(day["lane_count"], 3);

    let blocks = day["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    for (i, b) in blocks.iter().enumerate() {
        assert_eq!(b["lane"], i);
        assert!((b["width"].as_f64().unwrap() - 0.3).abs() < 1e-9);
    }
    assert_eq!(blocks[1]["entry"]["type"], "study");
    assert_eq!(blocks[1]["label"], "ימי השתלמות");
}

#[test]
fn test_day_text_view() {
    let db_path = setup_test_db("day_text_view");
    init_db(&db_path);

    add_entry(&db_path, "2025-03-10", "work", "08:00", "12:00");
    add_entry(&db_path, "2025-03-10", "vacation", "13:00", "14:00");

    rwl()
        .args(["--db", &db_path, "day", "2025-03-10", "--plain"])
        .assert()
        .success()
        .stdout(contains("2025-03-10"))
        .stdout(contains("עבודה רגילה"))
        .stdout(contains("חופשה 13:00 - 14:00"))
        .stdout(contains("08:00 |"));
}

#[test]
fn test_day_empty() {
    let db_path = setup_test_db("day_empty");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "day", "2025-03-10", "--plain"])
        .assert()
        .success()
        .stdout(contains("No entries for 2025-03-10"));

    let day = day_json(&db_path, "2025-03-10");
    assert_eq!(day["lane_count"], 0);
    assert!(day["blocks"].as_array().unwrap().is_empty());
}

#[test]
fn test_edit_entry() {
    let db_path = setup_test_db("edit_entry");
    init_db(&db_path);

    let id = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");

    rwl()
        .args(["--db", &db_path, "edit", &id, "--end", "11:00", "--client", "Globex"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let day = day_json(&db_path, "2025-03-10");
    let entry = &day["blocks"][0]["entry"];
    assert_eq!(entry["end-time"], "11:00");
    assert_eq!(entry["client"], "Globex");

    // merged result must still be valid
    rwl()
        .args(["--db", &db_path, "edit", &id, "--start", "12:00"])
        .assert()
        .failure()
        .stderr(contains("must be after start time"));
}

#[test]
fn test_edit_moves_entry_to_another_day() {
    let db_path = setup_test_db("edit_moves_day");
    init_db(&db_path);

    let id = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");

    rwl()
        .args(["--db", &db_path, "edit", &id, "--date", "2025-03-12"])
        .assert()
        .success();

    assert!(day_json(&db_path, "2025-03-10")["blocks"].as_array().unwrap().is_empty());
    assert_eq!(day_json(&db_path, "2025-03-12")["blocks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_edit_stores_normalized_date_and_times() {
    let db_path = setup_test_db("edit_normalized");
    init_db(&db_path);

    let id = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");

    rwl()
        .args([
            "--db", &db_path, "edit", &id, "--date", "2025-3-12", "--start", " 7:05", "--end",
            "9:30",
        ])
        .assert()
        .success();

    let day = day_json(&db_path, "2025-03-12");
    let entry = &day["blocks"][0]["entry"];
    assert_eq!(entry["date"], "2025-03-12");
    assert_eq!(entry["start-time"], "07:05");
    assert_eq!(entry["end-time"], "09:30");
}

#[test]
fn test_del_entry() {
    let db_path = setup_test_db("del_entry");
    init_db(&db_path);

    let keep = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");
    let gone = add_entry(&db_path, "2025-03-10", "work", "10:00", "11:00");

    rwl()
        .args(["--db", &db_path, "del", &gone, "--force"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let day = day_json(&db_path, "2025-03-10");
    let blocks = day["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["entry"]["id"], keep.as_str());

    rwl()
        .args(["--db", &db_path, "del", &gone, "--force"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn test_del_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("del_cancelled");
    init_db(&db_path);

    let id = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");

    rwl()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(day_json(&db_path, "2025-03-10")["blocks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db(&db_path);

    let id = add_entry(&db_path, "2025-03-10", "work", "08:00", "09:00");
    rwl()
        .args(["--db", &db_path, "del", &id, "--force"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add").and(contains(id.as_str())))
        .stdout(contains("del"));
}
