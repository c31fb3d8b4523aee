use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{lp, seed_workbook, setup_workbook};

#[test]
fn test_init_creates_workbook() {
    let wb = setup_workbook("init");

    lp().args(["--workbook", &wb, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Workbook created"));

    assert!(std::path::Path::new(&wb).exists());

    // a second init leaves the existing workbook alone
    lp().args(["--workbook", &wb, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("leaving it untouched"));
}

#[test]
fn test_restaurants_add_and_list() {
    let wb = setup_workbook("restaurants");
    lp().args(["--workbook", &wb, "--test", "init"])
        .assert()
        .success();

    lp().args(["--workbook", &wb, "restaurants", "--add", "Sushi Go"])
        .assert()
        .success()
        .stdout(contains("Added restaurant"));

    lp().args(["--workbook", &wb, "restaurants", "--add", "Pho House"])
        .assert()
        .success();

    // duplicates are refused with a warning, not an error
    lp().args(["--workbook", &wb, "restaurants", "--add", "Sushi Go"])
        .assert()
        .success()
        .stdout(contains("already on the list"));

    lp().args(["--workbook", &wb, "restaurants"])
        .assert()
        .success()
        .stdout(contains("Sushi Go").and(contains("Pho House")));
}

#[test]
fn test_people_add_and_list() {
    let wb = setup_workbook("people");
    lp().args(["--workbook", &wb, "--test", "init"])
        .assert()
        .success();

    lp().args(["--workbook", &wb, "people", "--add", "Kim"])
        .assert()
        .success();
    lp().args(["--workbook", &wb, "people", "--add", "Lee"])
        .assert()
        .success();

    lp().args(["--workbook", &wb, "people"])
        .assert()
        .success()
        .stdout(contains("Kim").and(contains("Lee")));
}

#[test]
fn test_add_visit_and_list() {
    let wb = setup_workbook("add_visit");
    seed_workbook(&wb, &["Sushi Go", "Pho House"], &["Kim", "Lee"], &[]);

    lp().args([
        "--workbook",
        &wb,
        "add",
        "Kim",
        "Sushi Go",
        "--date",
        "2025-09-01",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded"));

    lp().args(["--workbook", &wb, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").and(contains("Kim")).and(contains("Sushi Go")));

    // person filter hides other people's visits
    lp().args(["--workbook", &wb, "add", "Lee", "Pho House", "--date", "2025-09-02"])
        .assert()
        .success();

    lp().args(["--workbook", &wb, "list", "--person", "Kim"])
        .assert()
        .success()
        .stdout(contains("Sushi Go").and(contains("Pho House").not()));
}

#[test]
fn test_add_visit_unknown_person_fails() {
    let wb = setup_workbook("unknown_person");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "add", "Park", "Sushi Go"])
        .assert()
        .failure()
        .stderr(contains("Unknown person"));
}

#[test]
fn test_add_visit_invalid_date_fails() {
    let wb = setup_workbook("bad_date");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "add", "Kim", "Sushi Go", "--date", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_recommend_pick_records_todays_visit() {
    let wb = setup_workbook("recommend_pick");
    // a single never-visited candidate forces the draw
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "recommend", "Kim", "--pick"])
        .assert()
        .success()
        .stdout(contains("Recommended: Sushi Go").and(contains("Saved!")));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    lp().args(["--workbook", &wb, "list", "--person", "Kim"])
        .assert()
        .success()
        .stdout(contains(today).and(contains("Sushi Go")));
}

#[test]
fn test_recommend_without_pick_records_nothing() {
    let wb = setup_workbook("recommend_dry");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "recommend", "Kim"])
        .assert()
        .success()
        .stdout(contains("Recommended: Sushi Go").and(contains("--pick")));

    lp().args(["--workbook", &wb, "list"])
        .assert()
        .success()
        .stdout(contains("No visits recorded yet."));
}

#[test]
fn test_recommend_prefers_never_visited() {
    let wb = setup_workbook("recommend_never");
    // Kim has been to Sushi Go; Pho House is the only never-visited spot
    seed_workbook(
        &wb,
        &["Sushi Go", "Pho House"],
        &["Kim"],
        &[("2025-01-01", "Kim", "Sushi Go")],
    );

    lp().args(["--workbook", &wb, "recommend", "Kim", "--pick"])
        .assert()
        .success()
        .stdout(contains("Recommended: Pho House"));
}

#[test]
fn test_recommend_with_exhausted_pool_warns() {
    let wb = setup_workbook("recommend_empty");
    // the only restaurant is also the most recent visit: nothing to offer
    seed_workbook(
        &wb,
        &["Sushi Go"],
        &["Kim"],
        &[("2025-01-01", "Kim", "Sushi Go")],
    );

    lp().args(["--workbook", &wb, "recommend", "Kim", "--pick"])
        .assert()
        .success()
        .stdout(contains("No restaurants left to recommend."));
}

#[test]
fn test_recommend_unknown_person_warns() {
    let wb = setup_workbook("recommend_unknown");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "recommend", "Park", "--pick"])
        .assert()
        .success()
        .stdout(contains("Unknown person"));
}

#[test]
fn test_recommend_without_person_warns_when_not_a_terminal() {
    let wb = setup_workbook("recommend_nobody");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "recommend"])
        .assert()
        .success()
        .stdout(contains("Please select a person."));
}

#[test]
fn test_export_visits_csv() {
    let wb = setup_workbook("export_csv");
    let out = common::temp_out("export_csv", "csv");
    seed_workbook(
        &wb,
        &["Sushi Go"],
        &["Kim"],
        &[("2025-09-01", "Kim", "Sushi Go")],
    );

    lp().args(["--workbook", &wb, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("date,person,restaurant"));
    assert!(content.contains("2025-09-01,Kim,Sushi Go"));
}

#[test]
fn test_export_reviews_json() {
    let wb = setup_workbook("export_json");
    let out = common::temp_out("export_json", "json");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);
    common::seed_reviews(&wb, &[("Sushi Go", "2025-09-01 12:00:00", "fresh")]);

    lp().args([
        "--workbook",
        &wb,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--reviews",
        "--force",
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"restaurant\": \"Sushi Go\""));
    assert!(content.contains("\"review\": \"fresh\""));
}

#[test]
fn test_backup_copies_workbook() {
    let wb = setup_workbook("backup");
    let out = common::temp_out("backup", "xlsx");
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_leaves_only_zip() {
    let wb = setup_workbook("backup_zip");
    let out = common::temp_out("backup_zip", "xlsx");
    let zip = out.replace(".xlsx", ".zip");
    std::fs::remove_file(&zip).ok();
    seed_workbook(&wb, &["Sushi Go"], &["Kim"], &[]);

    lp().args(["--workbook", &wb, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed backup"));

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
}
