use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{APRIL_30, DEAD_API, MARCH_1, MARCH_10, StubApi, rmi, temp_out};

const ONE_RECORD: &str = r#"[{"date":1710028800,"hours":8,"miles":60}]"#;

#[test]
fn test_list_fetches_the_two_month_window() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);

    rmi("list_window")
        .args(["--api", &api.url, "--utc-offset", "+02:00", "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("2024-03-10"))
        .stdout(contains("8.00"))
        .stdout(contains("60.00"));

    let reqs = api.requests();
    assert_eq!(reqs.len(), 1);
    assert!(
        reqs[0].starts_with(&format!("GET /?from={}&to={} ", MARCH_1, APRIL_30)),
        "unexpected request: {}",
        reqs[0]
    );
}

#[test]
fn test_window_is_the_same_in_a_negative_offset() {
    let api = StubApi::start(vec![(200, "[]")]);

    rmi("list_negative")
        .args(["--api", &api.url, "--utc-offset", "-07:00", "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("No records"));

    assert!(api.requests()[0].starts_with(&format!("GET /?from={}&to={} ", MARCH_1, APRIL_30)));
}

#[test]
fn test_set_posts_then_refreshes() {
    let api = StubApi::start(vec![(200, "[]"), (200, ""), (200, ONE_RECORD)]);

    rmi("set_post")
        .args([
            "--api", &api.url, "--utc-offset", "-05:00", "set", "2024-03-10", "--hours", "8",
            "--miles", "60",
        ])
        .assert()
        .success()
        .stdout(contains("Saved 2024-03-10: 8.00 h, 60.00 mi"));

    let reqs = api.requests();
    assert_eq!(reqs.len(), 3);
    assert!(reqs[0].starts_with("GET /?from="));
    assert!(reqs[1].starts_with("POST / "));
    assert!(reqs[1].contains(&format!("\"date\":{}", MARCH_10)));
    assert!(reqs[1].contains("\"hours\":8.0"));
    assert!(reqs[1].contains("\"miles\":60.0"));
    assert!(reqs[2].starts_with("GET /?from="));
}

#[test]
fn test_set_zero_zero_deletes() {
    let api = StubApi::start(vec![(200, ONE_RECORD), (200, ""), (200, "[]")]);

    rmi("set_delete")
        .args([
            "--api", &api.url, "--utc-offset", "UTC", "set", "2024-03-10", "--hours", "0",
            "--miles", "0",
        ])
        .assert()
        .success()
        .stdout(contains("Removed the record for 2024-03-10"));

    let reqs = api.requests();
    assert_eq!(reqs.len(), 3);
    assert!(reqs[1].starts_with(&format!("DELETE /?date={} ", MARCH_10)));
    assert!(!reqs.iter().any(|r| r.starts_with("POST")));
}

#[test]
fn test_set_rejects_bad_numbers_before_any_request() {
    rmi("set_invalid")
        .args(["--api", DEAD_API, "set", "2024-03-10", "--hours", "eight", "--miles", "60"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"))
        .stderr(contains("Network").not());

    rmi("set_empty")
        .args(["--api", DEAD_API, "set", "2024-03-10", "--hours", "", "--miles", "60"])
        .assert()
        .failure()
        .stderr(contains("hours is required"));

    rmi("set_negative")
        .args(["--api", DEAD_API, "set", "2024-03-10", "--hours", "-1", "--miles", "0"])
        .assert()
        .failure()
        .stderr(contains("zero or positive"));
}

#[test]
fn test_unreachable_api_is_a_network_error() {
    rmi("dead_api")
        .args(["--api", DEAD_API, "list", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Network error"));
}

#[test]
fn test_server_error_is_reported() {
    let api = StubApi::start(vec![(500, "boom")]);

    rmi("server_500")
        .args(["--api", &api.url, "list", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Server error (500)"))
        .stderr(contains("boom"));
}

#[test]
fn test_malformed_payload_is_rejected() {
    let api = StubApi::start(vec![(200, r#"[{"date":1710021600,"hours":1,"miles":1}]"#)]);

    rmi("malformed")
        .args(["--api", &api.url, "list", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Malformed response"));
}

#[test]
fn test_show_plain_marks_both_and_selection() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);

    rmi("show_plain")
        .args([
            "--api", &api.url, "--utc-offset", "+09:00", "show", "--month", "2024-03",
            "--select", "2024-03-10", "--plain",
        ])
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("April 2024"))
        .stdout(contains("[10*]"))
        .stdout(contains("2024-03-10  hours: 8.00  miles: 60.00"));
}

#[test]
fn test_get_without_record() {
    let api = StubApi::start(vec![(200, "[]")]);

    rmi("get_empty")
        .args(["--api", &api.url, "get", "2024-03-11"])
        .assert()
        .success()
        .stdout(contains("No hours or miles logged for 2024-03-11"));
}

#[test]
fn test_clear_without_record_sends_nothing_else() {
    let api = StubApi::start(vec![(200, "[]")]);

    rmi("clear_empty")
        .args(["--api", &api.url, "clear", "2024-03-10", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to clear"));

    assert_eq!(api.requests().len(), 1);
}

#[test]
fn test_export_csv() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);
    let out = temp_out("export_csv", "csv");

    rmi("export_csv")
        .args([
            "--api", &api.url, "export", "--month", "2024-03", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.starts_with("date,timestamp,hours,miles"));
    assert!(content.contains("2024-03-10,1710028800,8,60"));
}

#[test]
fn test_export_json() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);
    let out = temp_out("export_json", "json");

    rmi("export_json")
        .args([
            "--api", &api.url, "export", "--month", "2024-03", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("export file")).expect("json");
    assert_eq!(v.as_array().map(|a| a.len()), Some(1));
    assert_eq!(v[0]["date"], "2024-03-10");
    assert_eq!(v[0]["timestamp"], MARCH_10);
    assert_eq!(v[0]["hours"], 8.0);
    assert_eq!(v[0]["miles"], 60.0);
}

#[test]
fn test_export_keeps_existing_file_when_declined() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);
    let out = temp_out("export_guard", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rmi("export_guard")
        .args(["--api", &api.url, "export", "--month", "2024-03", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("already exists"))
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("export file"), "keep me");
}

#[test]
fn test_edit_prefills_keeps_empty_input_and_retries() {
    let api = StubApi::start(vec![
        (200, ONE_RECORD),
        (200, ""),
        (200, r#"[{"date":1710028800,"hours":8,"miles":50}]"#),
    ]);

    rmi("edit_retry")
        .args(["--api", &api.url, "--utc-offset", "+01:00", "edit", "2024-03-10"])
        .write_stdin("\nabc\n\n50\n")
        .assert()
        .success()
        .stdout(contains("Hours [8.00]: "))
        .stdout(contains("Miles [60.00]: "))
        .stdout(contains("Saved 2024-03-10: 8.00 h, 50.00 mi"))
        .stderr(contains("miles must be a number, got 'abc'"));

    let reqs = api.requests();
    assert_eq!(reqs.len(), 3);
    assert!(reqs[1].starts_with("POST / "));
    assert!(reqs[1].contains(&format!("\"date\":{}", MARCH_10)));
    assert!(reqs[1].contains("\"hours\":8.0"));
    assert!(reqs[1].contains("\"miles\":50.0"));
}

#[test]
fn test_clear_with_record_sends_delete() {
    let api = StubApi::start(vec![(200, ONE_RECORD), (200, ""), (200, "[]")]);

    rmi("clear_record")
        .args(["--api", &api.url, "clear", "2024-03-10", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed the record for 2024-03-10"));

    let reqs = api.requests();
    assert_eq!(reqs.len(), 3);
    assert!(reqs[1].starts_with(&format!("DELETE /?date={} ", MARCH_10)));
    assert!(reqs[2].starts_with("GET /?from="));
}

#[test]
fn test_show_without_plain_honours_no_color() {
    let api = StubApi::start(vec![(200, ONE_RECORD)]);

    rmi("show_no_color")
        .args(["--api", &api.url, "show", "--month", "2024-03", "--select", "2024-03-10"])
        .assert()
        .success()
        .stdout(contains("[10*]"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_list_zero_amount_is_plain_without_color() {
    let api = StubApi::start(vec![(200, r#"[{"date":1710028800,"hours":0,"miles":12}]"#)]);

    rmi("list_no_color")
        .args(["--api", &api.url, "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("0.00"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_invalid_month_and_date() {
    rmi("bad_month")
        .args(["--api", DEAD_API, "list", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    rmi("bad_date")
        .args(["--api", DEAD_API, "get", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rmi("bad_offset")
        .args(["--api", DEAD_API, "--utc-offset", "CET", "list", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid UTC offset"));
}

#[test]
fn test_config_check_reports_missing_api_url() {
    let mut cmd = rmi("config_check");
    let dir = std::env::temp_dir().join("rmileage_home_config_check").join(".rmileage");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(dir.join("rmileage.conf"), "decimals: 2\n").expect("config file");

    cmd.args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'api_url'"));
}

#[test]
fn test_init_and_config_print() {
    rmi("init_test")
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("rmileage.conf"));

    rmi("config_print")
        .args(["--api", "http://example.test/", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("api_url: http://example.test/"));
}
