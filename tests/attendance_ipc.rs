use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_schooldeskd");
    let mut child = Command::new(exe)
        .env("SCHOOLDESK_TODAY", "2024-01-15")
        .env("SCHOOLDESK_IDS", "counter")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn schooldeskd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn error_code(value: &serde_json::Value) -> Option<&str> {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
}

fn login(stdin: &mut ChildStdin, reader: &mut BufReader<ChildStdout>, role: &str) {
    let session = request_ok(
        stdin,
        reader,
        "login",
        "session.login",
        json!({ "role": role, "username": "demo", "password": "demo" }),
    );
    assert_eq!(session["role"], json!(role));
}

fn names(rows: &serde_json::Value) -> Vec<String> {
    rows.as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter_map(|r| r.get("name").and_then(|v| v.as_str()).map(|s| s.to_string()))
        .collect()
}

#[test]
fn search_amit_returns_exactly_one_student() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "admin");

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "attendance.list",
        json!({ "search": "Amit" }),
    );
    let students = res["students"].as_array().cloned().unwrap_or_default();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], json!("Amit Kumar"));
    assert_eq!(students[0]["rollNumber"], json!("25"));
    assert_eq!(students[0]["status"], json!("absent"));
}

#[test]
fn unset_filters_return_full_roster_in_seed_order() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "admin");

    let res = request_ok(&mut stdin, &mut reader, "1", "attendance.list", json!({}));
    assert_eq!(
        names(&res["students"]),
        vec![
            "Rahul Sharma",
            "Priya Patel",
            "Amit Kumar",
            "Sneha Singh",
            "Arjun Reddy"
        ]
    );
    assert_eq!(res["date"], json!("2024-01-15"));

    let blank = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.list",
        json!({ "classId": "", "search": "" }),
    );
    assert_eq!(blank["students"], res["students"]);
}

#[test]
fn class_and_search_filters_combine() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "admin");

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "attendance.list",
        json!({ "classId": "5B", "date": "2024-01-12" }),
    );
    assert_eq!(names(&res["students"]), vec!["Sneha Singh", "Arjun Reddy"]);
    assert_eq!(res["date"], json!("2024-01-12"));

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.list",
        json!({ "classId": "5A", "search": "2" }),
    );
    assert_eq!(
        names(&res["students"]),
        vec!["Rahul Sharma", "Priya Patel", "Amit Kumar"]
    );

    let res = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "attendance.list",
        json!({ "classId": "1A" }),
    );
    assert!(names(&res["students"]).is_empty());

    let resp = request(
        &mut stdin,
        &mut reader,
        "4",
        "attendance.list",
        json!({ "date": "12/01/2024" }),
    );
    assert_eq!(error_code(&resp), Some("bad_params"));
}

#[test]
fn marking_changes_only_the_target_student() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "admin");

    let before = request_ok(&mut stdin, &mut reader, "1", "attendance.list", json!({}));
    let marked = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.mark",
        json!({ "studentId": "3", "status": "late" }),
    );
    assert_eq!(marked["student"]["status"], json!("late"));
    assert_eq!(marked["notice"], json!("Amit Kumar marked late"));

    let after = request_ok(&mut stdin, &mut reader, "3", "attendance.list", json!({}));
    let before_rows = before["students"].as_array().cloned().unwrap_or_default();
    let after_rows = after["students"].as_array().cloned().unwrap_or_default();
    assert_eq!(before_rows.len(), after_rows.len());
    for (b, a) in before_rows.iter().zip(after_rows.iter()) {
        if b["id"] == json!("3") {
            assert_eq!(a["status"], json!("late"));
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn marking_rejects_unknown_student_and_status() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "admin");

    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "attendance.mark",
        json!({ "studentId": "99", "status": "present" }),
    );
    assert_eq!(error_code(&resp), Some("not_found"));

    let resp = request(
        &mut stdin,
        &mut reader,
        "2",
        "attendance.mark",
        json!({ "studentId": "1", "status": "excused" }),
    );
    assert_eq!(error_code(&resp), Some("bad_params"));
}

#[test]
fn parent_history_summarises_child_attendance() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    login(&mut stdin, &mut reader, "parent");

    let res = request_ok(&mut stdin, &mut reader, "1", "attendance.history", json!({}));
    assert_eq!(res["studentName"], json!("Rahul Sharma"));
    assert_eq!(res["records"].as_array().map(|a| a.len()), Some(8));
    assert_eq!(res["records"][0], json!({ "date": "2024-01-15", "status": "present" }));
    assert_eq!(res["summary"]["presentDays"], json!(6));
    assert_eq!(res["summary"]["lateDays"], json!(1));
    assert_eq!(res["summary"]["absentDays"], json!(1));
    assert_eq!(res["summary"]["percentage"], json!(88));
    assert_eq!(res["summary"]["lowAttendance"], json!(false));
}

#[test]
fn classes_list_is_available_without_login() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let res = request_ok(&mut stdin, &mut reader, "1", "classes.list", json!({}));
    let classes = res["classes"].as_array().cloned().unwrap_or_default();
    assert_eq!(classes.len(), 10);
    assert_eq!(classes[0], json!("1A"));
    assert_eq!(classes[9], json!("5B"));
}
