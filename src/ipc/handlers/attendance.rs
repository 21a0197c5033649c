use crate::filter::{key_from_params, Filter};
use crate::ipc::error::{reply, HandlerErr};
use crate::ipc::helpers::{date_json, get_required_enum, get_required_str};
use crate::ipc::types::{AppState, Request};
use crate::model::{AttendanceStatus, Student};
use crate::session::Role;
use crate::stats::attendance_summary;
use chrono::NaiveDate;
use serde_json::json;

fn roster_json(s: &Student) -> serde_json::Value {
    json!({
        "id": s.id,
        "name": s.name,
        "rollNumber": s.roll_number,
        "classId": s.class_id,
        "status": s.status.as_str(),
    })
}

fn roster_date(state: &AppState, params: &serde_json::Value) -> Result<NaiveDate, HandlerErr> {
    match key_from_params(params, "date").filter(|d| !d.trim().is_empty()) {
        None => Ok(state.config.today),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| HandlerErr::bad_params("date must be YYYY-MM-DD")),
    }
}

fn attendance_list(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let date = roster_date(state, params)?;
    let filter = Filter::default()
        .with_class(key_from_params(params, "classId"))
        .with_search(key_from_params(params, "search"));

    let students: Vec<serde_json::Value> = state
        .store
        .students
        .query(&filter)
        .into_iter()
        .map(roster_json)
        .collect();
    Ok(json!({
        "date": date_json(date),
        "classId": filter.class_id,
        "search": key_from_params(params, "search"),
        "students": students,
    }))
}

fn attendance_mark(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let student_id = get_required_str(params, "studentId")?;
    let status = get_required_enum(
        params,
        "status",
        AttendanceStatus::parse,
        &["present", "absent", "late"],
    )?;

    let updated = state
        .store
        .students
        .update(&student_id, |s| s.status = status)
        .ok_or_else(|| HandlerErr::not_found("student", &student_id))?;
    log::info!(
        "attendance: {} ({}) marked {}",
        updated.name,
        updated.id,
        status.as_str()
    );
    Ok(json!({
        "student": roster_json(updated),
        "notice": format!("{} marked {}", updated.name, status.as_str()),
    }))
}

fn attendance_history(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Parent)?;
    let records = &state.store.child_attendance;
    let summary = attendance_summary(records);
    let records_json: Vec<serde_json::Value> = records
        .iter()
        .map(|r| json!({ "date": date_json(r.date), "status": r.status.as_str() }))
        .collect();
    Ok(json!({
        "studentName": state.store.child.name,
        "records": records_json,
        "summary": {
            "totalDays": summary.total,
            "presentDays": summary.present,
            "lateDays": summary.late,
            "absentDays": summary.absent,
            "percentage": summary.percentage,
            "lowAttendance": summary.low_attendance,
        },
    }))
}

fn handle_attendance_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, attendance_list(state, &req.params))
}

fn handle_attendance_mark(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, attendance_mark(state, &req.params))
}

fn handle_attendance_history(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, attendance_history(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.list" => Some(handle_attendance_list(state, req)),
        "attendance.mark" => Some(handle_attendance_mark(state, req)),
        "attendance.history" => Some(handle_attendance_history(state, req)),
        _ => None,
    }
}
