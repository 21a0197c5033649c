use crate::ipc::error::{ok, reply, HandlerErr};
use crate::ipc::helpers::date_json;
use crate::ipc::types::{AppState, Request};
use crate::session::{Role, Section};
use crate::stats::{attendance_summary, days_until};
use serde_json::json;

fn admin_overview() -> serde_json::Value {
    // Headline figures are fixed demo numbers, not derived from the rosters.
    json!({
        "role": "admin",
        "stats": [
            { "title": "Total Students", "value": "245" },
            { "title": "Present Today", "value": "198" },
            { "title": "Pending Fees", "value": "₹45,000" },
            { "title": "Media Files", "value": "156" },
        ],
        "recentActivities": [
            "Attendance marked for Class 5A",
            "Fee reminder sent to 25 parents",
            "New photos uploaded to gallery",
        ],
        "quickActions": [
            { "label": "Mark Attendance", "section": Section::Attendance.as_str() },
            { "label": "Update Fees", "section": Section::Fees.as_str() },
            { "label": "Upload Media", "section": Section::Media.as_str() },
        ],
    })
}

fn parent_overview(state: &AppState) -> serde_json::Value {
    let child = &state.store.child;
    let attendance = attendance_summary(&state.store.child_attendance);
    let due_in = days_until(state.config.today, child.upcoming_due_date);
    json!({
        "role": "parent",
        "student": {
            "id": child.student_id,
            "name": child.name,
            "classId": child.class_id,
            "rollNumber": child.roll_number,
        },
        "attendancePercentage": attendance.percentage,
        "pendingFees": child.pending_fees,
        "dueDate": date_json(child.upcoming_due_date),
        "daysUntilDue": due_in,
        "galleryUpdates": child.gallery_updates,
        "notifications": [
            {
                "title": "Fee Reminder",
                "message": format!("Monthly fee of ₹{} is due in {} days", child.pending_fees, due_in),
            },
            {
                "title": "New Photos",
                "message": "Annual sports day photos have been uploaded",
            },
        ],
    })
}

fn overview(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    Ok(match state.session.require_logged_in()? {
        Role::Admin => admin_overview(),
        Role::Parent => parent_overview(state),
    })
}

fn handle_overview(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, overview(state))
}

fn handle_classes_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "classes": state.store.classes }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.overview" => Some(handle_overview(state, req)),
        "classes.list" => Some(handle_classes_list(state, req)),
        _ => None,
    }
}
