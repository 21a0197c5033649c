use crate::filter::{key_from_params, Filter};
use crate::ipc::error::{reply, HandlerErr};
use crate::ipc::helpers::{date_json, get_required_enum, get_required_str};
use crate::ipc::types::{AppState, Request};
use crate::model::{FeeAccount, FeeStatus, PaymentInstructions, Student};
use crate::session::Role;
use crate::stats::{days_until, fee_summary, paid_percent, URGENT_DUE_DAYS};
use serde_json::json;

fn fee_row_json(s: &Student, fee: &FeeAccount) -> serde_json::Value {
    json!({
        "id": s.id,
        "name": s.name,
        "rollNumber": s.roll_number,
        "classId": s.class_id,
        "totalFees": fee.total,
        "paidFees": fee.paid,
        "pendingFees": fee.pending,
        "dueDate": date_json(fee.due_date),
        "status": fee.status.as_str(),
        "registrationDate": date_json(fee.registration_date),
    })
}

fn instructions_json(p: &PaymentInstructions) -> serde_json::Value {
    json!({
        "upiId": p.upi_id,
        "accountNumber": p.account_number,
        "ifsc": p.ifsc,
        "bank": p.bank,
    })
}

/// Students without a fee account are not part of fee management.
fn fee_student<'a>(state: &'a AppState, student_id: &str) -> Result<(&'a Student, &'a FeeAccount), HandlerErr> {
    state
        .store
        .students
        .find(student_id)
        .and_then(|s| s.fee.as_ref().map(|f| (s, f)))
        .ok_or_else(|| HandlerErr::not_found("fee account", student_id))
}

fn fees_list(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let filter = Filter::default()
        .with_class(key_from_params(params, "classId"))
        .with_search(key_from_params(params, "search"));

    let students = state.store.fee_students(&filter);
    let summary = fee_summary(students.iter().copied());
    let rows: Vec<serde_json::Value> = students
        .iter()
        .filter_map(|s| s.fee.as_ref().map(|f| fee_row_json(s, f)))
        .collect();
    Ok(json!({
        "classId": filter.class_id,
        "students": rows,
        "summary": {
            "totalCollected": summary.collected,
            "pendingAmount": summary.pending,
            "overdueStudents": summary.overdue,
        },
    }))
}

fn fees_details(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let student_id = get_required_str(params, "studentId")?;
    let (student, fee) = fee_student(state, &student_id)?;
    Ok(json!({
        "student": fee_row_json(student, fee),
        "paymentInstructions": instructions_json(&state.store.payment_instructions),
    }))
}

fn fees_update_status(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let student_id = get_required_str(params, "studentId")?;
    let status = get_required_enum(
        params,
        "status",
        FeeStatus::parse,
        &["paid", "pending", "overdue"],
    )?;
    fee_student(state, &student_id)?;

    let updated = state
        .store
        .students
        .update(&student_id, |s| {
            if let Some(fee) = s.fee.as_mut() {
                fee.apply_status(status);
            }
        })
        .ok_or_else(|| HandlerErr::not_found("fee account", &student_id))?;
    log::info!("fees: {} ({}) set to {}", updated.name, updated.id, status.as_str());

    let row = match updated.fee.as_ref() {
        Some(fee) => fee_row_json(updated, fee),
        None => return Err(HandlerErr::not_found("fee account", &student_id)),
    };
    Ok(json!({
        "student": row,
        "notice": "Fee status updated successfully",
    }))
}

fn fees_send_reminder(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let student_id = get_required_str(params, "studentId")?;
    let (student, _) = fee_student(state, &student_id)?;
    let notice = format!("Fee reminder sent to {}'s parents", student.name);
    log::info!("fees: {}", notice);
    Ok(json!({ "studentId": student.id, "notice": notice }))
}

fn fees_student(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Parent)?;
    let child = &state.store.child;
    let paid = child.total_fees - child.pending_fees;
    let due_in = days_until(state.config.today, child.upcoming_due_date);
    let payments: Vec<serde_json::Value> = state
        .store
        .child_payments
        .iter()
        .map(|p| {
            json!({
                "date": date_json(p.date),
                "amount": p.amount,
                "method": p.method,
                "status": p.status.as_str(),
                "receiptId": p.receipt_id,
            })
        })
        .collect();
    Ok(json!({
        "studentName": child.name,
        "rollNumber": child.roll_number,
        "totalFees": child.total_fees,
        "paidFees": paid,
        "pendingFees": child.pending_fees,
        "paidPercentage": paid_percent(child.total_fees, child.pending_fees),
        "dueDate": date_json(child.upcoming_due_date),
        "daysUntilDue": due_in,
        "urgent": child.pending_fees > 0 && due_in <= URGENT_DUE_DAYS,
        "paymentInstructions": instructions_json(&state.store.payment_instructions),
        "paymentHistory": payments,
    }))
}

fn handle_fees_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, fees_list(state, &req.params))
}

fn handle_fees_details(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, fees_details(state, &req.params))
}

fn handle_fees_update_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, fees_update_status(state, &req.params))
}

fn handle_fees_send_reminder(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, fees_send_reminder(state, &req.params))
}

fn handle_fees_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, fees_student(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "fees.list" => Some(handle_fees_list(state, req)),
        "fees.details" => Some(handle_fees_details(state, req)),
        "fees.updateStatus" => Some(handle_fees_update_status(state, req)),
        "fees.sendReminder" => Some(handle_fees_send_reminder(state, req)),
        "fees.student" => Some(handle_fees_student(state, req)),
        _ => None,
    }
}
