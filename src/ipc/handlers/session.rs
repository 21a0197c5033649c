use crate::ipc::error::{ok, reply, HandlerErr};
use crate::ipc::helpers::get_required_enum;
use crate::ipc::types::{AppState, Request};
use crate::session::{LoginOutcome, Role, Section, Session};
use serde_json::json;

pub fn session_json(session: &Session) -> serde_json::Value {
    let sections: Vec<&str> = session
        .role()
        .map(|r| r.sections().iter().map(|s| s.as_str()).collect())
        .unwrap_or_default();
    json!({
        "loggedIn": session.is_logged_in(),
        "role": session.role().map(|r| r.as_str()),
        "section": session.section().map(|s| s.as_str()),
        "sections": sections,
    })
}

fn credential(params: &serde_json::Value, key: &str) -> String {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn session_login(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let role = get_required_enum(params, "role", Role::parse, &["admin", "parent"])?;
    // Missing credentials behave like blank ones.
    let username = credential(params, "username");
    let password = credential(params, "password");

    match state.session.login(role, &username, &password) {
        LoginOutcome::Accepted => {
            log::info!("session: logged in as {}", role.as_str());
        }
        LoginOutcome::Ignored => {
            log::debug!("session: login ignored, blank credentials");
        }
    }
    Ok(session_json(&state.session))
}

fn handle_session_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, session_json(&state.session))
}

fn handle_session_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, session_login(state, &req.params))
}

fn handle_session_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(role) = state.session.role() {
        log::info!("session: {} logged out", role.as_str());
    }
    state.session.logout();
    ok(&req.id, session_json(&state.session))
}

fn select_section(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let section = get_required_enum(
        params,
        "section",
        Section::parse,
        &["overview", "attendance", "fees", "media", "gallery"],
    )?;
    state.session.select_section(section)?;
    Ok(session_json(&state.session))
}

fn handle_select_section(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, select_section(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "session.get" => Some(handle_session_get(state, req)),
        "session.login" => Some(handle_session_login(state, req)),
        "session.logout" => Some(handle_session_logout(state, req)),
        "dashboard.selectSection" => Some(handle_select_section(state, req)),
        _ => None,
    }
}
