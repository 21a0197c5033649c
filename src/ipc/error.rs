use serde_json::json;

use crate::session::AccessError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Reply for a line that could not be parsed as a request, so it has no id.
pub fn bad_json(message: impl Into<String>) -> serde_json::Value {
    json!({
        "ok": false,
        "error": {
            "code": "bad_json",
            "message": message.into(),
        }
    })
}

#[derive(Debug)]
pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(what: &str, id: &str) -> Self {
        Self {
            code: "not_found",
            message: format!("{what} not found"),
            details: Some(json!({ "id": id })),
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<AccessError> for HandlerErr {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::NotLoggedIn => Self {
                code: "not_logged_in",
                message: "log in first".to_string(),
                details: None,
            },
            AccessError::WrongRole { required, actual } => Self {
                code: "forbidden",
                message: format!("requires the {} dashboard", required.as_str()),
                details: Some(json!({
                    "requiredRole": required.as_str(),
                    "role": actual.as_str(),
                })),
            },
            AccessError::SectionNotOnDashboard { role, section } => Self {
                code: "bad_params",
                message: format!(
                    "section {} is not on the {} dashboard",
                    section.as_str(),
                    role.as_str()
                ),
                details: Some(json!({
                    "sections": role.sections().iter().map(|s| s.as_str()).collect::<Vec<_>>(),
                })),
            },
        }
    }
}

pub fn reply(id: &str, result: Result<serde_json::Value, HandlerErr>) -> serde_json::Value {
    match result {
        Ok(value) => ok(id, value),
        Err(error) => error.response(id),
    }
}
