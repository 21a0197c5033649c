use crate::ipc::error::HandlerErr;

pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

/// Like `get_required_str`, but the value is parsed into a closed set of names.
pub fn get_required_enum<T>(
    params: &serde_json::Value,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Result<T, HandlerErr> {
    let raw = get_required_str(params, key)?;
    parse(raw.trim()).ok_or_else(|| HandlerErr {
        code: "bad_params",
        message: format!("{} must be one of {}", key, allowed.join(", ")),
        details: Some(serde_json::json!({ "value": raw })),
    })
}

pub fn date_json(d: chrono::NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
