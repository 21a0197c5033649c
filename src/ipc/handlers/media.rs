use crate::filter::{key_from_params, Filter};
use crate::ipc::error::{reply, HandlerErr};
use crate::ipc::helpers::{date_json, get_required_str};
use crate::ipc::types::{AppState, Request};
use crate::model::{megabytes_label, MediaKind, UploadedFile};
use crate::session::Role;
use serde_json::json;

fn file_json(f: &UploadedFile) -> serde_json::Value {
    json!({
        "id": f.id,
        "name": f.name,
        "type": f.kind.as_str(),
        "size": f.size_label,
        "uploadDate": date_json(f.upload_date),
        "description": f.description,
    })
}

struct IncomingFile {
    name: String,
    kind: MediaKind,
    size_bytes: u64,
}

fn parse_files(params: &serde_json::Value) -> Result<Vec<IncomingFile>, HandlerErr> {
    let Some(files) = params.get("files").and_then(|v| v.as_array()) else {
        return Err(HandlerErr::bad_params("missing files"));
    };
    let mut out = Vec::with_capacity(files.len());
    for (idx, f) in files.iter().enumerate() {
        let name = f
            .get("name")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| HandlerErr {
                code: "bad_params",
                message: "each file needs a name".to_string(),
                details: Some(json!({ "index": idx })),
            })?;
        let mime = f.get("mimeType").and_then(|v| v.as_str()).unwrap_or("");
        let size_bytes = f.get("sizeBytes").and_then(|v| v.as_u64()).unwrap_or(0);
        out.push(IncomingFile {
            name,
            kind: MediaKind::from_mime(mime),
            size_bytes,
        });
    }
    Ok(out)
}

fn media_list(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let filter = Filter::default().with_search(key_from_params(params, "search"));
    let files: Vec<serde_json::Value> = state
        .store
        .uploads
        .query(&filter)
        .into_iter()
        .map(file_json)
        .collect();
    Ok(json!({
        "files": files,
        "count": state.store.uploads.len(),
    }))
}

fn media_upload(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let incoming = parse_files(params)?;
    let description = key_from_params(params, "description")
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let mut added = Vec::with_capacity(incoming.len());
    let mut notices = Vec::with_capacity(incoming.len());
    for f in incoming {
        let record = UploadedFile {
            id: state.ids.next_id(),
            description: description
                .clone()
                .unwrap_or_else(|| format!("Uploaded {}", f.name)),
            size_label: megabytes_label(f.size_bytes),
            upload_date: state.config.today,
            kind: f.kind,
            name: f.name,
        };
        log::info!("media: uploaded {} as {}", record.name, record.id);
        notices.push(format!("{} uploaded successfully!", record.name));
        added.push(file_json(&record));
        state.store.uploads.prepend(record);
    }
    // The batch lands newest-first, so the list now starts with the last file.
    added.reverse();

    Ok(json!({
        "files": added,
        "count": state.store.uploads.len(),
        "notice": notices.join("\n"),
    }))
}

fn media_delete(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Admin)?;
    let id = get_required_str(params, "id")?;
    let removed = state
        .store
        .uploads
        .remove(&id)
        .ok_or_else(|| HandlerErr::not_found("file", &id))?;
    log::info!("media: deleted {} ({})", removed.name, removed.id);
    Ok(json!({
        "id": removed.id,
        "count": state.store.uploads.len(),
        "notice": "File deleted successfully",
    }))
}

fn handle_media_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, media_list(state, &req.params))
}

fn handle_media_upload(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, media_upload(state, &req.params))
}

fn handle_media_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, media_delete(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "media.list" => Some(handle_media_list(state, req)),
        "media.upload" => Some(handle_media_upload(state, req)),
        "media.delete" => Some(handle_media_delete(state, req)),
        _ => None,
    }
}
