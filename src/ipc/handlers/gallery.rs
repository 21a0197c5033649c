use crate::filter::{key_from_params, Filter};
use crate::ipc::error::{reply, HandlerErr};
use crate::ipc::helpers::{date_json, get_required_str};
use crate::ipc::types::{AppState, Request};
use crate::model::{MediaAssets, MediaItem};
use crate::session::Role;
use crate::stats::gallery_categories;
use serde_json::json;

fn item_json(m: &MediaItem) -> serde_json::Value {
    let (images, video_url) = match &m.assets {
        MediaAssets::Images(urls) => (urls.clone(), None),
        MediaAssets::Video(url) => (Vec::new(), Some(url.clone())),
    };
    json!({
        "id": m.id,
        "title": m.title,
        "type": m.kind.as_str(),
        "category": m.category,
        "date": date_json(m.date),
        "description": m.description,
        "thumbnail": m.thumbnail,
        "images": images,
        "videoUrl": video_url,
    })
}

fn gallery_categories_view(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Parent)?;
    let chips: Vec<serde_json::Value> = gallery_categories(state.store.gallery.all())
        .into_iter()
        .map(|c| json!({ "id": c.id, "name": c.name, "count": c.count }))
        .collect();
    Ok(json!({ "categories": chips }))
}

fn gallery_list(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Parent)?;
    let filter = Filter::default()
        .with_category(key_from_params(params, "category"))
        .with_search(key_from_params(params, "search"));
    let items: Vec<serde_json::Value> = state
        .store
        .gallery
        .query(&filter)
        .into_iter()
        .map(item_json)
        .collect();
    Ok(json!({
        "category": filter.category.as_deref().unwrap_or("all"),
        "items": items,
    }))
}

fn gallery_get(state: &AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    state.session.require_role(Role::Parent)?;
    let id = get_required_str(params, "id")?;
    let item = state
        .store
        .gallery
        .find(&id)
        .ok_or_else(|| HandlerErr::not_found("media item", &id))?;
    Ok(json!({ "item": item_json(item) }))
}

fn handle_gallery_categories(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, gallery_categories_view(state))
}

fn handle_gallery_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, gallery_list(state, &req.params))
}

fn handle_gallery_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    reply(&req.id, gallery_get(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "gallery.categories" => Some(handle_gallery_categories(state, req)),
        "gallery.list" => Some(handle_gallery_list(state, req)),
        "gallery.get" => Some(handle_gallery_get(state, req)),
        _ => None,
    }
}
