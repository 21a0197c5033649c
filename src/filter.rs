use serde_json::Value;

/// Dimensions a section view can filter on. A record that lacks a dimension
/// only matches when the corresponding key is unset.
pub trait Filterable {
    fn class_id(&self) -> Option<&str> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str>;
}

/// Conjunction of the filter keys held by a section view. `None` matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub class_id: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Filter {
    pub fn with_class(mut self, class_id: Option<String>) -> Self {
        self.class_id = normalize_key(class_id);
        self
    }

    /// The gallery's "all" chip is the same as no category.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = normalize_key(category).filter(|c| !c.eq_ignore_ascii_case("all"));
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = normalize_key(search).map(|s| s.to_lowercase());
        self
    }

    pub fn is_unset(&self) -> bool {
        self.class_id.is_none() && self.category.is_none() && self.search.is_none()
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if let Some(class_id) = self.class_id.as_deref() {
            if item.class_id() != Some(class_id) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if item.category() != Some(category) {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref() {
            let hit = item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle));
            if !hit {
                return false;
            }
        }
        true
    }
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Reads an optional string filter key. Null, missing and non-string values are unset.
pub fn key_from_params(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Re-derives the visible subsequence from the full source, keeping source order.
pub fn derive<'a, T, I>(items: I, filter: &Filter) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if filter.is_unset() {
        return items.into_iter().collect();
    }
    items.into_iter().filter(|item| filter.matches(*item)).collect()
}
