//! Reshape an upstream Brave body into the stable [`NormalizedResult`].
//!
//! The upstream payload is walked as a [`serde_json::Value`] rather than a
//! typed struct: a missing `web` section or a `web.results` that isn't an
//! array yields an empty result list instead of an error.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResult {
    pub query: String,
    /// Upstream `web.total` when it is an integer, else the result count.
    pub total: i64,
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// Zero-based position in `results`.
    pub index: usize,
    pub title: String,
    pub url: String,
    pub description: String,
    pub age: Option<String>,
    pub language: Option<String>,
}

/// Build the normalized view of `body` for `query`.
///
/// ```
/// use brave_web::normalize::normalize_results;
/// use serde_json::json;
///
/// let body = json!({"web": {"results": [{"title": "A", "url": "u1", "description": "d1"}]}});
/// let n = normalize_results(&body, "rust ownership");
/// assert_eq!(n.total, 1);
/// assert_eq!(n.results[0].index, 0);
/// assert_eq!(n.results[0].age, None);
/// ```
pub fn normalize_results(body: &Value, query: &str) -> NormalizedResult {
    let web = body.get("web").and_then(Value::as_object);
    let results: &[Value] = web
        .and_then(|w| w.get("results"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let total = web
        .and_then(|w| w.get("total"))
        .and_then(Value::as_i64)
        .unwrap_or(results.len() as i64);

    NormalizedResult {
        query: query.to_string(),
        total,
        results: results
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_item(index, item))
            .collect(),
    }
}

fn normalize_item(index: usize, item: &Value) -> ResultItem {
    let empty = Map::new();
    let obj = item.as_object().unwrap_or(&empty);
    ResultItem {
        index,
        title: str_field(obj, "title").unwrap_or_default().to_string(),
        url: str_field(obj, "url").unwrap_or_default().to_string(),
        description: str_field(obj, "description")
            .unwrap_or_default()
            .to_string(),
        age: pick_age(obj),
        language: str_field(obj, "language").map(str::to_string),
    }
}

/// `age` when it's a non-empty string, then `page_age`, then nothing.
fn pick_age(obj: &Map<String, Value>) -> Option<String> {
    str_field(obj, "age")
        .filter(|age| !age.is_empty())
        .or_else(|| str_field(obj, "page_age"))
        .map(str::to_string)
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}
