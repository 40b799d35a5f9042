//! Output rendering for the three modes the CLI supports.

use crate::normalize::{NormalizedResult, normalize_results};
use brave_common::Result;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable blocks.
    Text,
    /// The normalized structure as pretty JSON.
    Json,
    /// The upstream body as pretty JSON, untouched.
    Raw,
}

impl OutputMode {
    /// `raw` beats `json`; neither means text.
    pub fn from_flags(json: bool, raw: bool) -> Self {
        match (json, raw) {
            (_, true) => OutputMode::Raw,
            (true, false) => OutputMode::Json,
            (false, false) => OutputMode::Text,
        }
    }
}

/// Render the upstream `body` for `query` in the requested mode.
pub fn render(mode: OutputMode, body: &Value, query: &str) -> Result<String> {
    let out = match mode {
        OutputMode::Raw => serde_json::to_string_pretty(body)?,
        OutputMode::Json => serde_json::to_string_pretty(&normalize_results(body, query))?,
        OutputMode::Text => format_results_text(&normalize_results(body, query)),
    };
    Ok(out)
}

/// Header line plus one `<result>` block per item, blocks separated by a
/// blank line.
///
/// ```
/// use brave_web::normalize::normalize_results;
/// use brave_web::render::format_results_text;
/// use serde_json::json;
///
/// let body = json!({"web": {"results": [{"title": "A", "url": "u1", "description": "d1"}]}});
/// let text = format_results_text(&normalize_results(&body, "rust ownership"));
/// assert_eq!(
///     text,
///     "Results: 1 (showing 1)\n\n<result index=\"0\" title=\"A\" url=\"u1\">\nd1\n</result>"
/// );
/// ```
pub fn format_results_text(normalized: &NormalizedResult) -> String {
    let mut output = format!(
        "Results: {} (showing {})",
        normalized.total,
        normalized.results.len()
    );

    for result in &normalized.results {
        output.push_str("\n\n");
        output.push_str(&format!(
            "<result index=\"{}\" title=\"{}\" url=\"{}\">\n",
            result.index, result.title, result.url
        ));
        output.push_str(&result.description);
        output.push_str("\n</result>");
    }

    output
}
