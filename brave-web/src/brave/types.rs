use std::borrow::Cow;

/// Default page size when the caller doesn't ask for one.
pub const DEFAULT_COUNT: u32 = 5;

/// Request parameters for the Brave Web Search API.
///
/// Optional filters are passed through untouched; an unset (or empty) filter
/// is left out of the query string entirely rather than sent blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSearchRequest {
    /// Query string
    pub query: String,

    /// Results per page
    pub count: u32,

    /// Offset for pagination
    pub offset: u32,

    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,

    /// Search language (ISO 639-1, e.g., "en")
    pub search_lang: Option<String>,

    /// Safe search filter: "off" | "moderate" | "strict"
    pub safesearch: Option<String>,

    /// Freshness: "pd" | "pw" | "pm" | "py" or a date range
    pub freshness: Option<String>,
}

impl WebSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: DEFAULT_COUNT,
            offset: 0,
            country: None,
            search_lang: None,
            safesearch: None,
            freshness: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    pub fn with_search_lang(mut self, search_lang: Option<String>) -> Self {
        self.search_lang = search_lang;
        self
    }

    pub fn with_safesearch(mut self, safesearch: Option<String>) -> Self {
        self.safesearch = safesearch;
        self
    }

    pub fn with_freshness(mut self, freshness: Option<String>) -> Self {
        self.freshness = freshness;
        self
    }

    /// Query-string pairs in wire order: `q, source, count, offset` followed
    /// by whichever optional filters are set.
    ///
    /// ```
    /// use brave_web::brave::WebSearchRequest;
    ///
    /// let req = WebSearchRequest::new("rust ownership")
    ///     .with_country(Some("de".into()))
    ///     .with_freshness(Some(String::new()));
    /// let keys: Vec<&str> = req.query_pairs().iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["q", "source", "count", "offset", "country"]);
    /// ```
    pub fn query_pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        let mut pairs = vec![
            ("q", Cow::Borrowed(self.query.as_str())),
            ("source", Cow::Borrowed("web")),
            ("count", Cow::Owned(self.count.to_string())),
            ("offset", Cow::Owned(self.offset.to_string())),
        ];
        let optional = [
            ("country", &self.country),
            ("search_lang", &self.search_lang),
            ("safesearch", &self.safesearch),
            ("freshness", &self.freshness),
        ];
        for (key, value) in optional {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, Cow::Borrowed(v)));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(pairs: Vec<(&'static str, Cow<'_, str>)>) -> Vec<(String, String)> {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into_owned()))
            .collect()
    }

    #[test]
    fn defaults_send_only_required_keys() {
        let req = WebSearchRequest::new("rust");
        assert_eq!(
            as_strings(req.query_pairs()),
            vec![
                ("q".to_string(), "rust".to_string()),
                ("source".to_string(), "web".to_string()),
                ("count".to_string(), "5".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn all_filters_in_wire_order() {
        let req = WebSearchRequest::new("q")
            .with_count(20)
            .with_offset(3)
            .with_country(Some("us".into()))
            .with_search_lang(Some("en".into()))
            .with_safesearch(Some("strict".into()))
            .with_freshness(Some("pw".into()));
        let pairs = as_strings(req.query_pairs());
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "q",
                "source",
                "count",
                "offset",
                "country",
                "search_lang",
                "safesearch",
                "freshness"
            ]
        );
        assert_eq!(pairs[2].1, "20");
        assert_eq!(pairs[3].1, "3");
        assert_eq!(pairs[6].1, "strict");
    }

    #[test]
    fn empty_filters_are_omitted() {
        let req = WebSearchRequest::new("q")
            .with_search_lang(Some(String::new()))
            .with_safesearch(Some("off".into()));
        let keys: Vec<&str> = req.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["q", "source", "count", "offset", "safesearch"]);
    }
}
