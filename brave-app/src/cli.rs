use brave_common::{Result, SearchError};
use brave_web::brave::{DEFAULT_COUNT, WebSearchRequest};
use brave_web::render::OutputMode;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "brave-search", version, about = "Brave Search API client")]
pub struct Cli {
    /// Search query
    pub query: String,

    /// Maximum results
    #[arg(long, default_value_t = DEFAULT_COUNT as i64, allow_negative_numbers = true)]
    pub count: i64,

    /// Offset into results
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Two letter country code
    #[arg(long, value_name = "CC")]
    pub country: Option<String>,

    /// Search language code
    #[arg(long, value_name = "LANG")]
    pub search_lang: Option<String>,

    /// off, moderate, strict
    #[arg(long, value_name = "MODE")]
    pub safesearch: Option<String>,

    /// pd, pw, pm, py
    #[arg(long, value_name = "PERIOD")]
    pub freshness: Option<String>,

    /// Output normalized JSON
    #[arg(long)]
    pub json: bool,

    /// Output raw API response (takes precedence over --json)
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    /// Check bounds and build the wire request. Runs before any I/O.
    pub fn to_request(&self) -> Result<WebSearchRequest> {
        if self.count < 1 {
            return Err(SearchError::Usage("--count must be at least 1".into()));
        }
        if self.offset < 0 {
            return Err(SearchError::Usage("--offset must be 0 or higher".into()));
        }
        if self.query.is_empty() {
            return Err(SearchError::Usage("query must not be empty".into()));
        }
        let count = u32::try_from(self.count)
            .map_err(|_| SearchError::Usage(format!("--count must be at most {}", u32::MAX)))?;
        let offset = u32::try_from(self.offset)
            .map_err(|_| SearchError::Usage(format!("--offset must be at most {}", u32::MAX)))?;

        Ok(WebSearchRequest::new(self.query.clone())
            .with_count(count)
            .with_offset(offset)
            .with_country(self.country.clone())
            .with_search_lang(self.search_lang.clone())
            .with_safesearch(self.safesearch.clone())
            .with_freshness(self.freshness.clone()))
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.json, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brave_common::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brave-search").chain(args.iter().copied()))
            .expect("parse")
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["rust ownership"]);
        assert_eq!(cli.count, 5);
        assert_eq!(cli.offset, 0);
        assert_eq!(cli.output_mode(), OutputMode::Text);
        let req = cli.to_request().unwrap();
        assert_eq!(req, WebSearchRequest::new("rust ownership"));
    }

    #[test]
    fn count_below_one_is_a_usage_error() {
        for count in ["0", "-1"] {
            let err = parse(&["q", "--count", count]).to_request().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Usage);
            assert_eq!(err.to_string(), "--count must be at least 1");
        }
    }

    #[test]
    fn negative_offset_is_a_usage_error() {
        let err = parse(&["q", "--offset", "-1"]).to_request().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(err.to_string(), "--offset must be 0 or higher");
    }

    #[test]
    fn empty_query_is_a_usage_error() {
        let err = parse(&[""]).to_request().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(err.to_string(), "query must not be empty");
    }

    #[test]
    fn whitespace_query_is_sent_as_is() {
        let req = parse(&["   "]).to_request().unwrap();
        assert_eq!(req.query, "   ");
    }

    #[test]
    fn oversized_count_is_a_usage_error() {
        let err = parse(&["q", "--count", "99999999999"])
            .to_request()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn filters_pass_through() {
        let cli = parse(&[
            "q",
            "--country",
            "DE",
            "--search-lang",
            "de",
            "--safesearch",
            "strict",
            "--freshness",
            "pw",
            "--count",
            "10",
            "--offset",
            "2",
        ]);
        let req = cli.to_request().unwrap();
        assert_eq!(req.count, 10);
        assert_eq!(req.offset, 2);
        assert_eq!(req.country.as_deref(), Some("DE"));
        assert_eq!(req.search_lang.as_deref(), Some("de"));
        assert_eq!(req.safesearch.as_deref(), Some("strict"));
        assert_eq!(req.freshness.as_deref(), Some("pw"));
    }

    #[test]
    fn raw_takes_precedence_over_json() {
        assert_eq!(parse(&["q", "--json", "--raw"]).output_mode(), OutputMode::Raw);
        assert_eq!(parse(&["q", "--json"]).output_mode(), OutputMode::Json);
    }

    #[test]
    fn missing_query_fails_to_parse() {
        assert!(Cli::try_parse_from(["brave-search"]).is_err());
    }
}
