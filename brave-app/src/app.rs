use crate::cli::Cli;
use brave_common::{Result, SearchError};
use brave_config::SearchConfig;
use brave_web::brave::BraveApi;
use brave_web::render::render;

/// Validate, authenticate, search once, render. Usage and credential
/// problems are reported before any network traffic.
pub async fn run(cli: &Cli, config: &SearchConfig, base_url: &str) -> Result<String> {
    let request = cli.to_request()?;
    let api_key = config
        .require_api_key()
        .map_err(|e| SearchError::Config(e.to_string()))?;

    let api = BraveApi::with_base_url(api_key, base_url)?;
    let body = api.web_search(&request).await?;
    render(cli.output_mode(), &body, &request.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brave_common::ErrorKind;
    use clap::Parser;
    use serde_json::{Value, json};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brave-search").chain(args.iter().copied())).unwrap()
    }

    fn keyed() -> SearchConfig {
        SearchConfig {
            api_key: Some("test-key".into()),
            ..Default::default()
        }
    }

    async fn server_with(body: Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/res/v1/web/search"))
            .and(header("x-subscription-token", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn usage_errors_make_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for args in [
            &["q", "--count", "0"][..],
            &["q", "--count", "-1"][..],
            &["q", "--offset", "-1"][..],
        ] {
            let err = run(&cli(args), &keyed(), &server.uri()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Usage);
        }
    }

    #[tokio::test]
    async fn missing_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = run(&cli(&["q"]), &SearchConfig::default(), &server.uri())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.to_string(), "missing BRAVE_SEARCH_API_KEY");
    }

    #[tokio::test]
    async fn text_mode_end_to_end() {
        let server = server_with(json!({
            "web": {"results": [{"title": "A", "url": "u1", "description": "d1"}]}
        }))
        .await;

        let out = run(&cli(&["rust ownership"]), &keyed(), &server.uri())
            .await
            .unwrap();
        assert_eq!(
            out,
            "Results: 1 (showing 1)\n\n<result index=\"0\" title=\"A\" url=\"u1\">\nd1\n</result>"
        );
    }

    #[tokio::test]
    async fn raw_mode_ignores_json_flag() {
        let upstream = json!({"type": "search", "web": {"results": []}});
        let server = server_with(upstream.clone()).await;

        let out = run(&cli(&["q", "--json", "--raw"]), &keyed(), &server.uri())
            .await
            .unwrap();
        assert_eq!(out, serde_json::to_string_pretty(&upstream).unwrap());
    }

    #[tokio::test]
    async fn json_mode_with_malformed_web_section() {
        let server = server_with(json!({"web": {"results": "nope", "total": 7}})).await;

        let out = run(&cli(&["q", "--json"]), &keyed(), &server.uri())
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"query": "q", "total": 7, "results": []}));
    }

    #[tokio::test]
    async fn http_failure_is_a_runtime_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = run(&cli(&["q"]), &keyed(), &server.uri())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
        assert!(err.to_string().contains("503"));
    }
}
