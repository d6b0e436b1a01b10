//! CLI tests against a mock gateway.
//!
//! Each test starts a wiremock gateway and runs the built `ig` binary
//! against it.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{API_KEY, CST, XST};

#[tokio::test]
async fn test_login_prints_session_details() {
    let server = common::mock_gateway().await;

    let stdout = common::run_cli_success(&server, &["login"]).await;

    assert!(stdout.contains("ABC123"));
    assert!(stdout.contains("100000001"));
    assert!(stdout.contains("https://demo-apd.marketdatasystems.com"));
}

#[tokio::test]
async fn test_login_json_output() {
    let server = common::mock_gateway().await;

    let stdout = common::run_cli_success(&server, &["login", "--json"]).await;
    let login: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(login["currentAccountId"], "ABC123");
    assert_eq!(login["currencyIsoCode"], "GBP");
}

#[tokio::test]
async fn test_login_failure_exits_nonzero() {
    let server = wiremock::MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errorCode": "error.security.invalid-details"
        })))
        .mount(&server)
        .await;

    let output = common::run_cli(&server, &["login"]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("401"));
}

#[tokio::test]
async fn test_search_prints_markets() {
    let server = common::mock_gateway().await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("searchTerm", "EURUSD"))
        .and(header("X-IG-API-KEY", API_KEY))
        .and(header("CST", CST))
        .and(header("X-SECURITY-TOKEN", XST))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "markets": [{"epic": "CS.D.EURUSD.CFD.IP", "instrumentName": "EUR/USD"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = common::run_cli_success(&server, &["search", "EURUSD"]).await;
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(result["markets"][0]["epic"], "CS.D.EURUSD.CFD.IP");
}

#[tokio::test]
async fn test_request_with_relative_path_and_body() {
    let server = common::mock_gateway().await;

    Mock::given(method("POST"))
        .and(path("/positions/otc"))
        .and(header("CST", CST))
        .and(body_json(json!({"epic": "IX.D.FTSE.DAILY.IP", "size": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dealReference": "REF9"})))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = common::run_cli_success(
        &server,
        &[
            "request",
            "positions/otc",
            "-X",
            "post",
            "--body",
            r#"{"epic": "IX.D.FTSE.DAILY.IP", "size": 1}"#,
        ],
    )
    .await;
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(result["dealReference"], "REF9");
}

#[tokio::test]
async fn test_request_rejects_invalid_body() {
    let server = common::mock_gateway().await;

    let output = common::run_cli(&server, &["request", "accounts", "--body", "{nope"]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON body"));
}

#[tokio::test]
async fn test_verbose_logs_go_to_stderr() {
    let server = common::mock_gateway().await;

    let output = common::run_cli(&server, &["-v", "login", "--json"]).await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Logging in"));

    let login: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(login["currentAccountId"], "ABC123");
}

#[tokio::test]
async fn test_version_flag() {
    let server = common::mock_gateway().await;

    let stdout = common::run_cli_success(&server, &["--version"]).await;

    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
