use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "cli-api-key";
pub const CST: &str = "cli-cst";
pub const XST: &str = "cli-xst";

/// Start a mock gateway that accepts any login.
pub async fn mock_gateway() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("CST", CST)
                .insert_header("X-SECURITY-TOKEN", XST)
                .set_body_json(json!({
                    "currentAccountId": "ABC123",
                    "clientId": "100000001",
                    "accountType": "CFD",
                    "currencyIsoCode": "GBP",
                    "lightstreamerEndpoint": "https://demo-apd.marketdatasystems.com"
                })),
        )
        .mount(&server)
        .await;

    server
}

pub fn gateway_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Run the CLI binary against the mock gateway.
pub async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    let gateway = gateway_url(server);
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ig"));
    cmd.args([
        "--api-key",
        API_KEY,
        "--username",
        "trader01",
        "--password",
        "secret",
        "--gateway",
        gateway.as_str(),
    ]);
    cmd.args(args);
    cmd.env_remove("RUST_LOG");
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(server: &MockServer, args: &[&str]) -> String {
    let output = run_cli(server, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
