use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to get the pokeapi binary command
fn pokeapi_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pokeapi").unwrap();
    cmd.env_remove("POKEAPI_BASE_URL").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

mod offline {
    use super::*;

    #[test]
    fn help_lists_commands() {
        pokeapi_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("resources"))
            .stdout(predicate::str::contains("encounters"))
            .stdout(predicate::str::contains("--base-url"));
    }

    #[test]
    fn resources_lists_table() {
        pokeapi_cmd()
            .arg("resources")
            .assert()
            .success()
            .stdout(predicate::str::contains("pokemon-species"))
            .stdout(predicate::str::is_match(r"(?m)^machine\s+id$").unwrap())
            .stdout(predicate::str::is_match(r"(?m)^ability\s+id, name$").unwrap());
    }

    #[test]
    fn unknown_resource_is_rejected() {
        pokeapi_cmd()
            .args(["get", "pokemons", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("pokemons"));
    }

    #[test]
    fn name_lookup_on_id_only_resource_fails() {
        let output = pokeapi_cmd()
            .args(["--compact", "get", "machine", "tm01"])
            .output()
            .expect("Failed to execute");

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout_json(&output),
            json!({
                "error": "Exception: machine does not support lookup by name",
                "success": false
            })
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        pokeapi_cmd()
            .args(["--base-url", "not a url", "get", "pokemon", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid base URL"));
    }
}

mod against_mock_server {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn get_prints_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ability/stench"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "name": "stench" })),
            )
            .mount(&mock_server)
            .await;

        let output = pokeapi_cmd()
            .args(["--base-url", &mock_server.uri(), "get", "ability", "stench"])
            .output()
            .expect("Failed to execute");

        assert!(output.status.success());
        assert_eq!(stdout_json(&output), json!({ "id": 1, "name": "stench" }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn base_url_from_environment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/4/encounters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let output = pokeapi_cmd()
            .env("POKEAPI_BASE_URL", mock_server.uri())
            .args(["encounters", "4"])
            .output()
            .expect("Failed to execute");

        assert!(output.status.success());
        assert_eq!(stdout_json(&output), json!([]));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_sends_pagination() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/berry"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 64 })))
            .mount(&mock_server)
            .await;

        let output = pokeapi_cmd()
            .args(["--base-url", &mock_server.uri(), "list", "berry"])
            .args(["--limit", "5", "--offset", "10"])
            .output()
            .expect("Failed to execute");

        assert!(output.status.success());
        assert_eq!(stdout_json(&output), json!({ "count": 64 }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn not_found_exits_with_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pokemon/99999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let output = pokeapi_cmd()
            .args(["--base-url", &mock_server.uri(), "get", "pokemon", "99999"])
            .output()
            .expect("Failed to execute");

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            stdout_json(&output),
            json!({ "error": "HTTP Error: 404", "success": false })
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn compact_output_is_one_line() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stat/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "name": "hp" })),
            )
            .mount(&mock_server)
            .await;

        pokeapi_cmd()
            .args(["--base-url", &mock_server.uri(), "--compact", "raw", "/stat/1"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^\{[^\n]*\}\n$").unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn raw_post_sends_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&mock_server)
            .await;

        pokeapi_cmd()
            .args(["--base-url", &mock_server.uri(), "raw", "echo"])
            .args(["--method", "post", "--body", "{\"a\":1}"])
            .assert()
            .success();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, b"{\"a\":1}");
    }
}
