// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{test_server, wait_for_terminal};

#[tokio::test]
async fn test_health_and_version() {
    let (server, _, _) = test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "OK");

    let response = server.get("/version").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_start_returns_task_id_before_fetch_completes() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><title>Slow</title></html>")
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock)
        .await;

    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({
            "target_url": format!("{}/slow", mock.uri()),
            "xpath_selectors": [{"name": "title", "xpath": "title"}]
        }))
        .await;

    // Submission responds before the mocked 300ms fetch can have finished
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "started");
    assert!(body["task_id"].as_str().is_some());

    let task_id = body["task_id"].as_str().unwrap().to_string();
    let task = wait_for_terminal(&server, &task_id).await;
    assert_eq!(task["status"], "completed");
}

#[tokio::test]
async fn test_successful_crawl_extracts_title() {
    let mock = MockServer::start().await;
    let html = "<html><title>Hi</title></html>";
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock)
        .await;

    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({
            "target_url": format!("{}/page", mock.uri()),
            "xpath_selectors": [{"name": "title", "xpath": "title"}]
        }))
        .await;
    let task_id = response.json::<Value>()["task_id"]
        .as_str()
        .unwrap()
        .to_string();

    let task = wait_for_terminal(&server, &task_id).await;
    assert_eq!(task["status"], "completed");
    assert_eq!(task["success"], true);
    assert_eq!(task["completed_urls"], 1);
    assert_eq!(task["total_urls"], 1);
    assert!(task["end_time"].as_str().is_some());

    let results: Value = server.get("/results").await.json();
    let attempt = &results.as_array().unwrap()[0];
    assert_eq!(attempt["success"], true);
    assert_eq!(attempt["status_code"], 200);
    assert_eq!(attempt["data_size"], html.len() as i64);
    assert_eq!(attempt["result"]["title"], json!(["Hi"]));
    assert!(attempt["duration"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_http_404_records_failed_attempt_without_extraction() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&mock)
        .await;

    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({
            "target_url": format!("{}/missing", mock.uri()),
            "xpath_selectors": [{"name": "title", "xpath": "title"}]
        }))
        .await;
    let task_id = response.json::<Value>()["task_id"]
        .as_str()
        .unwrap()
        .to_string();

    // The task still runs to completion; only the attempt is marked failed
    let task = wait_for_terminal(&server, &task_id).await;
    assert_eq!(task["status"], "completed");
    assert_eq!(task["success"], false);

    let results: Value = server.get("/results").await.json();
    let attempt = &results.as_array().unwrap()[0];
    assert_eq!(attempt["success"], false);
    assert_eq!(attempt["status_code"], 404);
    assert!(attempt["error"].as_str().unwrap().contains("404"));
    assert_eq!(attempt["result"], json!({}));
}

#[tokio::test]
async fn test_network_failure_records_status_code_zero() {
    let (server, _, _) = test_server().await;

    // Nothing listens on the discard port, the connection is refused
    let response = server
        .post("/start")
        .json(&json!({
            "target_url": "http://127.0.0.1:9/unreachable",
            "xpath_selectors": [{"name": "title", "xpath": "title"}]
        }))
        .await;
    let task_id = response.json::<Value>()["task_id"]
        .as_str()
        .unwrap()
        .to_string();

    let task = wait_for_terminal(&server, &task_id).await;
    assert_eq!(task["status"], "completed");
    assert_eq!(task["success"], false);

    let results: Value = server.get("/results").await.json();
    let attempt = &results.as_array().unwrap()[0];
    assert_eq!(attempt["status_code"], 0);
    assert_eq!(attempt["data_size"], 0);
    assert!(attempt["error"].as_str().is_some());
}

#[tokio::test]
async fn test_unmatched_selector_is_null_and_bad_selector_is_error_string() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><title>Hi</title></html>"),
        )
        .mount(&mock)
        .await;

    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({
            "target_url": format!("{}/page", mock.uri()),
            "xpath_selectors": [
                {"name": "title", "xpath": "title"},
                {"name": "headline", "xpath": "h1"},
                {"name": "broken", "xpath": "p["}
            ]
        }))
        .await;
    let task_id = response.json::<Value>()["task_id"]
        .as_str()
        .unwrap()
        .to_string();

    let task = wait_for_terminal(&server, &task_id).await;
    assert_eq!(task["success"], true);

    let results: Value = server.get("/results").await.json();
    let result = &results.as_array().unwrap()[0]["result"];
    assert_eq!(result["title"], json!(["Hi"]));
    assert!(result["headline"].is_null());
    assert!(result["broken"].as_str().unwrap().contains("error"));
}

#[tokio::test]
async fn test_start_rejects_empty_target_url() {
    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({"target_url": "", "xpath_selectors": []}))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_get_result_and_task_not_found() {
    let (server, _, _) = test_server().await;
    let id = uuid::Uuid::new_v4();

    let response = server.get(&format!("/results/{}", id)).await;
    assert_eq!(response.status_code(), 404);

    let response = server.get(&format!("/tasks/{}", id)).await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_task_snapshot_keeps_inert_config_fields() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock)
        .await;

    let (server, _, _) = test_server().await;

    let response = server
        .post("/start")
        .json(&json!({
            "target_url": format!("{}/page", mock.uri()),
            "xpath_selectors": [],
            "auto_discovery": true,
            "max_depth": 5,
            "concurrency": 8
        }))
        .await;
    let task_id = response.json::<Value>()["task_id"]
        .as_str()
        .unwrap()
        .to_string();

    let task = wait_for_terminal(&server, &task_id).await;

    // Accepted and recorded in the snapshot, but a single fetch was made
    assert_eq!(task["config"]["auto_discovery"], true);
    assert_eq!(task["config"]["max_depth"], 5);
    assert_eq!(task["config"]["concurrency"], 8);
    assert_eq!(task["total_urls"], 1);
    assert_eq!(task["completed_urls"], 1);
}
