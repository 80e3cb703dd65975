// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use uuid::Uuid;

use fetchrs::domain::models::attempt_result::AttemptResult;
use fetchrs::domain::repositories::attempt_repository::AttemptRepository;

use super::helpers::test_server;

/// 以给定时间戳构造一条尝试记录
fn attempt(timestamp: f64, success: bool) -> AttemptResult {
    AttemptResult {
        id: Uuid::new_v4(),
        url: format!("https://example.com/{}", timestamp),
        success,
        duration: 0.1,
        data_size: 128,
        status_code: if success { 200 } else { 500 },
        error: if success {
            None
        } else {
            Some("HTTP status code: 500".to_string())
        },
        result: json!({}),
        timestamp,
    }
}

#[tokio::test]
async fn test_status_with_no_attempts_has_zero_success_rate() {
    let (server, _, _) = test_server().await;

    let body: Value = server.get("/status").await.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["total_crawls"], 0);
    assert_eq!(body["success_rate"], 0.0);
    assert_eq!(body["recent_tasks"], json!([]));
    assert_eq!(body["recent_results"], json!([]));
}

#[tokio::test]
async fn test_status_aggregates_counts_and_success_rate() {
    let (server, _, attempt_repo) = test_server().await;

    attempt_repo.insert(&attempt(1.0, true)).await.unwrap();
    attempt_repo.insert(&attempt(2.0, false)).await.unwrap();
    attempt_repo.insert(&attempt(3.0, false)).await.unwrap();
    attempt_repo.insert(&attempt(4.0, false)).await.unwrap();

    let body: Value = server.get("/status").await.json();
    assert_eq!(body["total_crawls"], 4);
    assert_eq!(body["success_rate"], 25.0);

    // Recent results come back newest first
    let recent = body["recent_results"].as_array().unwrap();
    assert_eq!(recent[0]["timestamp"], 4.0);
}

#[tokio::test]
async fn test_results_pagination_is_ordered_and_idempotent() {
    let (server, _, attempt_repo) = test_server().await;

    for i in 1..=12 {
        attempt_repo.insert(&attempt(i as f64, true)).await.unwrap();
    }

    let page2: Value = server
        .get("/results")
        .add_query_param("limit", 5)
        .add_query_param("page", 2)
        .await
        .json();

    let items = page2.as_array().unwrap();
    assert_eq!(items.len(), 5);
    // Page 2 of a descending listing over timestamps 1..=12 starts at 7
    assert_eq!(items[0]["timestamp"], 7.0);
    assert_eq!(items[4]["timestamp"], 3.0);

    // Absent new writes, the same query returns the same page
    let again: Value = server
        .get("/results")
        .add_query_param("limit", 5)
        .add_query_param("page", 2)
        .await
        .json();
    assert_eq!(page2, again);
}

#[tokio::test]
async fn test_get_result_by_id_round_trip() {
    let (server, _, attempt_repo) = test_server().await;

    let stored = attempt(42.0, true);
    attempt_repo.insert(&stored).await.unwrap();

    let body: Value = server.get(&format!("/results/{}", stored.id)).await.json();
    assert_eq!(body["id"], stored.id.to_string());
    assert_eq!(body["url"], stored.url);
    assert_eq!(body["timestamp"], 42.0);
}

#[tokio::test]
async fn test_results_default_page_size_is_ten() {
    let (server, _, attempt_repo) = test_server().await;

    for i in 1..=12 {
        attempt_repo.insert(&attempt(i as f64, true)).await.unwrap();
    }

    let body: Value = server.get("/results").await.json();
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["timestamp"], 12.0);
}
