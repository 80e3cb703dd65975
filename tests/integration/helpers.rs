// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use std::time::Duration;

use fetchrs::config::settings::{
    CrawlSettings, DatabaseSettings, FetchSettings, ServerSettings, Settings,
};
use fetchrs::engines::fetch_engine::FetchEngine;
use fetchrs::engines::traits::Fetcher;
use fetchrs::infrastructure::database::connection;
use fetchrs::infrastructure::repositories::attempt_repo_impl::AttemptRepositoryImpl;
use fetchrs::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use fetchrs::presentation::routes;

/// 测试配置
///
/// 单连接的内存sqlite，保证连接池内所有查询看到同一个数据库
pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: None,
            connect_timeout: Some(5),
            idle_timeout: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        fetch: FetchSettings {
            user_agent: "fetchrs-test/1.0".to_string(),
            timeout: 5,
        },
        crawl: CrawlSettings {
            default_target_url: None,
        },
    }
}

/// 构建测试服务器
///
/// 内存数据库加真实抓取引擎，仓库实例一并返回
/// 供测试直接写入数据
pub async fn test_server() -> (
    TestServer,
    Arc<TaskRepositoryImpl>,
    Arc<AttemptRepositoryImpl>,
) {
    let settings = Arc::new(test_settings());

    let db = connection::create_pool(&settings.database)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    let db = Arc::new(db);

    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let attempt_repo = Arc::new(AttemptRepositoryImpl::new(db.clone()));
    let fetcher: Arc<dyn Fetcher> =
        Arc::new(FetchEngine::new(&settings.fetch).expect("build fetch engine"));

    let app = routes::build_router(
        task_repo.clone(),
        attempt_repo.clone(),
        fetcher,
        settings,
    );

    (
        TestServer::new(app).expect("start test server"),
        task_repo,
        attempt_repo,
    )
}

/// 轮询任务直到进入终态
///
/// 提交是不阻塞的，测试只能通过查询接口观察完成情况
pub async fn wait_for_terminal(server: &TestServer, task_id: &str) -> serde_json::Value {
    for _ in 0..200 {
        let response = server.get(&format!("/tasks/{}", task_id)).await;
        if response.status_code() == 200 {
            let body: serde_json::Value = response.json();
            let status = body["status"].as_str().unwrap_or_default();
            if status == "completed" || status == "failed" {
                return body;
            }
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("task {} did not reach a terminal state", task_id);
}
