// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::engines::traits::Fetcher;
use crate::infrastructure::repositories::attempt_repo_impl::AttemptRepositoryImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::presentation::handlers::{
    crawl_handler, result_handler, status_handler, task_handler,
};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `task_repo` - 任务仓库
/// * `attempt_repo` - 尝试结果仓库
/// * `fetcher` - 抓取器
/// * `settings` - 应用配置
///
/// # 返回值
///
/// 返回配置好的路由，所有依赖通过Extension注入
pub fn build_router(
    task_repo: Arc<TaskRepositoryImpl>,
    attempt_repo: Arc<AttemptRepositoryImpl>,
    fetcher: Arc<dyn Fetcher>,
    settings: Arc<Settings>,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/start",
            post(crawl_handler::start_crawl::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .route(
            "/status",
            get(status_handler::get_status::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .route(
            "/results",
            get(result_handler::list_results::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .route(
            "/results/{id}",
            get(result_handler::get_result::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .route(
            "/tasks",
            get(task_handler::list_tasks::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .route(
            "/tasks/{id}",
            get(task_handler::get_task::<TaskRepositoryImpl, AttemptRepositoryImpl>),
        )
        .layer(Extension(task_repo))
        .layer(Extension(attempt_repo))
        .layer(Extension(fetcher))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
