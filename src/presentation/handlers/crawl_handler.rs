// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{
        dto::crawl_request::CrawlRequestDto,
        use_cases::crawl_use_case::{CrawlUseCase, CrawlUseCaseError},
    },
    config::settings::Settings,
    domain::repositories::{
        attempt_repository::AttemptRepository, task_repository::TaskRepository,
    },
    engines::traits::Fetcher,
};

/// 启动爬取任务
///
/// 提交立即返回任务ID，抓取在后台异步执行
pub async fn start_crawl<TR, AR>(
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(attempt_repo): Extension<Arc<AR>>,
    Extension(fetcher): Extension<Arc<dyn Fetcher>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<CrawlRequestDto>,
) -> impl IntoResponse
where
    TR: TaskRepository + 'static,
    AR: AttemptRepository + 'static,
{
    let use_case = CrawlUseCase::new(
        task_repo,
        attempt_repo,
        fetcher,
        settings.crawl.default_target_url.clone(),
    );

    match use_case.submit(payload).await {
        Ok(task_id) => (
            StatusCode::OK,
            Json(json!({
                "task_id": task_id,
                "status": "started",
                "message": "Crawl task started"
            })),
        )
            .into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<CrawlUseCaseError> for (StatusCode, String) {
    fn from(err: CrawlUseCaseError) -> Self {
        match err {
            CrawlUseCaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            CrawlUseCaseError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            CrawlUseCaseError::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
