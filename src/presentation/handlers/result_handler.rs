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

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::{dto::page_query::PageQuery, use_cases::query_use_case::QueryUseCase},
    domain::repositories::{
        attempt_repository::AttemptRepository, task_repository::TaskRepository,
    },
    presentation::errors::AppError,
};

/// 分页获取尝试结果列表
pub async fn list_results<TR, AR>(
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(attempt_repo): Extension<Arc<AR>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError>
where
    TR: TaskRepository + 'static,
    AR: AttemptRepository + 'static,
{
    let use_case = QueryUseCase::new(task_repo, attempt_repo);
    let (offset, limit) = query.to_offset_limit();
    let results = use_case.list_attempts(offset, limit).await?;
    Ok(Json(results))
}

/// 获取单个尝试结果详情
pub async fn get_result<TR, AR>(
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(attempt_repo): Extension<Arc<AR>>,
    Path(result_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    TR: TaskRepository + 'static,
    AR: AttemptRepository + 'static,
{
    let use_case = QueryUseCase::new(task_repo, attempt_repo);

    match use_case.get_attempt(result_id).await? {
        Some(attempt) => Ok((StatusCode::OK, Json(attempt)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Result not found" })),
        )
            .into_response()),
    }
}
