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

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::{
    application::use_cases::query_use_case::{QueryUseCase, StatusSummary},
    domain::repositories::{
        attempt_repository::AttemptRepository, task_repository::TaskRepository,
    },
    presentation::errors::AppError,
};

/// 获取爬虫状态汇总
///
/// 返回最近任务、尝试总数、成功率和最近的尝试结果
pub async fn get_status<TR, AR>(
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(attempt_repo): Extension<Arc<AR>>,
) -> Result<Json<StatusSummary>, AppError>
where
    TR: TaskRepository + 'static,
    AR: AttemptRepository + 'static,
{
    let use_case = QueryUseCase::new(task_repo, attempt_repo);
    Ok(Json(use_case.status().await?))
}
