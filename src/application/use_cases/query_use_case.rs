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

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::attempt_result::AttemptResult;
use crate::domain::models::crawl_task::CrawlTask;
use crate::domain::repositories::attempt_repository::AttemptRepository;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};

/// 状态汇总中最近记录的数量
const RECENT_LIMIT: u64 = 5;

/// 状态汇总
#[derive(Debug, Serialize)]
pub struct StatusSummary {
    /// 服务状态，恒为"ready"
    pub status: String,
    /// 尝试结果总数
    pub total_crawls: u64,
    /// 成功率（0-100）
    pub success_rate: f64,
    /// 最近的任务，按开始时间降序
    pub recent_tasks: Vec<CrawlTask>,
    /// 最近的尝试结果，按时间戳降序
    pub recent_results: Vec<AttemptResult>,
}

/// 查询用例
///
/// 只读聚合：状态汇总、分页列表和单条查找。
/// 不做聚合之外的计算，过滤/排序/分页全部委托给存储层。
pub struct QueryUseCase<TR, AR> {
    task_repo: Arc<TR>,
    attempt_repo: Arc<AR>,
}

impl<TR, AR> QueryUseCase<TR, AR>
where
    TR: TaskRepository,
    AR: AttemptRepository,
{
    /// 创建新的查询用例实例
    pub fn new(task_repo: Arc<TR>, attempt_repo: Arc<AR>) -> Self {
        Self {
            task_repo,
            attempt_repo,
        }
    }

    /// 获取状态汇总
    pub async fn status(&self) -> Result<StatusSummary, RepositoryError> {
        let recent_tasks = self.task_repo.list(0, RECENT_LIMIT).await?;
        let total = self.attempt_repo.count().await?;
        let successes = self.attempt_repo.count_successes().await?;
        let recent_results = self.attempt_repo.list(0, RECENT_LIMIT).await?;

        Ok(StatusSummary {
            status: "ready".to_string(),
            total_crawls: total,
            success_rate: success_rate(successes, total),
            recent_tasks,
            recent_results,
        })
    }

    /// 分页列出尝试结果，按时间戳降序
    pub async fn list_attempts(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<AttemptResult>, RepositoryError> {
        self.attempt_repo.list(offset, limit).await
    }

    /// 根据ID查找尝试结果
    pub async fn get_attempt(&self, id: Uuid) -> Result<Option<AttemptResult>, RepositoryError> {
        self.attempt_repo.find_by_id(id).await
    }

    /// 分页列出任务，按开始时间降序
    pub async fn list_tasks(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<CrawlTask>, RepositoryError> {
        self.task_repo.list(offset, limit).await
    }

    /// 根据ID查找任务
    pub async fn get_task(&self, id: Uuid) -> Result<Option<CrawlTask>, RepositoryError> {
        self.task_repo.find_by_id(id).await
    }
}

/// 计算成功率（0-100）
///
/// 总数为0时返回0，避免除零
fn success_rate(successes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    successes as f64 / total as f64 * 100.0
}
